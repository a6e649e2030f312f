use std::time::Duration;

/// Suspends the current task for `duration`.
///
/// Natively this is `tokio::time::sleep`, so tests can drive it with a paused
/// clock. In the browser it awaits a `setTimeout` promise.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    use wasm_bindgen::JsCast;

    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(
                resolve.unchecked_ref(),
                millis,
            )
        });
        // Without a window there is nothing to wait on; resolve immediately.
        if !matches!(scheduled, Some(Ok(_))) {
            let _ = resolve.call0(&wasm_bindgen::JsValue::UNDEFINED);
        }
    });

    if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
        tracing::warn!("Timer promise rejected: {err:?}");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_follows_the_paused_clock() {
        let started = tokio::time::Instant::now();
        sleep(Duration::from_millis(1_000)).await;
        assert_eq!(started.elapsed().as_millis(), 1_000);
    }
}
