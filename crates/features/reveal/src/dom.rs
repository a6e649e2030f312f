//! `IntersectionObserver` binding for the browser target.

use crate::error::RevealError;
use crate::observer::{EntryCallback, IntersectionPrimitive, Registration, THRESHOLD};
use crate::visibility::IntersectionEntry;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::{Closure, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observes DOM elements with the browser's `IntersectionObserver`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomIntersection;

impl IntersectionPrimitive for DomIntersection {
    type Element = Element;

    fn observe(
        &self,
        element: &Element,
        mut callback: EntryCallback,
    ) -> Result<Registration, RevealError> {
        let window = web_sys::window().ok_or_else(|| RevealError::Unsupported {
            message: "no global window".into(),
            context: None,
        })?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err(RevealError::Unsupported {
                message: "IntersectionObserver is not defined".into(),
                context: None,
            });
        }

        let handler = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    callback(IntersectionEntry::new(
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    ));
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(THRESHOLD));

        let observer =
            IntersectionObserver::new_with_options(handler.as_ref().unchecked_ref(), &options)
                .map_err(|err| RevealError::Registration {
                    message: format!("{err:?}").into(),
                    context: Some("Creating IntersectionObserver".into()),
                })?;
        observer.observe(element);

        Ok(Registration::new(move || {
            observer.disconnect();
            drop(handler);
        }))
    }
}
