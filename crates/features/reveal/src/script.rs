//! Intersection reports relayed from a script running in the page.
//!
//! Renderers that cannot hand Rust a DOM element (the desktop webview) run
//! [`observe_script`] in the page instead. The script observes the element by
//! id and sends one [`ScriptReport`] per intersection entry back over the
//! renderer's message channel; [`relay`] feeds those into the observer
//! callback. The script disconnects itself once the element intersects, and
//! [`release_script`] disconnects it early when the element unmounts first.

use crate::error::RevealError;
use crate::observer::{EntryCallback, THRESHOLD};
use crate::visibility::IntersectionEntry;
use serde::Deserialize;
use std::future::Future;
use tracing::debug;

const OBSERVE_TEMPLATE: &str = r#"
const target = __TARGET__;
const registry = (window.__folioReveal ??= {});
registry[target]?.disconnect();
const element = document.getElementById(target);
if (!element) {
    dioxus.send({ kind: "unsupported", reason: `no element with id '${target}'` });
} else if (typeof IntersectionObserver === "undefined") {
    dioxus.send({ kind: "unsupported", reason: "IntersectionObserver is not defined" });
} else {
    const observer = new IntersectionObserver((entries, self) => {
        for (const entry of entries) {
            dioxus.send({ kind: "entry", intersecting: entry.isIntersecting, ratio: entry.intersectionRatio });
            if (entry.isIntersecting && entry.intersectionRatio > 0) {
                self.disconnect();
                delete registry[target];
            }
        }
    }, { threshold: __THRESHOLD__ });
    registry[target] = observer;
    observer.observe(element);
}
"#;

const RELEASE_TEMPLATE: &str = r"
const target = __TARGET__;
const registry = window.__folioReveal ?? {};
registry[target]?.disconnect();
delete registry[target];
";

/// One message sent by [`observe_script`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScriptReport {
    Entry { intersecting: bool, ratio: f64 },
    /// The page cannot observe the element; the observer fails open.
    Unsupported { reason: String },
}

/// Receiving end of the page's message channel.
pub trait ReportChannel {
    /// Next report from the page.
    ///
    /// # Errors
    /// Any [`RevealError`] ends the relay and reveals the element.
    fn recv(&mut self) -> impl Future<Output = Result<ScriptReport, RevealError>>;
}

/// Script that observes the element with id `target` and reports its entries.
#[must_use]
pub fn observe_script(target: &str) -> String {
    OBSERVE_TEMPLATE
        .replace("__TARGET__", &js_string(target))
        .replace("__THRESHOLD__", &THRESHOLD.to_string())
}

/// Script that disconnects the observer started by [`observe_script`].
#[must_use]
pub fn release_script(target: &str) -> String {
    RELEASE_TEMPLATE.replace("__TARGET__", &js_string(target))
}

fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Forwards reports from `channel` into `callback` until the element
/// intersects. A closed channel or an `unsupported` report is turned into a
/// fully visible entry.
pub async fn relay<C: ReportChannel>(mut channel: C, mut callback: EntryCallback) {
    loop {
        match channel.recv().await {
            Ok(ScriptReport::Entry { intersecting, ratio }) => {
                let entry = IntersectionEntry::new(intersecting, ratio);
                callback(entry);
                if entry.intersects() {
                    return;
                }
            }
            Ok(ScriptReport::Unsupported { reason }) => {
                debug!("Page cannot observe element: {reason}");
                callback(IntersectionEntry::FULLY_VISIBLE);
                return;
            }
            Err(err) => {
                debug!("Intersection reports stopped: {err}");
                callback(IntersectionEntry::FULLY_VISIBLE);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripts_quote_the_target_and_use_a_zero_threshold() {
        let script = observe_script("git\"hub");
        assert!(script.contains(r#"const target = "git\"hub";"#), "{script}");
        assert!(script.contains("{ threshold: 0 }"), "{script}");
        assert!(!script.contains("__"), "placeholders left in {script}");

        assert!(release_script("about").contains(r#"const target = "about";"#));
    }

    #[test]
    fn reports_decode_from_page_messages() {
        let entry: ScriptReport =
            serde_json::from_str(r#"{"kind":"entry","intersecting":true,"ratio":0.02}"#).unwrap();
        assert_eq!(entry, ScriptReport::Entry { intersecting: true, ratio: 0.02 });

        let unsupported: ScriptReport =
            serde_json::from_str(r#"{"kind":"unsupported","reason":"old webview"}"#).unwrap();
        assert!(matches!(unsupported, ScriptReport::Unsupported { .. }));
    }
}
