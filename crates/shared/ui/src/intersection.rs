use dioxus::document::{self, Document, Eval};
use dioxus::prelude::*;
use folio_reveal::{
    EntryCallback, IntersectionPrimitive, Registration, ReportChannel, RevealError, ScriptReport,
    observe_script, relay, release_script,
};
use std::rc::Rc;

/// Observes elements by id through the renderer's script bridge.
///
/// This is the primitive for the desktop webview, where Rust gets no handle to
/// the DOM node. The observer runs in the page and its entries are relayed by a
/// task spawned in the calling component.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvalIntersection;

struct EvalReports(Eval);

impl ReportChannel for EvalReports {
    async fn recv(&mut self) -> Result<ScriptReport, RevealError> {
        self.0.recv::<ScriptReport>().await.map_err(|err| RevealError::Registration {
            message: format!("{err:?}").into(),
            context: Some("Reading intersection report".into()),
        })
    }
}

impl IntersectionPrimitive for EvalIntersection {
    type Element = str;

    fn observe(&self, target: &str, callback: EntryCallback) -> Result<Registration, RevealError> {
        let page: Rc<dyn Document> = document::document();
        let reports = EvalReports(page.eval(observe_script(target)));
        let task = spawn(relay(reports, callback));

        let release = release_script(target);
        Ok(Registration::new(move || {
            task.cancel();
            // Fire and forget: the page drops unknown ids.
            drop(page.eval(release));
        }))
    }
}
