use crate::intersection::EvalIntersection;
use dioxus::prelude::*;
use folio_reveal::{Attachment, ViewportObserver, Visibility};

/// Viewport visibility of one rendered element.
///
/// Wire [`InView::mount`] to the element's `onmounted` handler. The
/// attachment lives in a signal owned by the calling component, so the
/// intersection callback is released when that component unmounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InView {
    /// Id of the element the page observes when no DOM handle is available.
    target: &'static str,
    visibility: Signal<Visibility>,
    attachment: Signal<Option<Attachment>>,
}

impl InView {
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        (self.visibility)()
    }

    pub fn mount(mut self, event: MountedEvent) {
        if self.attachment.peek().is_some() {
            return;
        }

        let mut visibility = self.visibility;
        let on_reveal = move || visibility.set(Visibility::Revealed);

        #[cfg(target_arch = "wasm32")]
        let attachment = match event.data().downcast::<web_sys::Element>() {
            Some(element) => {
                ViewportObserver::new(folio_reveal::DomIntersection).attach(element, on_reveal)
            }
            None => ViewportObserver::new(EvalIntersection).attach(self.target, on_reveal),
        };

        #[cfg(not(target_arch = "wasm32"))]
        let attachment = {
            drop(event);
            ViewportObserver::new(EvalIntersection).attach(self.target, on_reveal)
        };

        self.attachment.set(Some(attachment));
    }
}

/// Tracks whether the element given to [`InView::mount`] has entered the viewport.
///
/// `target` is the id of that element, or of an ancestor with the same bounds.
pub fn use_in_view(target: &'static str) -> InView {
    let visibility = use_signal(|| Visibility::Hidden);
    let attachment = use_signal(|| None::<Attachment>);
    InView { target, visibility, attachment }
}
