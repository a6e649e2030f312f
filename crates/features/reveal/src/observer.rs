//! Binding between a rendered element and the host's intersection primitive.
//!
//! An [`Attachment`] owns the registration for one element. Dropping it
//! releases the host callback, so an unmounted section stops receiving
//! intersection reports. When the primitive cannot be used the element is
//! revealed on the spot instead of staying invisible forever.

use crate::error::RevealError;
use crate::visibility::{IntersectionEntry, Transition, Visibility, VisibilityLatch};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Visible fraction at which hosts report a crossing. Zero makes the host
/// report the first visible pixel; [`IntersectionEntry::intersects`] decides.
pub const THRESHOLD: f64 = 0.0;

/// Callback the primitive invokes for each intersection report.
pub type EntryCallback = Box<dyn FnMut(IntersectionEntry)>;

/// A host facility that reports when elements cross the viewport.
pub trait IntersectionPrimitive {
    /// Handle to the rendered element the host knows how to observe.
    type Element: ?Sized;

    /// Starts observing `element`, calling `callback` for every report.
    ///
    /// # Errors
    /// Returns [`RevealError::Unsupported`] when the host has no such facility,
    /// or [`RevealError::Registration`] when observing the element fails.
    fn observe(
        &self,
        element: &Self::Element,
        callback: EntryCallback,
    ) -> Result<Registration, RevealError>;
}

/// Live host registration. Dropping it runs the release hook exactly once.
#[must_use = "Dropping the registration stops observing the element."]
pub struct Registration {
    release: Option<Box<dyn FnOnce()>>,
}

impl Registration {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").field("active", &self.release.is_some()).finish()
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

/// Primitive for renderers without intersection support. Every attach fails open.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unsupported;

impl IntersectionPrimitive for Unsupported {
    type Element = ();

    fn observe(&self, _element: &(), _callback: EntryCallback) -> Result<Registration, RevealError> {
        Err(RevealError::Unsupported {
            message: "renderer does not expose viewport intersection".into(),
            context: None,
        })
    }
}

/// Attaches elements to a primitive and hands back their visibility latch.
#[derive(Debug, Default, Clone)]
pub struct ViewportObserver<P> {
    primitive: P,
}

impl<P: IntersectionPrimitive> ViewportObserver<P> {
    pub const fn new(primitive: P) -> Self {
        Self { primitive }
    }

    /// Registers `element` and calls `on_reveal` once, when it first intersects.
    ///
    /// If registration fails the latch is revealed immediately and `on_reveal`
    /// runs before this returns; the failure is only logged.
    pub fn attach(
        &self,
        element: &P::Element,
        on_reveal: impl FnMut() + 'static,
    ) -> Attachment {
        let latch = Rc::new(RefCell::new(VisibilityLatch::new()));
        let on_reveal = Rc::new(RefCell::new(on_reveal));

        let callback: EntryCallback = {
            let latch = Rc::clone(&latch);
            let on_reveal = Rc::clone(&on_reveal);
            Box::new(move |entry| {
                let transition = latch.borrow_mut().observe(entry);
                if transition == Transition::Revealed {
                    (*on_reveal.borrow_mut())();
                }
            })
        };

        match self.primitive.observe(element, callback) {
            Ok(registration) => {
                debug!("Viewport observer registered");
                Attachment { latch, registration: Some(registration) }
            }
            Err(err) => {
                debug!("Revealing without observer: {err}");
                let transition = latch.borrow_mut().reveal();
                if transition == Transition::Revealed {
                    (*on_reveal.borrow_mut())();
                }
                Attachment { latch, registration: None }
            }
        }
    }
}

/// One observed element. Drop to deregister.
pub struct Attachment {
    latch: Rc<RefCell<VisibilityLatch>>,
    registration: Option<Registration>,
}

impl Attachment {
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.latch.borrow().visibility()
    }

    /// False when the attachment failed open and holds no host registration.
    #[must_use]
    pub const fn is_registered(&self) -> bool {
        self.registration.is_some()
    }
}

impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("visibility", &self.visibility())
            .field("registration", &self.registration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn unsupported_primitive_fails_open() {
        let hits = Rc::new(Cell::new(0));
        let observer = ViewportObserver::new(Unsupported);

        let attachment = observer.attach(&(), {
            let hits = Rc::clone(&hits);
            move || hits.set(hits.get() + 1)
        });

        assert_eq!(attachment.visibility(), Visibility::Revealed);
        assert!(!attachment.is_registered());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn registration_releases_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        let registration = Registration::new({
            let released = Rc::clone(&released);
            move || released.set(released.get() + 1)
        });

        assert_eq!(released.get(), 0);
        drop(registration);
        assert_eq!(released.get(), 1);
    }
}
