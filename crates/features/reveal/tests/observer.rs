use folio_reveal::{
    EntryCallback, IntersectionEntry, IntersectionPrimitive, Registration, RevealError,
    ViewportObserver, Visibility,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Primitive driven by hand: tests push entries through the stored callback.
#[derive(Default)]
struct ScriptedPrimitive {
    callback: Rc<RefCell<Option<EntryCallback>>>,
    released: Rc<Cell<u32>>,
    refuse: bool,
}

impl IntersectionPrimitive for ScriptedPrimitive {
    type Element = str;

    fn observe(
        &self,
        _element: &str,
        callback: EntryCallback,
    ) -> Result<Registration, RevealError> {
        if self.refuse {
            return Err(RevealError::Registration {
                message: "element detached".into(),
                context: None,
            });
        }
        *self.callback.borrow_mut() = Some(callback);

        let slot = Rc::clone(&self.callback);
        let released = Rc::clone(&self.released);
        Ok(Registration::new(move || {
            slot.borrow_mut().take();
            released.set(released.get() + 1);
        }))
    }
}

fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
    let hits = Rc::new(Cell::new(0));
    let probe = Rc::clone(&hits);
    (hits, move || probe.set(probe.get() + 1))
}

#[test]
fn attached_element_starts_hidden() {
    let observer = ViewportObserver::new(ScriptedPrimitive::default());
    let (hits, on_reveal) = counter();
    let attachment = observer.attach("#about", on_reveal);

    assert!(attachment.is_registered());
    assert_eq!(attachment.visibility(), Visibility::Hidden);
    assert_eq!(hits.get(), 0);
}

#[test]
fn scripted_entries_flip_the_latch_once() {
    let primitive = ScriptedPrimitive::default();
    let callback = Rc::clone(&primitive.callback);
    let observer = ViewportObserver::new(primitive);
    let (hits, on_reveal) = counter();
    let attachment = observer.attach("#projects", on_reveal);

    let emit = |entry| {
        if let Some(cb) = callback.borrow_mut().as_mut() {
            cb(entry);
        }
    };

    emit(IntersectionEntry::new(false, 0.0));
    assert_eq!(attachment.visibility(), Visibility::Hidden);

    emit(IntersectionEntry::new(true, 0.25));
    emit(IntersectionEntry::new(false, 0.0));
    emit(IntersectionEntry::new(true, 0.9));

    assert_eq!(attachment.visibility(), Visibility::Revealed);
    assert_eq!(hits.get(), 1);
}

#[test]
fn dropping_the_attachment_deregisters() {
    let primitive = ScriptedPrimitive::default();
    let released = Rc::clone(&primitive.released);
    let callback = Rc::clone(&primitive.callback);
    let observer = ViewportObserver::new(primitive);
    let (hits, on_reveal) = counter();

    let attachment = observer.attach("#github", on_reveal);
    assert!(callback.borrow().is_some());

    drop(attachment);

    assert_eq!(released.get(), 1);
    assert!(callback.borrow().is_none(), "host callback must be released on unmount");
    assert_eq!(hits.get(), 0);
}

#[test]
fn refused_registration_reveals_immediately() {
    let observer = ViewportObserver::new(ScriptedPrimitive { refuse: true, ..Default::default() });
    let (hits, on_reveal) = counter();

    let attachment = observer.attach("#contact", on_reveal);

    assert_eq!(attachment.visibility(), Visibility::Revealed);
    assert!(!attachment.is_registered());
    assert_eq!(hits.get(), 1);
}
