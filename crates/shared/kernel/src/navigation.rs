//! Scroll navigation between page sections.
//!
//! Components never query the document directly; they ask a [`Navigator`].
//! The browser build uses [`DomNavigator`]; tests use [`RecordingNavigator`].

use crate::domain::sections::Section;
use std::borrow::Cow;
use std::cell::RefCell;

#[folio_derive::folio_error]
pub enum NavigationError {
    /// The anchor for a section is not in the document.
    #[error("Section anchor missing{}: #{id}", format_context(context))]
    MissingAnchor { id: &'static str, context: Option<Cow<'static, str>> },

    /// The host has no window or document to scroll.
    #[error("Navigation unavailable{}: {message}", format_context(context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Capability to move the viewport.
pub trait Navigator {
    /// Smoothly scrolls the section's anchor into view.
    ///
    /// # Errors
    /// Returns [`NavigationError::MissingAnchor`] when the section is not rendered.
    fn scroll_to(&self, section: Section) -> Result<(), NavigationError>;

    /// Smoothly scrolls back to the top of the page.
    ///
    /// # Errors
    /// Returns [`NavigationError::Unavailable`] when there is nothing to scroll.
    fn scroll_to_top(&self) -> Result<(), NavigationError>;
}

/// Records requested targets instead of scrolling. `None` marks a scroll to top.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    history: RefCell<Vec<Option<Section>>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn history(&self) -> Vec<Option<Section>> {
        self.history.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn scroll_to(&self, section: Section) -> Result<(), NavigationError> {
        self.history.borrow_mut().push(Some(section));
        Ok(())
    }

    fn scroll_to_top(&self) -> Result<(), NavigationError> {
        self.history.borrow_mut().push(None);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomNavigator;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::{NavigationError, Navigator};
    use crate::domain::sections::Section;
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window};

    /// Scrolls the live document through `web-sys`.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct DomNavigator;

    fn window() -> Result<Window, NavigationError> {
        web_sys::window().ok_or_else(|| NavigationError::Unavailable {
            message: "no global window".into(),
            context: None,
        })
    }

    impl Navigator for DomNavigator {
        fn scroll_to(&self, section: Section) -> Result<(), NavigationError> {
            let element = window()?
                .document()
                .and_then(|doc| doc.get_element_by_id(section.id()))
                .ok_or(NavigationError::MissingAnchor { id: section.id(), context: None })?;

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            Ok(())
        }

        fn scroll_to_top(&self) -> Result<(), NavigationError> {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window()?.scroll_to_with_scroll_to_options(&options);
            Ok(())
        }
    }
}
