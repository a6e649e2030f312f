use dioxus::prelude::*;
use folio_domain::sections::{Section, SectionSet};
use folio_kernel::navigation::{NavigationError, Navigator};
use std::fmt;
use std::rc::Rc;
use tracing::warn;

const SCROLL_TO_TOP: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

/// Scrolls through the renderer's script bridge. Used where `web-sys` is not
/// available, e.g. inside the desktop webview.
///
/// Scripts are fire and forget: the eval handle is dropped without waiting,
/// so a failing script is not reported as a [`NavigationError`]. A missing
/// section id is a no-op in the page.
#[derive(Debug, Default, Clone, Copy)]
pub struct EvalNavigator;

impl Navigator for EvalNavigator {
    fn scroll_to(&self, section: Section) -> Result<(), NavigationError> {
        drop(document::eval(&scroll_to_script(section)));
        Ok(())
    }

    fn scroll_to_top(&self) -> Result<(), NavigationError> {
        drop(document::eval(SCROLL_TO_TOP));
        Ok(())
    }
}

fn scroll_to_script(section: Section) -> String {
    format!(
        "document.getElementById({:?})?.scrollIntoView({{ behavior: 'smooth' }});",
        section.id()
    )
}

/// Shared navigator placed in context by the app root.
#[derive(Clone)]
pub struct NavigatorHandle(Rc<dyn Navigator>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigator + 'static) -> Self {
        Self(Rc::new(navigator))
    }

    /// Scrolls to `section`, logging instead of failing.
    pub fn go(&self, section: Section) {
        if let Err(err) = self.0.scroll_to(section) {
            warn!("Cannot scroll to {section}: {err}");
        }
    }

    pub fn top(&self) {
        if let Err(err) = self.0.scroll_to_top() {
            warn!("Cannot scroll to top: {err}");
        }
    }
}

impl fmt::Debug for NavigatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigatorHandle").finish_non_exhaustive()
    }
}

/// The navigator suited to the current target.
#[must_use]
pub fn platform_navigator() -> NavigatorHandle {
    #[cfg(target_arch = "wasm32")]
    {
        NavigatorHandle::new(folio_kernel::navigation::DomNavigator)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        NavigatorHandle::new(EvalNavigator)
    }
}

pub fn use_navigator() -> NavigatorHandle {
    use_context::<NavigatorHandle>()
}

/// Navbar entries: every enabled section except the footer, in page order.
#[must_use]
pub fn nav_sections(enabled: SectionSet) -> Vec<Section> {
    enabled.sections().filter(|s| *s != Section::Footer).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_kernel::navigation::RecordingNavigator;

    #[test]
    fn navbar_skips_footer_and_disabled_sections() {
        let enabled = SectionSet::HOME | SectionSet::PROJECTS | SectionSet::FOOTER;
        assert_eq!(nav_sections(enabled), [Section::Home, Section::Projects]);
        assert_eq!(nav_sections(SectionSet::ALL).len(), 8);
    }

    #[test]
    fn eval_scripts_target_the_section_anchor() {
        assert_eq!(
            scroll_to_script(Section::Github),
            r#"document.getElementById("github")?.scrollIntoView({ behavior: 'smooth' });"#
        );
        assert!(SCROLL_TO_TOP.contains("top: 0"));
    }

    #[test]
    fn handle_forwards_to_the_navigator() {
        let recording = Rc::new(RecordingNavigator::default());
        let handle = NavigatorHandle(Rc::clone(&recording) as Rc<dyn Navigator>);

        handle.go(Section::About);
        handle.top();

        assert_eq!(recording.history(), [Some(Section::About), None]);
    }
}
