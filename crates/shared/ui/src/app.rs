use crate::components::Navbar;
use crate::navigation::platform_navigator;
use crate::sections::SectionView;
use dioxus::prelude::*;
use folio_domain::config::SiteConfig;
use folio_domain::sections::Section;
use tracing::info;

const STYLESHEET: &str = include_str!("../assets/folio.css");

/// Page root. Reads [`SiteConfig`] from context (defaults when absent),
/// provides the theme signal and navigator, and renders the enabled sections.
#[component]
pub fn App() -> Element {
    let config = try_use_context::<SiteConfig>().unwrap_or_default();
    let theme = use_signal(|| config.appearance.theme);
    let sections: Vec<Section> = config.sections.sections().collect();

    use_hook(|| info!(sections = sections.len(), theme = ?config.appearance.theme, "Rendering portfolio"));
    use_context_provider(|| config.clone());
    use_context_provider(|| theme);
    use_context_provider(platform_navigator);

    let root_class = format!("folio {}", theme().class());

    rsx! {
        style { {STYLESHEET} }
        div { class: root_class,
            Navbar {}
            main {
                for section in sections {
                    SectionView { key: "{section}", section }
                }
            }
        }
    }
}
