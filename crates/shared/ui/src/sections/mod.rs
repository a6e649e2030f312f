//! One component per page section, each rooted at the section's anchor id.

mod about;
mod achievements;
mod contact;
mod education;
mod footer;
mod github;
mod hero;
mod projects;
mod skills;

pub use about::About;
pub use achievements::Achievements;
pub use contact::Contact;
pub use education::Education;
pub use footer::Footer;
pub use github::Github;
pub use hero::Hero;
pub use projects::Projects;
pub use skills::Skills;

use dioxus::prelude::*;
use folio_domain::sections::Section;

/// Renders the component for `section`.
#[component]
pub fn SectionView(section: Section) -> Element {
    match section {
        Section::Home => rsx! { Hero {} },
        Section::About => rsx! { About {} },
        Section::Education => rsx! { Education {} },
        Section::Skills => rsx! { Skills {} },
        Section::Projects => rsx! { Projects {} },
        Section::Github => rsx! { Github {} },
        Section::Achievements => rsx! { Achievements {} },
        Section::Contact => rsx! { Contact {} },
        Section::Footer => rsx! { Footer {} },
    }
}
