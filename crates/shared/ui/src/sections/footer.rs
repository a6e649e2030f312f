use crate::components::{Glyph, Icon};
use crate::navigation::use_navigator;
use dioxus::prelude::*;
use folio_domain::config::SiteConfig;
use folio_domain::profile::{PROFILE, SOCIAL_LINKS};
use folio_domain::sections::{Section, SectionSet};

const QUICK_LINKS: [Section; 4] =
    [Section::About, Section::Projects, Section::Skills, Section::Contact];

/// Quick links limited to the sections that are rendered.
fn quick_links(enabled: SectionSet) -> impl Iterator<Item = Section> {
    QUICK_LINKS.into_iter().filter(move |s| enabled.shows(*s))
}

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let navigator = use_navigator();
    let to_top = navigator.clone();

    rsx! {
        footer { id: Section::Footer.id(), class: "footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h3 { class: "gradient-text", {PROFILE.name} }
                        p { class: "muted", {PROFILE.summary} }
                        div { class: "socials",
                            for link in SOCIAL_LINKS {
                                a {
                                    key: "{link.label}",
                                    class: "social-button",
                                    href: link.href,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    aria_label: link.label,
                                    Icon { glyph: Glyph::social(link.kind) }
                                }
                            }
                        }
                    }
                    div {
                        h3 { "Quick Links" }
                        ul { class: "footer-links",
                            for section in quick_links(config.sections) {
                                li { key: "{section}",
                                    button {
                                        class: "link",
                                        onclick: {
                                            let navigator = navigator.clone();
                                            move |_| navigator.go(section)
                                        },
                                        {section.label()}
                                    }
                                }
                            }
                        }
                    }
                    div {
                        h3 { "Get In Touch" }
                        p { class: "muted", {PROFILE.location} }
                        a { class: "footer-contact", href: "mailto:{PROFILE.email}", {PROFILE.email} }
                        a { class: "footer-contact", href: PROFILE.phone_href, {PROFILE.phone} }
                    }
                }
                div { class: "footer-bottom",
                    span {
                        "\u{a9} 2025 {PROFILE.name}. Made with "
                        span { class: "heart", Icon { glyph: Glyph::Heart } }
                        " using Rust & Dioxus"
                    }
                    button {
                        class: "icon-button gradient",
                        aria_label: "Back to top",
                        onclick: move |_| to_top.top(),
                        Icon { glyph: Glyph::ArrowUp }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_links_follow_enabled_sections() {
        let all: Vec<_> = quick_links(SectionSet::ALL).collect();
        assert_eq!(all, QUICK_LINKS);

        let trimmed: Vec<_> = quick_links(SectionSet::HOME | SectionSet::CONTACT).collect();
        assert_eq!(trimmed, [Section::Contact]);
    }
}
