use super::glyph::{Glyph, Icon};
use crate::navigation::{nav_sections, use_navigator};
use dioxus::prelude::*;
use folio_domain::config::{SiteConfig, Theme};
use folio_domain::profile::PROFILE;

/// Fixed top bar: brand, section links, theme toggle and the mobile menu.
#[component]
pub fn Navbar() -> Element {
    let config = use_context::<SiteConfig>();
    let navigator = use_navigator();
    let mut theme = use_context::<Signal<Theme>>();
    let mut menu_open = use_signal(|| false);

    let links = nav_sections(config.sections);
    let theme_glyph = if theme().is_dark() { Glyph::Sun } else { Glyph::Moon };
    let menu_glyph = if menu_open() { Glyph::Close } else { Glyph::Menu };
    let links_class = if menu_open() { "nav-links open" } else { "nav-links" };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                button {
                    class: "brand",
                    onclick: {
                        let navigator = navigator.clone();
                        move |_| navigator.top()
                    },
                    {PROFILE.name}
                }
                ul { class: links_class,
                    for section in links {
                        li { key: "{section}",
                            a {
                                href: "#{section}",
                                onclick: {
                                    let navigator = navigator.clone();
                                    move |event: MouseEvent| {
                                        event.prevent_default();
                                        navigator.go(section);
                                        menu_open.set(false);
                                    }
                                },
                                {section.label()}
                            }
                        }
                    }
                }
                div { class: "nav-actions",
                    button {
                        class: "icon-button",
                        aria_label: "Toggle theme",
                        onclick: move |_| {
                            let next = theme().toggled();
                            theme.set(next);
                        },
                        Icon { glyph: theme_glyph }
                    }
                    button {
                        class: "icon-button menu-toggle",
                        aria_label: "Toggle menu",
                        onclick: move |_| {
                            let next = !menu_open();
                            menu_open.set(next);
                        },
                        Icon { glyph: menu_glyph }
                    }
                }
            }
        }
    }
}
