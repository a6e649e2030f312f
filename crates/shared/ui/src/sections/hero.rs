use crate::components::{Glyph, Icon};
use crate::hooks::use_reveal;
use crate::navigation::use_navigator;
use dioxus::prelude::*;
use folio_domain::profile::{CONTACT_CHANNELS, PROFILE, SOCIAL_LINKS};
use folio_domain::sections::Section;

#[component]
pub fn Hero() -> Element {
    let reveal = use_reveal(Section::Home);
    let navigator = use_navigator();

    rsx! {
        section { id: Section::Home.id(), class: "hero",
            div { class: "hero-backdrop" }
            div {
                class: "hero-content",
                style: reveal.container_css(),
                onmounted: move |event| reveal.mount(event),
                div { class: "hero-title", style: reveal.item_css(0),
                    h1 {
                        "Hello, I'm "
                        span { class: "gradient-text", {PROFILE.name} }
                    }
                    p { class: "hero-headline", {PROFILE.headline} }
                }
                div { class: "hero-channels", style: reveal.item_css(1),
                    for channel in CONTACT_CHANNELS {
                        span { key: "{channel.label}", class: "hero-channel",
                            Icon { glyph: Glyph::channel(channel.kind) }
                            if let Some(href) = channel.href {
                                a { href, {channel.value} }
                            } else {
                                span { {channel.value} }
                            }
                        }
                    }
                }
                div { class: "hero-socials", style: reveal.item_css(2),
                    for (index, link) in SOCIAL_LINKS.iter().enumerate() {
                        a {
                            key: "{link.label}",
                            class: "social-button floating",
                            style: float_delay(index),
                            href: link.href,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: link.label,
                            Icon { glyph: Glyph::social(link.kind) }
                        }
                    }
                }
                div { class: "hero-cta", style: reveal.item_css(3),
                    button {
                        class: "button primary",
                        onclick: move |_| navigator.go(Section::About),
                        "Explore My Work"
                    }
                }
            }
            div { class: "scroll-indicator", div { class: "scroll-dot" } }
        }
    }
}

/// Social buttons bob out of phase, 200 ms apart.
fn float_delay(index: usize) -> String {
    format!("animation-delay: {}ms", index * 200)
}
