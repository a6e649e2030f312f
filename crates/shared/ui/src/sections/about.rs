use crate::components::{Glyph, Icon, SectionHeading};
use crate::hooks::use_reveal;
use dioxus::prelude::*;
use folio_domain::profile::{HIGHLIGHTS, PROFILE};
use folio_domain::sections::Section;

const HIGHLIGHT_GLYPHS: [Glyph; 3] = [Glyph::Code, Glyph::Bulb, Glyph::Target];

#[component]
pub fn About() -> Element {
    let reveal = use_reveal(Section::About);

    rsx! {
        section { id: Section::About.id(), class: "section alt",
            div {
                class: "container",
                style: reveal.container_css(),
                onmounted: move |event| reveal.mount(event),
                div { style: reveal.item_css(0), SectionHeading { title: "About Me" } }
                div { class: "grid two",
                    div { style: reveal.item_css(1),
                        div { class: "card bio",
                            for paragraph in PROFILE.bio {
                                p { {*paragraph} }
                            }
                            div { class: "chips",
                                for label in PROFILE.traits {
                                    span { key: "{label}", class: "chip", {*label} }
                                }
                            }
                        }
                    }
                    div { class: "highlights", style: reveal.item_css(2),
                        for (highlight, glyph) in HIGHLIGHTS.iter().zip(HIGHLIGHT_GLYPHS) {
                            div { key: "{highlight.title}", class: "highlight",
                                div { class: "highlight-icon", Icon { glyph } }
                                div {
                                    h3 { {highlight.title} }
                                    p { {highlight.description} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
