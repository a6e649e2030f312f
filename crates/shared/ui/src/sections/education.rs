use crate::components::{Glyph, Icon, SectionHeading};
use crate::hooks::use_reveal;
use dioxus::prelude::*;
use folio_domain::profile::{CERTIFICATIONS, EDUCATION};
use folio_domain::sections::Section;

#[component]
pub fn Education() -> Element {
    let reveal = use_reveal(Section::Education);
    let offset = EDUCATION.len() + 1;

    rsx! {
        section { id: Section::Education.id(), class: "section",
            div {
                class: "container",
                style: reveal.container_css(),
                onmounted: move |event| reveal.mount(event),
                div { style: reveal.item_css(0), SectionHeading { title: "Education & Certifications" } }
                div { class: "grid two",
                    div {
                        h3 { class: "column-title", Icon { glyph: Glyph::Book } "Education" }
                        div { class: "timeline",
                            for (index, entry) in EDUCATION.iter().enumerate() {
                                div { key: "{entry.id}", class: "card timeline-entry", style: reveal.item_css(index + 1),
                                    h4 { {entry.degree} }
                                    p { class: "muted", {entry.institution} }
                                    div { class: "meta",
                                        span { Icon { glyph: Glyph::Pin } {entry.location} }
                                        span { Icon { glyph: Glyph::Calendar } {entry.year} }
                                    }
                                    span { class: "badge", {entry.grade} }
                                }
                            }
                        }
                    }
                    div {
                        h3 { class: "column-title", Icon { glyph: Glyph::Award } "Certifications" }
                        for (index, cert) in CERTIFICATIONS.iter().enumerate() {
                            div { key: "{cert.id}", class: "card certification", style: reveal.item_css(offset + index),
                                h4 { {cert.title} }
                                p { class: "muted", "{cert.issuer} \u{b7} {cert.year}" }
                                if let Some(description) = cert.description {
                                    p { {description} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
