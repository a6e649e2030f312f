use crate::components::{Glyph, Icon, SectionHeading};
use crate::hooks::use_reveal;
use dioxus::prelude::*;
use folio_domain::profile::PROJECTS;
use folio_domain::sections::Section;

#[component]
pub fn Projects() -> Element {
    let reveal = use_reveal(Section::Projects);

    rsx! {
        section { id: Section::Projects.id(), class: "section",
            div {
                class: "container",
                style: reveal.container_css(),
                onmounted: move |event| reveal.mount(event),
                div { style: reveal.item_css(0), SectionHeading { title: "Featured Projects" } }
                div { class: "grid three",
                    for (index, project) in PROJECTS.iter().enumerate() {
                        article { key: "{project.id}", class: "card project", style: reveal.item_css(index + 1),
                            div { class: "project-cover",
                                img { src: project.image, alt: project.title, loading: "lazy" }
                                if let Some(status) = project.status {
                                    span { class: "status-badge", {status} }
                                }
                            }
                            div { class: "project-body",
                                h3 { {project.title} }
                                p { class: "muted", {project.description} }
                                div { class: "chips",
                                    for tech in project.technologies {
                                        span { key: "{tech}", class: "tag", {*tech} }
                                    }
                                }
                                div { class: "project-links",
                                    if let Some(url) = project.live_url {
                                        a { href: url, target: "_blank", rel: "noopener noreferrer",
                                            Icon { glyph: Glyph::External }
                                            "Live Demo"
                                        }
                                    }
                                    if let Some(url) = project.github_url {
                                        a { href: url, target: "_blank", rel: "noopener noreferrer",
                                            Icon { glyph: Glyph::Github }
                                            "Code"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
