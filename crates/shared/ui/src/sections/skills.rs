use crate::components::SectionHeading;
use crate::hooks::{Reveal, use_reveal};
use dioxus::prelude::*;
use folio_domain::content::{Skill, SkillCategory};
use folio_domain::profile::{COMPETENCIES, skills_in};
use folio_domain::sections::Section;
use folio_reveal::skill_bar;

const fn category_class(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Programming => "bar-fill programming",
        SkillCategory::Frontend => "bar-fill frontend",
        SkillCategory::Core => "bar-fill core",
    }
}

#[component]
pub fn Skills() -> Element {
    let reveal = use_reveal(Section::Skills);
    let competencies_index = SkillCategory::ALL.len() + 1;

    rsx! {
        section { id: Section::Skills.id(), class: "section alt",
            div {
                class: "container",
                style: reveal.container_css(),
                onmounted: move |event| reveal.mount(event),
                div { style: reveal.item_css(0), SectionHeading { title: "Technical Skills" } }
                div { class: "skill-groups",
                    for (index, category) in SkillCategory::ALL.into_iter().enumerate() {
                        div { key: "{index}", class: "card skill-group", style: reveal.item_css(index + 1),
                            h3 { {category.label()} }
                            for (position, skill) in skills_in(category).enumerate() {
                                SkillBar { key: "{skill.name}", reveal, skill: *skill, position }
                            }
                        }
                    }
                }
                div { class: "competencies", style: reveal.item_css(competencies_index),
                    h3 { "Additional Competencies" }
                    div { class: "chips centered",
                        for name in COMPETENCIES {
                            span { key: "{name}", class: "chip raised", {*name} }
                        }
                    }
                }
            }
        }
    }
}

/// One labelled progress bar. Bars fill once the section is revealed, each
/// 100 ms after the previous one in its group.
#[component]
fn SkillBar(reveal: Reveal, skill: Skill, position: usize) -> Element {
    let fill = reveal.own_timing_css(&skill_bar(skill.level, position));

    rsx! {
        div { class: "skill",
            div { class: "skill-label",
                h4 { {skill.name} }
                span { "{skill.level}%" }
            }
            div { class: "bar-track",
                div { class: category_class(skill.category), style: fill }
            }
        }
    }
}
