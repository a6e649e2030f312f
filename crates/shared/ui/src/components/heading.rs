use dioxus::prelude::*;

/// Section title with the gradient rule underneath.
#[component]
pub fn SectionHeading(title: &'static str, subtitle: Option<&'static str>) -> Element {
    rsx! {
        div { class: "section-heading",
            h2 { {title} }
            div { class: "rule" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", {subtitle} }
            }
        }
    }
}
