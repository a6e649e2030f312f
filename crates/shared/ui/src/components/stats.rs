use dioxus::prelude::*;
use folio_domain::content::Stat;

#[component]
pub fn StatGrid(stats: &'static [Stat], style: String) -> Element {
    rsx! {
        div { class: "stat-grid", style,
            for stat in stats {
                div { key: "{stat.label}", class: "stat",
                    div { class: "stat-value", {stat.value} }
                    div { class: "stat-label", {stat.label} }
                }
            }
        }
    }
}
