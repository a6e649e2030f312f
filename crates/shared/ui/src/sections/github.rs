use crate::components::{Glyph, Icon, SectionHeading, StatGrid};
use crate::hooks::{Reveal, use_reveal};
use dioxus::prelude::*;
use folio_domain::config::SiteConfig;
use folio_domain::content::RepositorySummary;
use folio_domain::profile::GITHUB_STATS;
use folio_domain::sections::Section;
use folio_github::{
    description_or_placeholder, format_updated, language_color, load_configured_feed,
    visible_topics,
};

const INTRO: &str = "Explore my latest projects and contributions on GitHub. \
                     Here are some of my most recent repositories.";

/// Live repository listing. The fetch runs once in a resource owned by this
/// component, so unmounting cancels it.
#[component]
pub fn Github() -> Element {
    let config = use_context::<SiteConfig>();
    let reveal = use_reveal(Section::Github);
    let profile_url = format!("https://github.com/{}", config.github.account);

    let feed = use_resource(move || {
        let github = config.github.clone();
        async move { load_configured_feed(&github).await }
    });
    let feed = feed.cloned();
    let repositories = feed.as_ref().map(|f| f.repositories.clone()).unwrap_or_default();
    let stats_index = repositories.len() + 2;

    rsx! {
        section { id: Section::Github.id(), class: "section alt",
            div {
                class: "container",
                style: reveal.container_css(),
                onmounted: move |event| reveal.mount(event),
                div { style: reveal.item_css(0),
                    SectionHeading { title: "GitHub Repositories", subtitle: INTRO }
                }
                div { class: "centered", style: reveal.item_css(1),
                    a { class: "button dark", href: profile_url, target: "_blank", rel: "noopener noreferrer",
                        Icon { glyph: Glyph::Github }
                        "View Full GitHub Profile"
                        Icon { glyph: Glyph::External }
                    }
                }
                match &feed {
                    None => rsx! {
                        div { class: "loading",
                            div { class: "spinner" }
                            p { class: "muted", "Loading repositories..." }
                        }
                    },
                    Some(feed) => rsx! {
                        if let Some(notice) = feed.notice() {
                            div { class: "fallback-notice",
                                p { class: "error-text", {notice} }
                                p { class: "muted", "Showing demo repositories instead" }
                            }
                        }
                    },
                }
                div { class: "grid three",
                    for (index, repository) in repositories.into_iter().enumerate() {
                        RepositoryCard {
                            key: "{repository.id}",
                            reveal,
                            index: index + 2,
                            repository,
                        }
                    }
                }
                StatGrid { stats: GITHUB_STATS, style: reveal.item_css(stats_index) }
            }
        }
    }
}

/// Cards can arrive after the section revealed, so each one renders hidden
/// until it is mounted and then transitions in on its stagger slot.
#[component]
fn RepositoryCard(repository: RepositorySummary, reveal: Reveal, index: usize) -> Element {
    let mut mounted = use_signal(|| false);
    let style = reveal.entering_item_css(index, mounted());
    let description = description_or_placeholder(&repository).to_owned();
    let topics = visible_topics(&repository).to_vec();
    let language = repository.language.clone().map(|name| {
        let dot = format!("background-color: {}", language_color(&name));
        (name, dot)
    });
    let updated = format!("Updated {}", format_updated(&repository.updated_at));

    rsx! {
        article {
            class: "card repository",
            style,
            onmounted: move |_| mounted.set(true),
            div { class: "repository-head",
                Icon { glyph: Glyph::Github }
                h3 { class: "repository-name", {repository.name.clone()} }
                a {
                    href: repository.html_url.clone(),
                    target: "_blank",
                    rel: "noopener noreferrer",
                    aria_label: "Open repository",
                    Icon { glyph: Glyph::External }
                }
            }
            p { class: "muted clamp", {description} }
            if !topics.is_empty() {
                div { class: "chips",
                    for topic in topics {
                        span { key: "{topic}", class: "tag", {topic.clone()} }
                    }
                }
            }
            div { class: "repository-meta",
                if let Some((name, dot)) = language {
                    span { class: "language",
                        span { class: "language-dot", style: dot }
                        {name}
                    }
                }
                span { Icon { glyph: Glyph::Star } "{repository.stargazers_count}" }
                span { Icon { glyph: Glyph::Fork } "{repository.forks_count}" }
            }
            div { class: "repository-updated",
                Icon { glyph: Glyph::Calendar }
                {updated}
            }
        }
    }
}
