use crate::components::{Glyph, Icon, SectionHeading};
use crate::hooks::use_reveal;
use dioxus::prelude::*;
use folio_contact::{ContactFlow, Field, FlowHandle, SimulatedSubmitter, SubmitStatus, submit};
use folio_domain::config::SiteConfig;
use folio_domain::profile::{CONTACT_CHANNELS, SOCIAL_LINKS};
use folio_domain::sections::Section;
use std::time::Duration;
use tracing::debug;

const INTRO: &str = "I'm always open to discussing new opportunities, collaborations, \
                     or just having a chat about technology.";

const CONNECT: &str = "Feel free to reach out for collaborations, opportunities, or just to \
                       say hello. I'm always excited to connect with fellow developers and \
                       tech enthusiasts.";

/// Signal-backed handle so the submission task can drive the form state.
#[derive(Clone, Copy)]
struct SignalFlow(Signal<ContactFlow>);

impl FlowHandle for SignalFlow {
    fn update<R>(&self, f: impl FnOnce(&mut ContactFlow) -> R) -> R {
        let mut signal = self.0;
        let mut flow = signal.write();
        f(&mut flow)
    }
}

const fn field_copy(field: Field) -> (&'static str, &'static str) {
    match field {
        Field::Name => ("Name", "Your Name"),
        Field::Email => ("Email", "your.email@example.com"),
        Field::Message => ("Message", "Your message here..."),
    }
}

#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();
    let reveal = use_reveal(Section::Contact);
    let mut flow = use_signal(ContactFlow::default);
    let mut rejection = use_signal(|| None::<String>);

    let contact = config.contact.clone();
    let onsubmit = move |event: FormEvent| {
        event.prevent_default();
        rejection.set(None);
        let submitter = SimulatedSubmitter::from_config(&contact);
        let display = Duration::from_millis(contact.status_display_ms);
        spawn(async move {
            if let Err(err) = submit(&SignalFlow(flow), &submitter, display).await {
                debug!("Contact form rejected: {err}");
                rejection.set(Some(err.to_string()));
            }
        });
    };

    let status = flow.read().status();
    let banner_class = if status == SubmitStatus::Success { "banner success" } else { "banner error" };

    rsx! {
        section { id: Section::Contact.id(), class: "section alt",
            div {
                class: "container",
                style: reveal.container_css(),
                onmounted: move |event| reveal.mount(event),
                div { style: reveal.item_css(0),
                    SectionHeading { title: "Get In Touch", subtitle: INTRO }
                }
                div { class: "grid two",
                    div { class: "contact-info", style: reveal.item_css(1),
                        h3 { "Let's Connect" }
                        p { class: "muted", {CONNECT} }
                        for channel in CONTACT_CHANNELS {
                            div { key: "{channel.label}", class: "channel",
                                div { class: "channel-icon", Icon { glyph: Glyph::channel(channel.kind) } }
                                div {
                                    p { class: "channel-label", {channel.label} }
                                    if let Some(href) = channel.href {
                                        a { href, {channel.value} }
                                    } else {
                                        p { {channel.value} }
                                    }
                                }
                            }
                        }
                        h3 { "Follow Me" }
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
                    form { class: "card contact-form", style: reveal.item_css(2), onsubmit,
                        h3 { "Send Message" }
                        for field in Field::ALL {
                            FieldInput {
                                key: "{field}",
                                field,
                                value: flow.read().form().get(field).to_owned(),
                                oninput: move |value: String| flow.write().edit(field, value),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "button primary wide",
                            disabled: status.is_submitting(),
                            if status.is_submitting() {
                                span { class: "spinner small" }
                            } else {
                                Icon { glyph: Glyph::Send }
                                "Send Message"
                            }
                        }
                        if let Some(reason) = rejection() {
                            div { class: "banner error", {reason} }
                        }
                        if let Some(text) = status.banner() {
                            div { class: banner_class, {text} }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(field: Field, value: String, oninput: EventHandler<String>) -> Element {
    let (label, placeholder) = field_copy(field);
    let id = field.id();

    rsx! {
        div { class: "field",
            label { r#for: id, {label} }
            if field == Field::Message {
                textarea {
                    id,
                    name: id,
                    rows: "5",
                    required: true,
                    placeholder,
                    value,
                    oninput: move |event: FormEvent| oninput.call(event.value()),
                }
            } else {
                input {
                    id,
                    name: id,
                    r#type: if field == Field::Email { "email" } else { "text" },
                    required: true,
                    placeholder,
                    value,
                    oninput: move |event: FormEvent| oninput.call(event.value()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_a_label_and_placeholder() {
        for field in Field::ALL {
            let (label, placeholder) = field_copy(field);
            assert!(!label.is_empty() && !placeholder.is_empty(), "{field}");
        }
        assert_eq!(field_copy(Field::Email).1, "your.email@example.com");
    }
}
