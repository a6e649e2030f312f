use dioxus::prelude::*;
use folio_domain::content::{ChannelKind, SocialKind};

/// Inline symbols used in place of an icon font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Github,
    Linkedin,
    External,
    Mail,
    Phone,
    Pin,
    Star,
    Fork,
    Calendar,
    ArrowUp,
    Sun,
    Moon,
    Menu,
    Close,
    Trophy,
    Code,
    Book,
    Award,
    Bulb,
    Target,
    Heart,
    Send,
}

impl Glyph {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Github => "\u{2325}",
            Self::Linkedin => "in",
            Self::External => "\u{2197}",
            Self::Mail => "\u{2709}",
            Self::Phone => "\u{260e}",
            Self::Pin => "\u{2316}",
            Self::Star => "\u{2605}",
            Self::Fork => "\u{2442}",
            Self::Calendar => "\u{1f4c5}",
            Self::ArrowUp => "\u{2191}",
            Self::Sun => "\u{2600}",
            Self::Moon => "\u{263e}",
            Self::Menu => "\u{2630}",
            Self::Close => "\u{2715}",
            Self::Trophy => "\u{1f3c6}",
            Self::Code => "</>",
            Self::Book => "\u{1f4d6}",
            Self::Award => "\u{1f3c5}",
            Self::Bulb => "\u{1f4a1}",
            Self::Target => "\u{25ce}",
            Self::Heart => "\u{2665}",
            Self::Send => "\u{27a4}",
        }
    }

    #[must_use]
    pub const fn social(kind: SocialKind) -> Self {
        match kind {
            SocialKind::Github => Self::Github,
            SocialKind::Linkedin => Self::Linkedin,
            SocialKind::Website => Self::External,
        }
    }

    #[must_use]
    pub const fn channel(kind: ChannelKind) -> Self {
        match kind {
            ChannelKind::Email => Self::Mail,
            ChannelKind::Phone => Self::Phone,
            ChannelKind::Location => Self::Pin,
        }
    }
}

#[component]
pub fn Icon(glyph: Glyph) -> Element {
    rsx! {
        span { class: "glyph", aria_hidden: "true", {glyph.symbol()} }
    }
}
