use serde::Serialize;

/// Visible state of the contact form.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    /// Reachable only through a real submitter; the simulated one always succeeds.
    Error,
}

impl SubmitStatus {
    #[must_use]
    pub const fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Banner shown under the form, if any.
    #[must_use]
    pub const fn banner(self) -> Option<&'static str> {
        match self {
            Self::Success => Some("Message sent successfully! I'll get back to you soon."),
            Self::Error => {
                Some("Failed to send message. Please try again or contact me directly.")
            }
            Self::Idle | Self::Submitting => None,
        }
    }
}
