mod in_view;
mod reveal;

pub use in_view::{InView, use_in_view};
pub use reveal::{Reveal, use_reveal};
