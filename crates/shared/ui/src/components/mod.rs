mod glyph;
mod heading;
mod navbar;
mod stats;

pub use glyph::{Glyph, Icon};
pub use heading::SectionHeading;
pub use navbar::Navbar;
pub use stats::StatGrid;
