pub use crate::domain::config::{SiteConfig, Theme};
pub use crate::domain::sections::{Section, SectionSet};
pub use crate::navigation::{Navigator, NavigationError};
pub use crate::time::sleep;
