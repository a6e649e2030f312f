// Section anchors (DOM ids)
pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const EDUCATION: &str = "education";
pub const SKILLS: &str = "skills";
pub const PROJECTS: &str = "projects";
pub const GITHUB: &str = "github";
pub const ACHIEVEMENTS: &str = "achievements";
pub const CONTACT: &str = "contact";
pub const FOOTER: &str = "footer";

// Repository listing
pub const GITHUB_ACCOUNT: &str = "ashishraj875718-jpg";
pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_PROFILE_URL: &str = "https://github.com/ashishraj875718-jpg";
pub const REPOSITORY_PAGE_SIZE: u8 = 6;

// Contact form timing, in milliseconds
pub const CONTACT_SUBMIT_DELAY_MS: u64 = 1_000;
pub const CONTACT_STATUS_DISPLAY_MS: u64 = 3_000;
