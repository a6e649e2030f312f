use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use folio::domain::config::SiteConfig;
use folio::ui::App;
use tracing::{info, warn};

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        warn!("Browser logger already set: {err}");
    }

    // No filesystem in the browser; the defaults describe the published site.
    let site = SiteConfig::default();
    info!(sections = site.sections.sections().count(), "Launching web portfolio");

    LaunchBuilder::web().with_context(site).launch(App);
}
