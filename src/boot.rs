//! Boot check: verify/create the website directories and sanity-check the
//! configuration before Rocket launches. Warnings only; boot aborts solely
//! on invalid project data (checked by the store).

use std::fs;
use std::path::Path;

use crate::config::SiteConfig;

pub fn run(config: &SiteConfig) {
    for dir in ["website", "website/assets"] {
        if !Path::new(dir).is_dir() {
            match fs::create_dir_all(dir) {
                Ok(()) => log::info!("created directory {}", dir),
                Err(e) => log::warn!("could not create directory {}: {}", dir, e),
            }
        }
    }

    if config.contact.endpoint.is_empty() {
        log::warn!("contact endpoint not configured; submissions will fail");
    } else if let Err(e) = url::Url::parse(&config.contact.endpoint) {
        log::warn!(
            "contact endpoint {:?} is not a valid URL: {}",
            config.contact.endpoint,
            e
        );
    }
}
