//! Site configuration, read once at boot from website/site.toml.
//! Every section falls back to usable defaults so a fresh checkout
//! serves the starter site without any authoring.

use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub hero: HeroSection,
    pub about: AboutSection,
    pub contact: ContactConfig,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub name: String,
    pub owner: String,
    pub tagline: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeroSection {
    pub heading: String,
    pub subheading: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    pub heading: String,
    pub bio: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Third-party form endpoint. Must accept a form-encoded POST and
    /// answer with a JSON body carrying a boolean `success` field.
    pub endpoint: String,
    pub access_key: String,
    pub email: String,
    pub location: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        SiteSection {
            name: "Portfolio".to_string(),
            owner: "Your Name".to_string(),
            tagline: "Visual Designer".to_string(),
            description: "Selected design work: interfaces, identities, and illustration."
                .to_string(),
            url: String::new(),
        }
    }
}

impl Default for HeroSection {
    fn default() -> Self {
        HeroSection {
            heading: "Design that earns attention".to_string(),
            subheading: "I design interfaces, identities, and illustration for teams that \
                         care about craft."
                .to_string(),
        }
    }
}

impl Default for AboutSection {
    fn default() -> Self {
        AboutSection {
            heading: "About Me".to_string(),
            bio: "Designer working across product and brand. I like small teams, sharp \
                  constraints, and shipping."
                .to_string(),
            stats: vec![
                Stat {
                    label: "Projects Completed".to_string(),
                    value: 50,
                },
                Stat {
                    label: "Happy Clients".to_string(),
                    value: 30,
                },
                Stat {
                    label: "Years Experience".to_string(),
                    value: 5,
                },
            ],
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        ContactConfig {
            endpoint: "https://api.web3forms.com/submit".to_string(),
            access_key: String::new(),
            email: String::new(),
            location: String::new(),
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        toml::from_str(&raw).map_err(|e| format!("failed to parse {}: {}", path.display(), e))
    }

    /// Missing or broken config never stops the site from serving;
    /// it only costs the customizations.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("no site config at {}; using defaults", path.display());
            return SiteConfig::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using defaults", e);
                SiteConfig::default()
            }
        }
    }
}
