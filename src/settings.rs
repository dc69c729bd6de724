use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;

/// Default settings file, read once at startup.
pub const SETTINGS_FILE: &str = "Folio.toml";

/// Site-wide configuration. Every key is optional in the TOML file; missing
/// keys take the defaults below so a bare install works out of the box.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub site_name: String,
    pub site_tagline: String,

    /// When false, the page has no projects section and the loader is a no-op.
    pub projects_enabled: bool,
    /// When false, the page has no search/tech-filter controls.
    pub filters_enabled: bool,
    /// Relative path of the projects JSON document.
    pub projects_file: String,
    /// When non-empty, the loader fetches this URL instead of reading
    /// `projects_file` from disk.
    pub projects_url: String,
    /// Image used for records without one.
    pub placeholder_image: String,

    pub contact_enabled: bool,
    /// Shown on the contact page.
    pub contact_email: String,
    /// Form relay endpoint (Formspree-style). Empty, "#", or a mailto: URL
    /// means no relay is configured.
    pub contact_endpoint: String,

    pub static_dir: String,
    pub assets_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            site_name: "Folio".to_string(),
            site_tagline: String::new(),
            projects_enabled: true,
            filters_enabled: true,
            projects_file: "data/projects.json".to_string(),
            projects_url: String::new(),
            placeholder_image: "assets/project-sample.svg".to_string(),
            contact_enabled: true,
            contact_email: String::new(),
            contact_endpoint: String::new(),
            static_dir: "website/static".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file, falling back to defaults when the
    /// file is missing or malformed. A bad settings file never aborts boot.
    pub fn load(path: &str) -> Self {
        if !Path::new(path).exists() {
            return Settings::default();
        }
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Invalid {}: {} — using defaults", path, e);
                    Settings::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {} — using defaults", path, e);
                Settings::default()
            }
        }
    }
}
