use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::settings::{Settings, SETTINGS_FILE};

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &[
    "data",
    "assets",
    "website",
    "website/static",
    "website/static/css",
];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about missing optional files, and
/// aborts only when the filesystem itself is unusable.
pub fn run(settings: &Settings) {
    info!("Folio boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Settings file ───────────────────────────────
    if !Path::new(SETTINGS_FILE).exists() {
        warn!("  {} not found — using default settings", SETTINGS_FILE);
        warnings += 1;
    }

    // ── 3. Projects document ───────────────────────────
    if settings.projects_enabled && settings.projects_url.is_empty() {
        if !Path::new(&settings.projects_file).exists() {
            warn!(
                "  Projects file missing: {} (the page will show an error notice)",
                settings.projects_file
            );
            warnings += 1;
        }
    }

    // ── 4. Placeholder asset ───────────────────────────
    if !Path::new(&settings.placeholder_image).exists() {
        warn!(
            "  Placeholder image missing: {} (cards without images will break)",
            settings.placeholder_image
        );
        warnings += 1;
    }

    // ── 5. Data directory writable ─────────────────────
    let data_dir = Path::new("data");
    if data_dir.exists() {
        let test_file = data_dir.join(".write_test");
        match fs::write(&test_file, "test") {
            Ok(_) => {
                let _ = fs::remove_file(&test_file);
            }
            Err(e) => {
                error!("  Data directory not writable: {}", e);
                errors += 1;
            }
        }
    }

    // ── 6. Rocket.toml exists ───────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found — using default config");
        warnings += 1;
    }

    // ── Summary ─────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}
