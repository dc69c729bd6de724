use log::{error, warn};
use serde_json::Value;

use crate::grid::{Card, EMPTY_NOTICE, ERROR_NOTICE};
use crate::models::project::Project;
use crate::site::Portfolio;
use crate::source::ProjectSource;

/// Fetches the projects document and renders it into the grid.
///
/// Every failure terminates here: retrieval and parse problems become the
/// inline error notice plus a diagnostic log, an empty or non-array document
/// becomes the "no projects" notice, and a filter-setup problem is only
/// warned about. Nothing propagates to the caller.
pub struct ProjectLoader {
    source: Box<dyn ProjectSource>,
    placeholder_image: String,
}

impl ProjectLoader {
    pub fn new(source: Box<dyn ProjectSource>, placeholder_image: &str) -> Self {
        ProjectLoader {
            source,
            placeholder_image: placeholder_image.to_string(),
        }
    }

    pub fn load(&self, portfolio: &mut Portfolio) {
        let Portfolio { grid, filters } = portfolio;
        // No projects section on this site: nothing to do, not an error.
        let Some(grid) = grid.as_mut() else {
            return;
        };

        let body = match self.source.fetch() {
            Ok(body) => body,
            Err(e) => {
                error!("Could not load projects from {}: {}", self.source.describe(), e);
                grid.set_notice(ERROR_NOTICE);
                filters.on_grid_changed(grid);
                return;
            }
        };

        let document: Value = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(e) => {
                error!("Projects document is not valid JSON: {}", e);
                grid.set_notice(ERROR_NOTICE);
                filters.on_grid_changed(grid);
                return;
            }
        };

        let records = match document.as_array() {
            Some(records) if !records.is_empty() => records,
            _ => {
                grid.set_notice(EMPTY_NOTICE);
                filters.on_grid_changed(grid);
                return;
            }
        };

        let cards: Vec<Card> = records
            .iter()
            .map(|r| Card::new(Project::from_value(r, &self.placeholder_image)))
            .collect();
        grid.replace_cards(cards);

        if filters.is_bound() {
            filters.on_grid_changed(grid);
        } else if let Err(e) = filters.setup(grid) {
            // Filtering degrades silently; the cards are already rendered.
            warn!("Project filters unavailable: {}", e);
        }
    }
}
