use std::sync::RwLock;

use crate::filters::FilterController;
use crate::grid::ProjectGrid;
use crate::loader::ProjectLoader;
use crate::settings::Settings;
use crate::source::{FileSource, HttpSource, ProjectSource};

/// The live portfolio page model: the projects grid (absent when the section
/// is disabled) and its filter controller.
pub struct Portfolio {
    pub grid: Option<ProjectGrid>,
    pub filters: FilterController,
}

impl Portfolio {
    pub fn new(settings: &Settings) -> Self {
        Portfolio {
            grid: settings.projects_enabled.then(ProjectGrid::new),
            filters: FilterController::new(settings.filters_enabled),
        }
    }

    pub fn set_query(&mut self, query: &str) {
        if let Some(grid) = self.grid.as_mut() {
            self.filters.set_query(grid, query);
        }
    }

    pub fn select_tech(&mut self, tech: &str) {
        if let Some(grid) = self.grid.as_mut() {
            self.filters.select_tech(grid, tech);
        }
    }
}

/// Rocket-managed state. All mutation goes through the single lock; request
/// handlers run to completion while holding it, so no finer coordination is
/// needed.
pub struct SiteState {
    pub portfolio: RwLock<Portfolio>,
    pub loader: ProjectLoader,
}

impl SiteState {
    pub fn new(settings: &Settings) -> Self {
        let source: Box<dyn ProjectSource> = if settings.projects_url.is_empty() {
            Box::new(FileSource::new(&settings.projects_file))
        } else {
            Box::new(HttpSource::new(&settings.projects_url))
        };
        SiteState {
            portfolio: RwLock::new(Portfolio::new(settings)),
            loader: ProjectLoader::new(source, &settings.placeholder_image),
        }
    }

    /// Run the loader against the live state (startup, and explicit reloads).
    pub fn load_projects(&self) {
        let mut portfolio = match self.portfolio.write() {
            Ok(p) => p,
            Err(poisoned) => poisoned.into_inner(),
        };
        self.loader.load(&mut portfolio);
    }
}
