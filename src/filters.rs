use crate::grid::ProjectGrid;

/// Live search/tech filtering over the rendered cards.
///
/// Owns the current query, selected tag, and derived tag option set;
/// handlers receive the grid by reference and toggle visibility in place.
#[derive(Debug)]
pub struct FilterController {
    /// Whether the page exposes the search input and tech select at all.
    enabled: bool,
    /// Set once by `setup`; change notifications are ignored until then.
    bound: bool,
    pub query: String,
    /// Empty string means "All technologies".
    pub selected_tech: String,
    /// Distinct tags across all cards, sorted. The universal "all" option is
    /// the empty value and is always present in the rendered select.
    pub options: Vec<String>,
    pub results_count: String,
}

impl FilterController {
    pub fn new(enabled: bool) -> Self {
        FilterController {
            enabled,
            bound: false,
            query: String::new(),
            selected_tech: String::new(),
            options: Vec::new(),
            results_count: String::new(),
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Wire up filtering after the first successful render. A no-op when the
    /// filter controls are not part of the page; idempotent otherwise.
    pub fn setup(&mut self, grid: &mut ProjectGrid) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        self.bound = true;
        self.collect_techs(grid);
        self.apply_filter(grid);
        Ok(())
    }

    /// Re-sync after the grid's content changed (any re-render, including
    /// the empty/error notices). Does nothing before `setup` has bound.
    pub fn on_grid_changed(&mut self, grid: &mut ProjectGrid) {
        if !self.bound {
            return;
        }
        self.collect_techs(grid);
        self.apply_filter(grid);
    }

    pub fn set_query(&mut self, grid: &mut ProjectGrid, query: &str) {
        self.query = query.to_string();
        if self.bound {
            self.apply_filter(grid);
        }
    }

    pub fn select_tech(&mut self, grid: &mut ProjectGrid, tech: &str) {
        self.selected_tech = tech.to_string();
        if self.bound {
            self.apply_filter(grid);
        }
    }

    /// Rebuild the tech option set from the cards currently in the grid.
    /// The previous selection is preserved if still present, otherwise it
    /// reverts to "all".
    pub fn collect_techs(&mut self, grid: &ProjectGrid) {
        self.options = grid.tech_tags();
        if !self.selected_tech.is_empty() && !self.options.contains(&self.selected_tech) {
            self.selected_tech.clear();
        }
    }

    /// Recompute every card's visibility and the results-count line.
    /// A card is visible iff the query matches its title or full text
    /// (case-insensitive substring) and its tag set contains the selected
    /// tech exactly.
    pub fn apply_filter(&mut self, grid: &mut ProjectGrid) {
        let q = self.query.trim().to_lowercase();
        let tech = self.selected_tech.as_str();

        for card in grid.cards_mut() {
            let matches_q = q.is_empty()
                || card.project.title.to_lowercase().contains(&q)
                || card.full_text().contains(&q);
            let matches_tech = tech.is_empty() || card.project.tech.iter().any(|t| t.trim() == tech);
            card.visible = matches_q && matches_tech;
        }

        let total = grid.total();
        let visible = grid.visible_count();
        self.results_count = format!(
            "{} of {} project{} shown",
            visible,
            total,
            if total == 1 { "" } else { "s" }
        );
    }
}
