use rocket::serde::json::Json;
use rocket::State;
use serde_json::{json, Value};

use crate::site::SiteState;

fn summary(state: &SiteState) -> Value {
    let portfolio = match state.portfolio.read() {
        Ok(p) => p,
        Err(poisoned) => poisoned.into_inner(),
    };
    match &portfolio.grid {
        Some(grid) => json!({
            "total": grid.total(),
            "visible": grid.visible_count(),
            "results_count": portfolio.filters.results_count,
            "projects": grid.cards(),
        }),
        None => json!({
            "total": 0,
            "visible": 0,
            "results_count": "",
            "projects": [],
        }),
    }
}

// ── Project listing ────────────────────────────────────

#[get("/projects")]
pub fn projects(state: &State<SiteState>) -> Json<Value> {
    Json(summary(state))
}

// ── Reload from the source ─────────────────────────────

#[post("/projects/reload")]
pub fn projects_reload(state: &State<SiteState>) -> Json<Value> {
    state.load_projects();
    Json(summary(state))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![projects, projects_reload]
}
