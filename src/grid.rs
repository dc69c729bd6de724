use serde::Serialize;

use crate::models::project::Project;
use crate::render::html_escape;

/// Inline notice when the source resolves to an empty (or non-array) document.
pub const EMPTY_NOTICE: &str =
    "No projects found. Add entries to <code>data/projects.json</code> and add images to <code>assets/</code>.";

/// Inline notice when retrieval or parsing fails.
pub const ERROR_NOTICE: &str =
    "Error loading projects. Check <code>data/projects.json</code> exists and is valid JSON.";

/// One rendered project card. Filtering only toggles `visible`; cards are
/// never removed except by a full re-render.
#[derive(Debug, Serialize, Clone)]
pub struct Card {
    #[serde(flatten)]
    pub project: Project,
    pub visible: bool,
}

impl Card {
    pub fn new(project: Project) -> Self {
        Card {
            project,
            visible: true,
        }
    }

    /// Lower-cased searchable text: title, description, and tags — the
    /// card's full visible content, so search matches any of it.
    pub fn full_text(&self) -> String {
        let mut text = self.project.title.clone();
        if !self.project.description.is_empty() {
            text.push(' ');
            text.push_str(&self.project.description);
        }
        for tag in &self.project.tech {
            text.push(' ');
            text.push_str(tag);
        }
        text.to_lowercase()
    }

    pub fn render(&self) -> String {
        let p = &self.project;
        let style = if self.visible {
            ""
        } else {
            r#" style="display:none""#
        };

        let img = format!(
            r#"<img class="project-image" src="{}" alt="{}" loading="lazy">"#,
            html_escape(&p.image),
            html_escape(&p.alt)
        );
        let (image_html, title_html) = match &p.url {
            Some(url) => (
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    html_escape(url),
                    img
                ),
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
                    html_escape(url),
                    html_escape(&p.title)
                ),
            ),
            None => (img, html_escape(&p.title)),
        };

        let mut html = format!(
            r#"<article class="project-card"{style}>{image}<div class="project-body"><h3>{title}</h3>"#,
            style = style,
            image = image_html,
            title = title_html,
        );

        if !p.description.is_empty() {
            html.push_str(&format!("<p>{}</p>", html_escape(&p.description)));
        }

        if !p.tech.is_empty() {
            html.push_str(r#"<div class="tech-list">"#);
            for tag in &p.tech {
                html.push_str(&format!(
                    r#"<span class="tech-tag">{}</span>"#,
                    html_escape(tag)
                ));
            }
            html.push_str("</div>");
        }

        html.push_str("</div></article>");
        html
    }
}

/// The projects container: an ordered card list, or a static notice for the
/// empty/error states. Replacing content always discards everything that was
/// there before.
#[derive(Debug, Default)]
pub struct ProjectGrid {
    cards: Vec<Card>,
    notice: Option<&'static str>,
}

impl ProjectGrid {
    pub fn new() -> Self {
        ProjectGrid::default()
    }

    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.notice = None;
    }

    pub fn set_notice(&mut self, notice: &'static str) {
        self.cards.clear();
        self.notice = Some(notice);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| c.visible).count()
    }

    /// Distinct trimmed tags across all cards, sorted lexicographically.
    pub fn tech_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = self
            .cards
            .iter()
            .flat_map(|c| c.project.tech.iter())
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        tags.sort();
        tags.dedup();
        tags
    }

    pub fn render_html(&self) -> String {
        if let Some(notice) = self.notice {
            return format!("<p>{}</p>", notice);
        }
        self.cards.iter().map(|c| c.render()).collect()
    }
}
