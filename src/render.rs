use crate::settings::Settings;
use crate::site::Portfolio;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Shared page chrome: head, header with nav, opening main tag.
fn page_head(settings: &Settings, title: &str) -> String {
    let contact_link = if settings.contact_enabled {
        r#"<a class="nav-link" href="/contact">Contact</a>"#
    } else {
        ""
    };
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/css/site.css">
</head>
<body>
<header class="site-header">
<a class="site-name" href="/">{site_name}</a>
<nav class="nav">
<a class="nav-link" href="/">Projects</a>
{contact_link}
</nav>
</header>
<main>
"#,
        title = html_escape(title),
        site_name = html_escape(&settings.site_name),
        contact_link = contact_link,
    )
}

fn page_foot(settings: &Settings) -> String {
    format!(
        "</main>\n<footer class=\"site-footer\"><p>&copy; {}</p></footer>\n</body>\n</html>",
        html_escape(&settings.site_name)
    )
}

/// The search input and tech select, with the current state baked in so a
/// plain GET round-trip keeps the controls in sync.
fn build_filter_controls(portfolio: &Portfolio) -> String {
    let filters = &portfolio.filters;
    let mut options = String::from(r#"<option value="">All technologies</option>"#);
    for tag in &filters.options {
        let selected = if *tag == filters.selected_tech {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{tag}"{selected}>{tag}</option>"#,
            tag = html_escape(tag),
            selected = selected,
        ));
    }

    format!(
        r#"<form class="project-filters" method="get" action="/">
<input id="project-search" type="search" name="q" value="{query}" placeholder="Search projects&hellip;">
<select id="tech-filter" name="tech">{options}</select>
<button type="submit">Filter</button>
</form>
<p id="results-count">{count}</p>
"#,
        query = html_escape(&portfolio.filters.query),
        options = options,
        count = html_escape(&filters.results_count),
    )
}

/// Render the portfolio page: heading, filter controls, and the grid (or its
/// inline notice).
pub fn render_portfolio_page(settings: &Settings, portfolio: &Portfolio) -> String {
    let mut html = page_head(settings, &settings.site_name);

    html.push_str("<h1>Projects</h1>\n");
    if !settings.site_tagline.is_empty() {
        html.push_str(&format!(
            "<p class=\"tagline\">{}</p>\n",
            html_escape(&settings.site_tagline)
        ));
    }

    // Absent grid: the projects section is disabled for this site.
    if let Some(grid) = &portfolio.grid {
        if portfolio.filters.is_bound() {
            html.push_str(&build_filter_controls(portfolio));
        }
        html.push_str(&format!(
            "<div id=\"projects-grid\">{}</div>\n",
            grid.render_html()
        ));
    }

    html.push_str(&page_foot(settings));
    html
}

/// Render the contact page: email line, relay form, optional flash banner.
pub fn render_contact_page(settings: &Settings, flash: Option<(&str, &str)>) -> String {
    let mut html = page_head(settings, &format!("Contact — {}", settings.site_name));

    html.push_str("<h1>Contact</h1>\n");

    if let Some((kind, msg)) = flash {
        let class = if kind == "success" {
            "flash flash-success"
        } else {
            "flash flash-error"
        };
        html.push_str(&format!(
            "<div class=\"{}\">{}</div>\n",
            class,
            html_escape(msg)
        ));
    }

    if !settings.contact_email.is_empty() {
        html.push_str(&format!(
            "<p>Email: <a href=\"mailto:{email}\">{email}</a></p>\n",
            email = html_escape(&settings.contact_email)
        ));
    }

    html.push_str(
        r#"<form method="post" action="/contact" class="contact-form">
<div class="contact-form-group"><label for="cf-name">Name</label><input type="text" id="cf-name" name="name" required placeholder="Your name"></div>
<div class="contact-form-group"><label for="cf-email">Email</label><input type="email" id="cf-email" name="email" required placeholder="your@email.com"></div>
<div class="contact-form-group"><label for="cf-message">Message</label><textarea id="cf-message" name="message" rows="6" required placeholder="Your message&hellip;"></textarea></div>
<div style="display:none"><input type="text" name="_honey" tabindex="-1" autocomplete="off"></div>
<button type="submit" class="contact-submit">Send Message</button>
</form>
"#,
    );

    html.push_str(&page_foot(settings));
    html
}
