use rocket::form::Form;
use rocket::request::FlashMessage;
use rocket::response::content::RawHtml;
use rocket::response::{Flash, Redirect};
use rocket::State;

use crate::contact::{self, ContactOutcome};
use crate::render;
use crate::settings::Settings;
use crate::site::SiteState;

// ── Portfolio page ─────────────────────────────────────

#[get("/?<q>&<tech>")]
pub fn portfolio_page(
    state: &State<SiteState>,
    settings: &State<Settings>,
    q: Option<String>,
    tech: Option<String>,
) -> RawHtml<String> {
    let mut portfolio = match state.portfolio.write() {
        Ok(p) => p,
        Err(poisoned) => poisoned.into_inner(),
    };

    // The query params are the search-input and tech-select events; each
    // re-applies the filter over the live grid.
    portfolio.set_query(q.as_deref().unwrap_or(""));
    portfolio.select_tech(tech.as_deref().unwrap_or(""));

    RawHtml(render::render_portfolio_page(settings, &portfolio))
}

// ── Contact ────────────────────────────────────────────

#[derive(FromForm)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    #[field(name = "_honey")]
    pub honey: Option<String>,
}

#[get("/contact")]
pub fn contact_page(
    settings: &State<Settings>,
    flash: Option<FlashMessage<'_>>,
) -> Option<RawHtml<String>> {
    if !settings.contact_enabled {
        return None;
    }
    let flash_pair = flash.as_ref().map(|f| (f.kind(), f.message()));
    Some(RawHtml(render::render_contact_page(settings, flash_pair)))
}

#[post("/contact", data = "<form>")]
pub fn contact_submit(
    settings: &State<Settings>,
    form: Form<ContactForm>,
) -> Result<Flash<Redirect>, Flash<Redirect>> {
    if !settings.contact_enabled {
        return Err(Flash::error(Redirect::to("/"), "Contact form is disabled."));
    }

    match contact::submit(
        settings,
        &form.name,
        &form.email,
        &form.message,
        form.honey.as_deref().unwrap_or(""),
    ) {
        ContactOutcome::Sent => Ok(Flash::success(
            Redirect::to("/contact"),
            "Thanks — your message was sent. I will reply to the email you provided.",
        )),
        ContactOutcome::Disabled => Err(Flash::error(
            Redirect::to("/contact"),
            "No contact endpoint is configured. Please use the email address instead.",
        )),
        ContactOutcome::Failed(msg) => Err(Flash::error(Redirect::to("/contact"), msg)),
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![portfolio_page, contact_page, contact_submit]
}
