#[macro_use]
extern crate rocket;

use rocket::fs::FileServer;
use rocket::response::content::RawHtml;

mod boot;
mod contact;
mod filters;
mod grid;
mod loader;
mod models;
mod render;
mod routes;
mod settings;
mod site;
mod source;

use settings::{Settings, SETTINGS_FILE};
use site::SiteState;

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let settings = Settings::load(SETTINGS_FILE);

    // Boot check — verify/create directories, warn about missing files
    boot::run(&settings);

    // Page-ready: one load per lifetime, before the first request. Reloads
    // only happen on explicit request via the API.
    let state = SiteState::new(&settings);
    state.load_projects();

    rocket::build()
        .manage(state)
        .manage(settings.clone())
        .mount("/static", FileServer::from(settings.static_dir.as_str()))
        .mount("/assets", FileServer::from(settings.assets_dir.as_str()))
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", catchers![not_found, server_error])
}
