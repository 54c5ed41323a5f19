#[macro_use]
extern crate rocket;

use std::path::Path;

use rocket::fs::FileServer;
use rocket::response::content::RawHtml;

mod boot;
mod config;
mod contact;
mod render;
mod routes;
mod store;
mod tests;
mod views;

use config::SiteConfig;
use store::ProjectStore;

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>&larr; Home</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>&larr; Home</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let site_config = SiteConfig::load_or_default(Path::new("website/site.toml"));
    boot::run(&site_config);

    let project_store =
        ProjectStore::load(Path::new("website/projects.toml")).expect("Failed to load project data");
    log::info!("serving {} projects", project_store.len());

    rocket::build()
        .manage(site_config)
        .manage(project_store)
        .mount("/assets", FileServer::from("website/assets"))
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .register("/", catchers![not_found, server_error])
}
