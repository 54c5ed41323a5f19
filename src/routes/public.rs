use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::State;

use crate::config::SiteConfig;
use crate::store::ProjectStore;
use crate::views::{detail, listing};

// ── Listing ────────────────────────────────────────────

#[get("/")]
pub fn home(config: &State<SiteConfig>, store: &State<ProjectStore>) -> RawHtml<String> {
    RawHtml(listing::render_page(config, store))
}

// ── Project detail ─────────────────────────────────────

/// A missing, non-numeric, or unmatched id redirects to the portfolio
/// anchor on the listing page; nothing partial is ever rendered.
#[get("/project?<id>")]
pub fn project_detail(
    config: &State<SiteConfig>,
    store: &State<ProjectStore>,
    id: Option<&str>,
) -> Result<RawHtml<String>, Redirect> {
    let project = match id.and_then(|raw| store.find_by_raw_id(raw)) {
        Some(project) => project,
        None => return Err(Redirect::to("/#portfolio")),
    };

    let related = store.related_projects(project, &mut rand::thread_rng());
    Ok(RawHtml(detail::render_page(config, project, &related)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![home, project_detail]
}
