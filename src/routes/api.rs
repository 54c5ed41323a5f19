use rocket::form::Form;
use rocket::serde::json::Json;
use rocket::State;

use crate::config::SiteConfig;
use crate::contact::{self, ContactForm, ContactReply};

// ── Contact submission ─────────────────────────────────

#[post("/contact", data = "<form>")]
pub fn contact_submit(config: &State<SiteConfig>, form: Form<ContactForm>) -> Json<ContactReply> {
    if contact::is_spam(&form) {
        log::info!("contact submission dropped by honeypot");
        return Json(contact::reply_for(Ok(true)));
    }

    Json(contact::reply_for(contact::deliver(&config.contact, &form)))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![contact_submit]
}
