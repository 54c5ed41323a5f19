//! Contact form relay. The endpoint is an opaque collaborator: we POST the
//! fields form-encoded and trust nothing in the reply beyond its boolean
//! `success` flag.

use serde::Serialize;
use serde_json::Value;

use crate::config::ContactConfig;

pub const SENT_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const REJECTED_MESSAGE: &str = "Oops! Something went wrong. Please try again.";
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";

#[derive(Debug, FromForm)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden honeypot input; humans leave it empty.
    #[field(name = "_honey")]
    #[field(default = String::new())]
    pub honey: String,
}

#[derive(Debug, Serialize)]
pub struct ContactReply {
    pub ok: bool,
    pub message: String,
}

/// Bots fill every input. A non-empty honeypot is dropped without relaying
/// and reported as success so the sender learns nothing.
pub fn is_spam(form: &ContactForm) -> bool {
    !form.honey.is_empty()
}

/// Forward a submission to the configured endpoint.
///
/// `Ok(true)` is a confirmed delivery, `Ok(false)` an application-level
/// rejection, and `Err` a network-level failure (unreachable endpoint,
/// non-2xx status, or unparseable reply). Those are the three terminal
/// states the form UI distinguishes.
pub fn deliver(config: &ContactConfig, form: &ContactForm) -> Result<bool, String> {
    if config.endpoint.is_empty() {
        return Err("contact endpoint not configured".to_string());
    }

    let mut params = vec![
        ("name", form.name.as_str()),
        ("email", form.email.as_str()),
        ("message", form.message.as_str()),
    ];
    if !config.access_key.is_empty() {
        params.push(("access_key", config.access_key.as_str()));
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .map_err(|e| format!("HTTP client error: {}", e))?;

    let resp = client
        .post(&config.endpoint)
        .form(&params)
        .send()
        .map_err(|e| format!("contact relay request failed: {}", e))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().unwrap_or_default();
        return Err(format!("contact endpoint returned {}: {}", status, text));
    }

    let json: Value = resp
        .json()
        .map_err(|e| format!("contact endpoint JSON parse error: {}", e))?;

    Ok(json
        .get("success")
        .and_then(|v| v.as_bool())
        .unwrap_or(false))
}

/// Map a relay outcome onto the reply the page script consumes.
pub fn reply_for(outcome: Result<bool, String>) -> ContactReply {
    match outcome {
        Ok(true) => ContactReply {
            ok: true,
            message: SENT_MESSAGE.to_string(),
        },
        Ok(false) => ContactReply {
            ok: false,
            message: REJECTED_MESSAGE.to_string(),
        },
        Err(err) => {
            log::warn!("contact relay failed: {}", err);
            ContactReply {
                ok: false,
                message: NETWORK_MESSAGE.to_string(),
            }
        }
    }
}
