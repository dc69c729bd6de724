use log::error;
use url::Url;

use crate::settings::Settings;

/// Result of a contact-form submission, surfaced to the user as a flash
/// message. Failures never leave this module as errors.
#[derive(Debug, PartialEq)]
pub enum ContactOutcome {
    Sent,
    Failed(String),
    Disabled,
}

/// An endpoint is usable when it is set, is not the "#" placeholder, and is
/// not a mailto: link (mail-client fallbacks belong to the visitor's side,
/// not the relay).
pub fn endpoint_usable(endpoint: &str) -> bool {
    let endpoint = endpoint.trim();
    !endpoint.is_empty() && endpoint != "#" && !endpoint.starts_with("mailto:")
}

/// Relay a contact-form submission to the configured endpoint (Formspree and
/// most form services accept plain form posts). 2xx counts as success even
/// when the endpoint returns no body.
pub fn submit(
    settings: &Settings,
    name: &str,
    email: &str,
    message: &str,
    honeypot: &str,
) -> ContactOutcome {
    // Bots fill the hidden field; drop the submission but pretend it worked.
    if !honeypot.is_empty() {
        return ContactOutcome::Sent;
    }

    let endpoint = settings.contact_endpoint.trim();
    if !endpoint_usable(endpoint) {
        return ContactOutcome::Disabled;
    }

    let endpoint = match Url::parse(endpoint) {
        Ok(url) => url,
        Err(e) => {
            error!("Invalid contact endpoint {:?}: {}", endpoint, e);
            return ContactOutcome::Failed("Contact form is misconfigured.".to_string());
        }
    };

    let client = match reqwest::blocking::Client::builder().build() {
        Ok(c) => c,
        Err(e) => {
            error!("Could not build contact relay client: {}", e);
            return ContactOutcome::Failed("Could not send your message.".to_string());
        }
    };

    let res = client
        .post(endpoint)
        .header("Accept", "application/json")
        .form(&[("name", name), ("email", email), ("message", message)])
        .send();

    match res {
        Ok(res) if res.status().is_success() => ContactOutcome::Sent,
        Ok(res) => {
            let status = res.status();
            // Some endpoints return a JSON error body with more detail.
            let body = res.json::<serde_json::Value>().ok();
            error!("Contact relay failed: status {} body {:?}", status, body);
            ContactOutcome::Failed("There was a problem sending your message.".to_string())
        }
        Err(e) => {
            error!("Contact relay error: {}", e);
            ContactOutcome::Failed("Network error sending your message.".to_string())
        }
    }
}
