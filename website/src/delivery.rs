//! Contact form delivery to an external form backend
//!
//! Delivery is fire-and-forget: the form has already moved to its submitted
//! state, so failures are only logged.

use mrfast_core::prelude::*;
use mrfast_core::ContactSubmission;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub fn deliver(endpoint: String, submission: ContactSubmission) {
    leptos::task::spawn_local(async move {
        match post_json(&endpoint, &submission).await {
            Ok(status) => info!("Contact form delivered to {} (HTTP {})", endpoint, status),
            Err(e) => error!("Contact form delivery to {} failed: {}", endpoint, e),
        }
    });
}

async fn post_json(endpoint: &str, submission: &ContactSubmission) -> Result<u16> {
    let body = submission.to_json()?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(endpoint, &opts).map_err(js_error)?;
    let headers = request.headers();
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    headers.set("Accept", "application/json").map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::delivery("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if !response.ok() {
        return Err(Error::delivery(format!(
            "endpoint answered HTTP {} {}",
            response.status(),
            response.status_text()
        )));
    }
    Ok(response.status())
}

fn js_error(value: JsValue) -> Error {
    Error::delivery(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}
