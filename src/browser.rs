//! Browser side of the pool form: server function call, clipboard and alerts.
//!
//! Only the `web` build runs event handlers; the `server` build renders the
//! page and never submits, so its fallbacks just refuse and log.

use dioxus::logger::tracing::info;

use crate::api::create_pool;
use crate::shared::pool_form::{Clipboard, Notifier, PoolCreator, SubmitError};

pub struct ServerPoolCreator;

impl PoolCreator for ServerPoolCreator {
    async fn create_pool(&self, title: String) -> Result<String, SubmitError> {
        create_pool(title)
            .await
            .map(|created| created.code)
            .map_err(|e| SubmitError::CreatePool(e.to_string()))
    }
}

pub struct SystemClipboard;

pub struct AlertNotifier;

#[cfg(feature = "web")]
fn js_error(value: wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(feature = "web")]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), SubmitError> {
        let window =
            web_sys::window().ok_or_else(|| SubmitError::Clipboard("no window".into()))?;
        let promise: js_sys::Promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| SubmitError::Clipboard(js_error(e)))
    }
}

#[cfg(not(feature = "web"))]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), SubmitError> {
        Err(SubmitError::Clipboard(
            "clipboard is only available in the browser".into(),
        ))
    }
}

#[cfg(feature = "web")]
impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        info!("[alert] {message}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

#[cfg(not(feature = "web"))]
impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        info!("[alert] {message}");
    }
}
