use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub(crate) enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("{0} is missing")]
    Missing(&'static str),
    #[error("{0}: unexpected element type")]
    Cast(&'static str),
    #[error("{context} threw: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
    #[error(transparent)]
    Core(#[from] peaceconnect::Error),
}

impl WebError {
    /// Adapter for `map_err` on web-sys calls.
    pub(crate) fn js(context: &'static str) -> impl FnOnce(JsValue) -> WebError {
        move |value| WebError::Js {
            context,
            message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
        }
    }
}
