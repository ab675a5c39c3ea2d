//! Server calls that do not exist yet.
//!
//! Every code path that would reach a backend goes through [`Backend`]. The only
//! implementation shipped is [`InertBackend`], which logs and returns nothing.

use serde_json::Value;

pub trait Backend {
    /// Fetch a JSON document from `endpoint`.
    fn load(&self, endpoint: &str) -> Option<Value>;

    /// Post `payload` to `endpoint`. Returns whether the server accepted it.
    fn send(&self, endpoint: &str, payload: &Value) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InertBackend;

impl Backend for InertBackend {
    fn load(&self, endpoint: &str) -> Option<Value> {
        log::debug!("backend disabled: load {endpoint}");
        None
    }

    fn send(&self, endpoint: &str, payload: &Value) -> bool {
        log::debug!("backend disabled: send {endpoint} {payload}");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inert_backend_never_answers() {
        let b = InertBackend;
        assert!(b.load("kpis").is_none());
        assert!(!b.send("project/delete", &serde_json::json!({ "id": 1 })));
    }
}
