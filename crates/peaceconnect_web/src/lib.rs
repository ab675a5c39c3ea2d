//! Browser side of the PeaceConnect site.
//!
//! One wasm module serves both pages: [`start`] looks at `<body data-surface>`
//! (or for a `#sidebar`) and wires either the back-office dashboard or the public
//! front office. All rules live in the `peaceconnect` crate; this crate only binds
//! them to the DOM.
//!
//! Outside `wasm32` with the `web` feature the crate compiles to an empty shell,
//! so `cargo test --workspace` runs on any host.

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;

/// Host builds have no page to attach to.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn start() {}

#[cfg(test)]
mod tests {
    #[test]
    fn host_start_does_nothing() {
        super::start();
    }
}
