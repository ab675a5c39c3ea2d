// Bundle entry. The wasm start hook boots the page; a host run has nothing to do.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    peaceconnect_web::start();
}
