mod app;
mod components;
mod pages;

use cfg_if::cfg_if;
use wasm_bindgen::prelude::*;

use crate::app::App;

cfg_if! {
    if #[cfg(feature = "develop")] {
        fn init_log() {
            wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
            console_error_panic_hook::set_once();
        }
    } else {
        fn init_log() {}
    }
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    init_log();
    log::info!("Starting auth UI");

    let app = App::new();
    dominator::append_dom(&dominator::body(), App::render(app));

    Ok(())
}
