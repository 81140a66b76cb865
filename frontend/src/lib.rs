use log::info;
use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod components;
pub mod dom;

pub use bindings::{hide_modal, show_modal, ModalHandle};
pub use components::confirm_modal::{TaskConfirmModal, TaskConfirmModalProps};
pub use dom::DomModalView;

// Runs once when the module is instantiated by the page
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Modal bindings ready");
    Ok(())
}
