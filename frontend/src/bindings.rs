//! Entry points exported to the page's scripts.
//!
//! `show_modal`/`hide_modal` keep the call shape the templates' click
//! handlers already use. `ModalHandle` lets a script hand over the elements
//! itself instead of relying on the fixed overlay id.

use crate::dom::DomModalView;
use modal_shared::{ModalConfig, ModalController, ModalError};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

fn to_js(err: ModalError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn document() -> Result<Document, ModalError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ModalError::NotFound("document".to_string()))
}

fn page_controller(config: &ModalConfig) -> Result<ModalController<DomModalView>, ModalError> {
    let view = DomModalView::locate(&document()?, config)?;
    Ok(ModalController::new(view, config))
}

/// Shows `#overlay` and sets its form's action.
#[wasm_bindgen]
pub fn show_modal(action: &str) -> Result<(), JsValue> {
    let config = ModalConfig::default();
    let mut controller = page_controller(&config).map_err(to_js)?;
    controller.show(action).map_err(to_js)
}

/// Hides `#overlay` and removes its form's action.
#[wasm_bindgen]
pub fn hide_modal() -> Result<(), JsValue> {
    let config = ModalConfig::default();
    let mut controller = page_controller(&config).map_err(to_js)?;
    controller.hide().map_err(to_js)
}

#[wasm_bindgen]
pub struct ModalHandle {
    controller: ModalController<DomModalView>,
}

#[wasm_bindgen]
impl ModalHandle {
    /// Binds to `#overlay` using the default config.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ModalHandle, JsValue> {
        let controller = page_controller(&ModalConfig::default()).map_err(to_js)?;
        Ok(ModalHandle { controller })
    }

    /// Binds using a JSON config such as `{"overlayId": "delete-modal"}`.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<ModalHandle, JsValue> {
        let config = ModalConfig::from_json(json).map_err(to_js)?;
        let controller = page_controller(&config).map_err(to_js)?;
        Ok(ModalHandle { controller })
    }

    #[wasm_bindgen(js_name = fromElements)]
    pub fn from_elements(
        overlay: Element,
        form: Element,
        hidden_class: Option<String>,
    ) -> Result<ModalHandle, JsValue> {
        let mut config = ModalConfig::default();
        if let Some(hidden_class) = hidden_class {
            config = config.with_hidden_class(hidden_class).validated().map_err(to_js)?;
        }
        let view = DomModalView::from_elements(overlay, form);
        Ok(ModalHandle {
            controller: ModalController::new(view, &config),
        })
    }

    pub fn show(&mut self, action: &str) -> Result<(), JsValue> {
        self.controller.show(action).map_err(to_js)
    }

    pub fn hide(&mut self) -> Result<(), JsValue> {
        self.controller.hide().map_err(to_js)
    }

    #[wasm_bindgen(js_name = isVisible)]
    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    pub fn action(&self) -> Option<String> {
        self.controller.action()
    }

    /// `"hidden"` or `"visible"`.
    pub fn state(&self) -> String {
        self.controller.state().to_string()
    }
}
