use log::debug;
use modal_shared::{ModalConfig, ModalError, ModalView, Result};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

const ACTION_ATTR: &str = "action";

fn dom_error(err: JsValue) -> ModalError {
    ModalError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Overlay and form elements of a modal already present in the page.
#[derive(Debug, Clone)]
pub struct DomModalView {
    overlay: Element,
    form: Element,
}

impl DomModalView {
    pub fn from_elements(overlay: Element, form: Element) -> Self {
        Self { overlay, form }
    }

    /// Looks up the overlay by id and the form inside it.
    pub fn locate(document: &Document, config: &ModalConfig) -> Result<Self> {
        let overlay = document
            .get_element_by_id(&config.overlay_id)
            .ok_or_else(|| ModalError::NotFound(format!("#{}", config.overlay_id)))?;
        Self::locate_in(overlay, config)
    }

    /// Looks up the form inside an overlay the caller already holds.
    pub fn locate_in(overlay: Element, config: &ModalConfig) -> Result<Self> {
        let form = overlay
            .query_selector(&config.form_selector)
            .map_err(dom_error)?
            .ok_or_else(|| {
                ModalError::NotFound(format!("{} in overlay '{}'", config.form_selector, overlay.id()))
            })?;
        debug!("Located modal overlay '{}'", overlay.id());
        Ok(Self { overlay, form })
    }

    pub fn overlay(&self) -> &Element {
        &self.overlay
    }

    pub fn form(&self) -> &Element {
        &self.form
    }
}

impl ModalView for DomModalView {
    fn has_class(&self, class: &str) -> bool {
        self.overlay.class_list().contains(class)
    }

    fn add_class(&mut self, class: &str) -> Result<()> {
        self.overlay.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&mut self, class: &str) -> Result<()> {
        self.overlay.class_list().remove_1(class).map_err(dom_error)
    }

    fn action(&self) -> Option<String> {
        self.form.get_attribute(ACTION_ATTR)
    }

    fn set_action(&mut self, action: &str) -> Result<()> {
        self.form.set_attribute(ACTION_ATTR, action).map_err(dom_error)
    }

    fn remove_action(&mut self) -> Result<()> {
        self.form.remove_attribute(ACTION_ATTR).map_err(dom_error)
    }
}
