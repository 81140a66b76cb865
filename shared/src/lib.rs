pub mod action;
pub mod config;
pub mod error;
pub mod modal;
pub mod view;

// Re-export commonly used items
pub use action::{validate_action, TaskAction};
pub use config::ModalConfig;
pub use error::{ModalError, Result};
pub use modal::{ModalController, ModalState};
pub use view::{MemoryView, ModalView};
