pub mod confirm_modal;
