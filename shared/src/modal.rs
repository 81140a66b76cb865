//! Two-state visibility controller for the confirmation overlay.
//!
//! The overlay is visible exactly when it lacks the hidden class, and the
//! form inside it carries an `action` attribute exactly while visible.

use crate::action::validate_action;
use crate::config::ModalConfig;
use crate::error::Result;
use crate::view::ModalView;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalState {
    Hidden,
    Visible,
}

impl ModalState {
    pub fn is_visible(&self) -> bool {
        matches!(self, ModalState::Visible)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModalState::Hidden => "hidden",
            ModalState::Visible => "visible",
        }
    }
}

impl fmt::Display for ModalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shows and hides the overlay owned by `V`.
#[derive(Debug, Clone)]
pub struct ModalController<V: ModalView> {
    view: V,
    hidden_class: String,
}

impl<V: ModalView> ModalController<V> {
    pub fn new(view: V, config: &ModalConfig) -> Self {
        Self {
            view,
            hidden_class: config.hidden_class.clone(),
        }
    }

    /// Reveals the overlay and points its form at `action`.
    ///
    /// Calling it again while visible only replaces the action. On a view
    /// error the previous action is put back and the overlay is not revealed.
    pub fn show(&mut self, action: &str) -> Result<()> {
        if let Err(err) = validate_action(action) {
            warn!("Refusing to show modal: {}", err);
            return Err(err);
        }
        let previous = self.state();
        let previous_action = self.view.action();
        self.view.set_action(action)?;
        if let Err(err) = self.view.remove_class(&self.hidden_class) {
            warn!("Failed to reveal modal: {}", err);
            self.restore_action(previous_action);
            return Err(err);
        }
        debug!("Modal {} -> visible (action: {})", previous, action);
        Ok(())
    }

    /// Hides the overlay and drops the form's action attribute.
    ///
    /// If the action cannot be removed the overlay is revealed again when it
    /// was visible before, so the form is never hidden with a live action.
    pub fn hide(&mut self) -> Result<()> {
        let previous = self.state();
        self.view.add_class(&self.hidden_class)?;
        if let Err(err) = self.view.remove_action() {
            warn!("Failed to clear modal action: {}", err);
            if previous.is_visible() {
                if let Err(revert) = self.view.remove_class(&self.hidden_class) {
                    warn!("Failed to restore modal visibility: {}", revert);
                }
            }
            return Err(err);
        }
        debug!("Modal {} -> hidden", previous);
        Ok(())
    }

    fn restore_action(&mut self, action: Option<String>) {
        let restored = match action {
            Some(action) => self.view.set_action(&action),
            None => self.view.remove_action(),
        };
        if let Err(err) = restored {
            warn!("Failed to restore modal action: {}", err);
        }
    }

    pub fn state(&self) -> ModalState {
        if self.view.has_class(&self.hidden_class) {
            ModalState::Hidden
        } else {
            ModalState::Visible
        }
    }

    pub fn is_visible(&self) -> bool {
        self.state().is_visible()
    }

    pub fn action(&self) -> Option<String> {
        self.view.action()
    }

    /// True when the action attribute is present iff the overlay is visible.
    ///
    /// Markup that ships the overlay visible, or an action on a hidden
    /// form, breaks this until the next `show`/`hide`.
    pub fn is_consistent(&self) -> bool {
        self.action().is_some() == self.is_visible()
    }

    pub fn hidden_class(&self) -> &str {
        &self.hidden_class
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModalError;
    use crate::view::MemoryView;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn controller() -> ModalController<MemoryView> {
        let config = ModalConfig::default();
        ModalController::new(MemoryView::hidden(&config.hidden_class), &config)
    }

    #[rstest]
    fn test_initial_state_is_hidden(controller: ModalController<MemoryView>) {
        assert_eq!(controller.state(), ModalState::Hidden);
        assert_eq!(controller.action(), None);
        assert!(controller.is_consistent());
    }

    #[rstest]
    fn test_show_then_hide_scenario(mut controller: ModalController<MemoryView>) {
        controller.show("/todo/5/edit").unwrap();
        assert!(!controller.view().has_class("hidden"));
        assert_eq!(controller.action().as_deref(), Some("/todo/5/edit"));
        assert_eq!(controller.state(), ModalState::Visible);

        controller.hide().unwrap();
        assert!(controller.view().has_class("hidden"));
        assert_eq!(controller.action(), None);
        assert_eq!(controller.state(), ModalState::Hidden);
    }

    #[rstest]
    fn test_show_is_idempotent_and_last_write_wins(mut controller: ModalController<MemoryView>) {
        controller.show("/delete/1/").unwrap();
        controller.show("/delete/2/").unwrap();
        assert_eq!(controller.action().as_deref(), Some("/delete/2/"));
        assert!(controller.is_visible());
    }

    #[rstest]
    fn test_hide_twice(mut controller: ModalController<MemoryView>) {
        controller.hide().unwrap();
        controller.hide().unwrap();
        assert_eq!(controller.state(), ModalState::Hidden);
        assert_eq!(controller.view().classes(), &["hidden".to_string()]);
    }

    #[rstest]
    fn test_rejected_action_leaves_view_untouched(mut controller: ModalController<MemoryView>) {
        let before = controller.view().clone();
        assert_eq!(controller.show(""), Err(ModalError::EmptyAction));
        assert!(matches!(
            controller.show("javascript:alert(1)"),
            Err(ModalError::InvalidAction(_))
        ));
        assert_eq!(controller.view(), &before);
    }

    /// Wraps a `MemoryView` and fails the chosen operation.
    #[derive(Debug, Default)]
    struct FlakyView {
        inner: MemoryView,
        fail_set_action: bool,
        fail_remove_action: bool,
        fail_remove_class: bool,
    }

    impl FlakyView {
        fn hidden() -> Self {
            Self {
                inner: MemoryView::hidden("hidden"),
                ..Self::default()
            }
        }
    }

    fn refused(op: &str) -> ModalError {
        ModalError::Dom(format!("{} refused", op))
    }

    impl ModalView for FlakyView {
        fn has_class(&self, class: &str) -> bool {
            self.inner.has_class(class)
        }

        fn add_class(&mut self, class: &str) -> crate::error::Result<()> {
            self.inner.add_class(class)
        }

        fn remove_class(&mut self, class: &str) -> crate::error::Result<()> {
            if self.fail_remove_class {
                return Err(refused("remove_class"));
            }
            self.inner.remove_class(class)
        }

        fn action(&self) -> Option<String> {
            self.inner.action()
        }

        fn set_action(&mut self, action: &str) -> crate::error::Result<()> {
            if self.fail_set_action {
                return Err(refused("set_action"));
            }
            self.inner.set_action(action)
        }

        fn remove_action(&mut self) -> crate::error::Result<()> {
            if self.fail_remove_action {
                return Err(refused("remove_action"));
            }
            self.inner.remove_action()
        }
    }

    #[test]
    fn test_show_stays_hidden_when_action_cannot_be_set() {
        let view = FlakyView {
            fail_set_action: true,
            ..FlakyView::hidden()
        };
        let mut controller = ModalController::new(view, &ModalConfig::default());

        assert_eq!(controller.show("/delete/5/"), Err(refused("set_action")));
        assert_eq!(controller.state(), ModalState::Hidden);
        assert_eq!(controller.action(), None);
        assert!(controller.is_consistent());
    }

    #[test]
    fn test_show_restores_action_when_reveal_fails() {
        let view = FlakyView {
            fail_remove_class: true,
            ..FlakyView::hidden()
        };
        let mut controller = ModalController::new(view, &ModalConfig::default());

        assert_eq!(controller.show("/delete/5/"), Err(refused("remove_class")));
        assert_eq!(controller.state(), ModalState::Hidden);
        assert_eq!(controller.action(), None);
        assert!(controller.is_consistent());
    }

    #[test]
    fn test_hide_stays_visible_when_action_cannot_be_removed() {
        let mut controller = ModalController::new(FlakyView::hidden(), &ModalConfig::default());
        controller.show("/complete/2/").unwrap();
        controller.view.fail_remove_action = true;

        assert_eq!(controller.hide(), Err(refused("remove_action")));
        assert_eq!(controller.state(), ModalState::Visible);
        assert_eq!(controller.action().as_deref(), Some("/complete/2/"));
        assert!(controller.is_consistent());
    }

    #[test]
    fn test_show_accepts_relative_actions() {
        let config = ModalConfig::default();
        let mut controller = ModalController::new(MemoryView::hidden("hidden"), &config);
        for action in ["edit/", "delete/5/", "?delete=1", "#"] {
            controller.show(action).unwrap();
            assert_eq!(controller.action().as_deref(), Some(action));
            assert!(controller.is_visible());
        }
    }

    #[test]
    fn test_other_classes_survive() {
        let config = ModalConfig::default();
        let mut controller =
            ModalController::new(MemoryView::with_classes(["overlay", "hidden"]), &config);
        controller.show("/complete/3/").unwrap();
        assert_eq!(controller.view().class_name(), "overlay");
        controller.hide().unwrap();
        assert_eq!(controller.view().class_name(), "overlay hidden");
    }

    #[test]
    fn test_custom_hidden_class() {
        let config = ModalConfig::default().with_hidden_class("d-none");
        let mut controller = ModalController::new(MemoryView::hidden("d-none"), &config);
        assert_eq!(controller.hidden_class(), "d-none");
        controller.show("/restore/4/").unwrap();
        assert!(!controller.view().has_class("d-none"));
        controller.hide().unwrap();
        assert!(controller.view().has_class("d-none"));
    }

    #[test]
    fn test_inconsistent_markup_is_detected_and_repaired() {
        let config = ModalConfig::default();
        let mut controller = ModalController::new(MemoryView::new(), &config);
        assert!(controller.is_visible());
        assert!(!controller.is_consistent());

        controller.hide().unwrap();
        assert!(controller.is_consistent());
    }

    #[test]
    fn test_state_serialization() {
        assert_eq!(serde_json::to_string(&ModalState::Visible).unwrap(), r#""visible""#);
        assert_eq!(ModalState::Hidden.to_string(), "hidden");
    }

    fn action_strategy() -> impl Strategy<Value = String> {
        "(/|\\./)?[a-z0-9_-]{1,12}(/[a-z0-9_-]{0,12}){0,3}/?(\\?[a-z]{1,6}=[0-9]{1,3})?"
    }

    proptest! {
        #[test]
        fn prop_show_sets_action(action in action_strategy()) {
            let config = ModalConfig::default();
            let mut controller = ModalController::new(MemoryView::hidden("hidden"), &config);
            controller.show(&action).unwrap();
            prop_assert_eq!(controller.action(), Some(action));
            prop_assert!(controller.is_visible());
            prop_assert!(controller.is_consistent());
        }

        #[test]
        fn prop_last_show_wins(first in action_strategy(), second in action_strategy()) {
            let config = ModalConfig::default();
            let mut controller = ModalController::new(MemoryView::hidden("hidden"), &config);
            controller.show(&first).unwrap();
            controller.show(&second).unwrap();
            prop_assert_eq!(controller.action(), Some(second));
        }

        #[test]
        fn prop_hide_after_show_removes_action(action in action_strategy(), hides in 1usize..4) {
            let config = ModalConfig::default();
            let mut controller = ModalController::new(MemoryView::hidden("hidden"), &config);
            controller.show(&action).unwrap();
            for _ in 0..hides {
                controller.hide().unwrap();
            }
            prop_assert_eq!(controller.action(), None);
            prop_assert_eq!(controller.state(), ModalState::Hidden);
        }
    }
}
