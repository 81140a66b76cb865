use crate::error::Result;

/// The DOM operations the modal controller needs from its overlay and form.
///
/// Browser code implements this over real elements; native hosts and tests
/// use [`MemoryView`].
pub trait ModalView {
    /// Whether the overlay carries `class`.
    fn has_class(&self, class: &str) -> bool;

    fn add_class(&mut self, class: &str) -> Result<()>;

    fn remove_class(&mut self, class: &str) -> Result<()>;

    /// The form's `action` attribute, `None` when the attribute is absent.
    fn action(&self) -> Option<String>;

    fn set_action(&mut self, action: &str) -> Result<()>;

    /// Removes the attribute itself; an empty string does not count as removed.
    fn remove_action(&mut self) -> Result<()>;
}

/// Overlay and form held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    classes: Vec<String>,
    action: Option<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay as it comes from markup: carrying the hidden class, no action.
    pub fn hidden(hidden_class: &str) -> Self {
        Self {
            classes: vec![hidden_class.to_string()],
            action: None,
        }
    }

    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut view = Self::new();
        for class in classes {
            let class = class.into();
            if !view.classes.contains(&class) {
                view.classes.push(class);
            }
        }
        view
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Space separated, in insertion order, like `className`.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

impl ModalView for MemoryView {
    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) -> Result<()> {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, class: &str) -> Result<()> {
        self.classes.retain(|c| c != class);
        Ok(())
    }

    fn action(&self) -> Option<String> {
        self.action.clone()
    }

    fn set_action(&mut self, action: &str) -> Result<()> {
        self.action = Some(action.to_string());
        Ok(())
    }

    fn remove_action(&mut self) -> Result<()> {
        self.action = None;
        Ok(())
    }
}
