use crate::domain::todo_list::NewList;

/// How the creation form is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatorVariant {
    /// Always-visible input with an add button
    #[default]
    Inline,
    /// Floating action button that opens a modal form
    Modal,
}

/// State of the "create a new list" form
#[derive(Debug, Clone)]
pub struct ListCreator {
    variant: CreatorVariant,
    title: String,
    modal_open: bool,
}

impl ListCreator {
    pub const DEFAULT_TITLE: &'static str = "My New List";

    pub fn new(variant: CreatorVariant) -> Self {
        Self {
            variant,
            title: Self::DEFAULT_TITLE.to_string(),
            modal_open: false,
        }
    }

    pub fn variant(&self) -> CreatorVariant {
        self.variant
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Whether the input is currently shown
    pub fn is_visible(&self) -> bool {
        match self.variant {
            CreatorVariant::Inline => true,
            CreatorVariant::Modal => self.modal_open,
        }
    }

    /// Floating action button click. No-op for the inline form.
    pub fn open(&mut self) {
        if self.variant == CreatorVariant::Modal {
            self.modal_open = true;
        }
    }

    pub fn cancel(&mut self) {
        self.modal_open = false;
    }

    /// Confirms the form, producing one add-list request.
    ///
    /// Returns `None` when the form is not visible. The modal closes itself;
    /// the typed title is kept for the next time the form is shown.
    pub fn confirm(&mut self) -> Option<NewList> {
        if !self.is_visible() {
            return None;
        }
        self.modal_open = false;
        Some(NewList::new(self.title.clone()))
    }
}

impl Default for ListCreator {
    fn default() -> Self {
        Self::new(CreatorVariant::default())
    }
}
