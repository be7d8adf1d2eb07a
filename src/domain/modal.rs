// Panel dialog state. One discriminated value instead of a boolean per
// dialog: two dialogs can never be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Adding,
    Editing(i64),
    Deleting(i64),
}

impl ModalState {
    // Derived from the panel query string: `?modal=add`, `?modal=edit&id=7`,
    // `?modal=delete&id=7`. Anything else renders the panel with no dialog.
    pub fn from_query(modal: Option<&str>, id: Option<i64>) -> Self {
        match (modal, id) {
            (Some("add"), _) => Self::Adding,
            (Some("edit"), Some(id)) => Self::Editing(id),
            (Some("delete"), Some(id)) => Self::Deleting(id),
            _ => Self::Closed,
        }
    }

    pub fn selected_id(&self) -> Option<i64> {
        match self {
            Self::Editing(id) | Self::Deleting(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_add(&self) -> bool {
        matches!(self, Self::Adding)
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Deleting(_))
    }
}
