//! Typed registry of the console's dialogs.
//!
//! Each dialog is keyed by a [`DialogId`] and carries its own payload. The
//! confirmation dialog holds a single pending action of type `A`; the
//! frontend instantiates `A` with a UI callback, tests use plain values.

use std::collections::BTreeMap;

use crate::UserRow;

/// Declaration order is paint order: later dialogs render on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DialogId {
    AddUser,
    UserDetail,
    ResetPassword,
    EditUser,
    VideoDetail,
    ClearAllData,
    Confirmation,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog<A> {
    AddUser,
    UserDetail(UserRow),
    ResetPassword {
        user_id: i64,
    },
    /// Edit form pre-filled from a freshly fetched record.
    EditUser(UserRow),
    VideoDetail {
        video_id: i64,
    },
    ClearAllData,
    Confirmation {
        title: String,
        message: String,
        on_confirm: A,
    },
    Info {
        title: String,
        message: String,
    },
}

impl<A> Dialog<A> {
    pub fn id(&self) -> DialogId {
        match self {
            Dialog::AddUser => DialogId::AddUser,
            Dialog::UserDetail(_) => DialogId::UserDetail,
            Dialog::ResetPassword {
                ..
            } => DialogId::ResetPassword,
            Dialog::EditUser(_) => DialogId::EditUser,
            Dialog::VideoDetail {
                ..
            } => DialogId::VideoDetail,
            Dialog::ClearAllData => DialogId::ClearAllData,
            Dialog::Confirmation {
                ..
            } => DialogId::Confirmation,
            Dialog::Info {
                ..
            } => DialogId::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogRegistry<A> {
    open: BTreeMap<DialogId, Dialog<A>>,
}

impl<A> Default for DialogRegistry<A> {
    fn default() -> Self {
        Self {
            open: BTreeMap::new(),
        }
    }
}

impl<A> DialogRegistry<A> {
    /// Show `dialog`, replacing whatever was open under the same id.
    pub fn open(&mut self, dialog: Dialog<A>) {
        self.open.insert(dialog.id(), dialog);
    }

    pub fn close(&mut self, id: DialogId) {
        self.open.remove(&id);
    }

    /// Backdrop click or close control: no side effects. A dismissed
    /// confirmation drops its pending action.
    pub fn dismiss(&mut self, id: DialogId) {
        self.close(id);
    }

    pub fn is_open(&self, id: DialogId) -> bool {
        self.open.contains_key(&id)
    }

    pub fn get(&self, id: DialogId) -> Option<&Dialog<A>> {
        self.open.get(&id)
    }

    /// Open dialogs in paint order.
    pub fn iter(&self) -> impl Iterator<Item = &Dialog<A>> {
        self.open.values()
    }

    /// Ask the operator to confirm `on_confirm`. Any previously pending
    /// confirmation is overwritten.
    pub fn show_confirmation(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: A,
    ) {
        self.open(Dialog::Confirmation {
            title: title.into(),
            message: message.into(),
            on_confirm,
        });
    }

    pub fn show_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.open(Dialog::Info {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn pending_confirmation(&self) -> Option<&A> {
        match self.open.get(&DialogId::Confirmation) {
            Some(Dialog::Confirmation {
                on_confirm,
                ..
            }) => Some(on_confirm),
            _ => None,
        }
    }

    /// Close the confirmation dialog and hand back its action for the caller
    /// to run. The action is cleared, so a second call returns `None`.
    pub fn confirm(&mut self) -> Option<A> {
        match self.open.remove(&DialogId::Confirmation) {
            Some(Dialog::Confirmation {
                on_confirm,
                ..
            }) => Some(on_confirm),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Action {
        DeleteUser(i64),
        Backup,
    }

    #[test]
    fn confirm_runs_once_and_closes() {
        let mut registry = DialogRegistry::default();
        registry.show_confirmation("Delete User", "Are you sure?", Action::DeleteUser(5));
        assert!(registry.is_open(DialogId::Confirmation));
        assert_eq!(registry.pending_confirmation(), Some(&Action::DeleteUser(5)));

        assert_eq!(registry.confirm(), Some(Action::DeleteUser(5)));
        assert!(!registry.is_open(DialogId::Confirmation));
        assert_eq!(registry.confirm(), None);
    }

    #[test]
    fn new_confirmation_overwrites_pending_one() {
        let mut registry = DialogRegistry::default();
        registry.show_confirmation("Delete User", "first", Action::DeleteUser(1));
        registry.show_confirmation("Backup Database", "second", Action::Backup);
        assert_eq!(registry.iter().count(), 1);
        assert_eq!(registry.confirm(), Some(Action::Backup));
    }

    #[test]
    fn dismiss_has_no_side_effects() {
        let mut registry = DialogRegistry::default();
        registry.show_confirmation("Delete User", "?", Action::DeleteUser(3));
        registry.dismiss(DialogId::Confirmation);
        assert_eq!(registry.pending_confirmation(), None);
        assert_eq!(registry.confirm(), None);
    }

    #[test]
    fn dialogs_stack_in_paint_order() {
        let mut registry: DialogRegistry<Action> = DialogRegistry::default();
        registry.show_info("Success", "saved");
        registry.open(Dialog::ResetPassword {
            user_id: 4,
        });
        registry.open(Dialog::AddUser);

        let order: Vec<DialogId> = registry.iter().map(Dialog::id).collect();
        assert_eq!(order, vec![DialogId::AddUser, DialogId::ResetPassword, DialogId::Info]);

        registry.close(DialogId::ResetPassword);
        assert!(!registry.is_open(DialogId::ResetPassword));
        assert!(registry.is_open(DialogId::Info));
    }

    #[test]
    fn reopening_replaces_payload() {
        let mut registry: DialogRegistry<Action> = DialogRegistry::default();
        registry.open(Dialog::VideoDetail {
            video_id: 1,
        });
        registry.open(Dialog::VideoDetail {
            video_id: 2,
        });
        assert_eq!(
            registry.get(DialogId::VideoDetail),
            Some(&Dialog::VideoDetail {
                video_id: 2
            })
        );
    }
}
