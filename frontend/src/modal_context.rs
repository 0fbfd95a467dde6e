use std::rc::Rc;

use reelgen_admin_shared::dialog::{Dialog, DialogId, DialogRegistry};
use yew::prelude::*;

/// Dialogs as the console uses them: a confirmation carries the callback to
/// run once the operator agrees.
pub type ConsoleDialog = Dialog<Callback<()>>;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    pub dialogs: DialogRegistry<Callback<()>>,
}

pub enum ModalAction {
    Open(ConsoleDialog),
    Close(DialogId),
    /// Backdrop click or close control.
    Dismiss(DialogId),
    ShowConfirmation {
        title: String,
        message: String,
        on_confirm: Callback<()>,
    },
    ShowInfo {
        title: String,
        message: String,
    },
    /// Clears the pending confirmation and closes its dialog. The caller runs
    /// the callback it read from [`ModalState::pending_confirmation`].
    Confirm,
}

impl ModalState {
    pub fn pending_confirmation(&self) -> Option<Callback<()>> {
        self.dialogs.pending_confirmation().cloned()
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ModalAction::Open(dialog) => next.dialogs.open(dialog),
            ModalAction::Close(id) => next.dialogs.close(id),
            ModalAction::Dismiss(id) => next.dialogs.dismiss(id),
            ModalAction::ShowConfirmation {
                title,
                message,
                on_confirm,
            } => next.dialogs.show_confirmation(title, message, on_confirm),
            ModalAction::ShowInfo {
                title,
                message,
            } => next.dialogs.show_info(title, message),
            ModalAction::Confirm => {
                next.dialogs.confirm();
            },
        }
        Rc::new(next)
    }
}

pub type ModalContext = UseReducerHandle<ModalState>;

/// Handle to the console's dialogs. Every page is rendered inside
/// [`ModalProvider`].
#[hook]
pub fn use_modal() -> ModalContext {
    use_context::<ModalContext>().expect("ModalProvider must wrap the admin console")
}

pub fn show_info(modal: &ModalContext, title: &str, message: impl Into<String>) {
    modal.dispatch(ModalAction::ShowInfo {
        title: title.to_string(),
        message: message.into(),
    });
}

pub fn show_confirmation(
    modal: &ModalContext,
    title: &str,
    message: impl Into<String>,
    on_confirm: Callback<()>,
) {
    modal.dispatch(ModalAction::ShowConfirmation {
        title: title.to_string(),
        message: message.into(),
        on_confirm,
    });
}

#[derive(Properties, PartialEq)]
pub struct ModalProviderProps {
    pub children: Html,
}

#[function_component(ModalProvider)]
pub fn modal_provider(props: &ModalProviderProps) -> Html {
    let state = use_reducer(ModalState::default);
    html! {
        <ContextProvider<ModalContext> context={state}>
            {props.children.clone()}
        </ContextProvider<ModalContext>>
    }
}
