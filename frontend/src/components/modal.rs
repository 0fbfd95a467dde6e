use reelgen_admin_shared::dialog::{Dialog, DialogId};
use yew::prelude::*;

use crate::{
    i18n::current::common as t,
    modal_context::{use_modal, ModalAction},
};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: DialogId,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
    /// Action buttons rendered under the body.
    #[prop_or_default]
    pub footer: Option<Html>,
}

/// Overlay frame shared by every dialog. The backdrop and the close control
/// both dismiss the dialog without running anything.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let modal = use_modal();
    let id = props.id;

    let on_backdrop = {
        let modal = modal.clone();
        Callback::from(move |event: MouseEvent| {
            // Only clicks that land on the backdrop itself.
            if event.target() == event.current_target() {
                modal.dispatch(ModalAction::Dismiss(id));
            }
        })
    };
    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::Dismiss(id)))
    };

    html! {
        <div
            class={classes!(
                "modal",
                "fixed",
                "inset-0",
                "z-50",
                "flex",
                "items-center",
                "justify-center",
                "bg-black/40",
                "p-4"
            )}
            role="dialog"
            aria-modal="true"
            onclick={on_backdrop}
        >
            <div class={classes!(
                "modal-content",
                "w-full",
                "max-w-lg",
                "rounded-[var(--radius)]",
                "border",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "shadow-[var(--shadow)]"
            )}>
                <div class={classes!("modal-header", "flex", "items-center", "justify-between", "px-5", "py-3", "border-b", "border-[var(--border)]")}>
                    <h3 class={classes!("m-0", "text-lg", "font-semibold")}>{ props.title.clone() }</h3>
                    <button
                        type="button"
                        class={classes!("modal-close", "text-xl", "leading-none", "hover:text-[var(--primary)]")}
                        aria-label={t::CLOSE_ARIA}
                        onclick={on_close}
                    >
                        {"×"}
                    </button>
                </div>
                <div class={classes!("modal-body", "px-5", "py-4")}>
                    { props.children.clone() }
                </div>
                if let Some(footer) = props.footer.clone() {
                    <div class={classes!("modal-footer", "flex", "justify-end", "gap-2", "px-5", "py-3", "border-t", "border-[var(--border)]")}>
                        { footer }
                    </div>
                }
            </div>
        </div>
    }
}

/// Renders the two dialogs every section shares: the pending confirmation
/// and the info message. Section-specific dialogs are rendered by their
/// sections.
#[function_component(ModalHost)]
pub fn modal_host() -> Html {
    let modal = use_modal();

    let on_confirm = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            let pending = modal.pending_confirmation();
            modal.dispatch(ModalAction::Confirm);
            if let Some(action) = pending {
                action.emit(());
            }
        })
    };
    let on_cancel = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::Dismiss(DialogId::Confirmation)))
    };
    let on_info_ok = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::Close(DialogId::Info)))
    };

    let confirmation = match modal.dialogs.get(DialogId::Confirmation) {
        Some(Dialog::Confirmation {
            title,
            message,
            ..
        }) => html! {
            <Modal
                id={DialogId::Confirmation}
                title={title.clone()}
                footer={html! {
                    <>
                        <button type="button" class={classes!("btn-fluent-secondary")} onclick={on_cancel}>
                            { t::CANCEL }
                        </button>
                        <button type="button" class={classes!("btn-fluent-primary")} onclick={on_confirm}>
                            { t::CONFIRM }
                        </button>
                    </>
                }}
            >
                <p class={classes!("m-0")}>{ message.clone() }</p>
            </Modal>
        },
        _ => Html::default(),
    };

    let info = match modal.dialogs.get(DialogId::Info) {
        Some(Dialog::Info {
            title,
            message,
        }) => html! {
            <Modal
                id={DialogId::Info}
                title={title.clone()}
                footer={html! {
                    <button type="button" class={classes!("btn-fluent-primary")} onclick={on_info_ok}>
                        { t::OK }
                    </button>
                }}
            >
                <p class={classes!("m-0")}>{ message.clone() }</p>
            </Modal>
        },
        _ => Html::default(),
    };

    html! {
        <>
            { confirmation }
            { info }
        </>
    }
}
