use reelgen_admin_shared::{
    dialog::{Dialog, DialogId},
    settings::{
        clear_confirmed, ClearOutcome, DatabaseAction, Feedback, SecretField, SecretToggle,
        SecuritySettingsUpdate, SystemSettingsUpdate, VIDEO_QUALITIES,
    },
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    api::{
        fetch_api_key, fetch_settings, run_database_action, save_security_settings,
        save_system_settings,
    },
    components::modal::Modal,
    i18n::{
        current::{common as common_text, settings as t},
        fill_one,
    },
    modal_context::{show_confirmation, show_info, use_modal, ModalAction},
    utils::{bind_input, log_error},
};

#[derive(Properties, PartialEq)]
pub struct SettingsSectionProps {
    /// Fired after "clear all data" succeeds so both directories reload.
    pub on_data_cleared: Callback<()>,
}

fn card_classes() -> Classes {
    classes!(
        "rounded-[var(--radius)]",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "p-5"
    )
}

fn input_classes() -> Classes {
    classes!("mt-1", "w-full", "rounded-lg", "border", "border-[var(--border)]", "px-3", "py-2")
}

#[function_component(SettingsSection)]
pub fn settings_section(props: &SettingsSectionProps) -> Html {
    let modal = use_modal();
    let login_attempts = use_state(String::new);
    let session_timeout = use_state(String::new);
    let video_quality = use_state(String::new);
    let secret = use_state(SecretField::default);
    let feedback = use_state(|| None::<Feedback>);
    let clear_text = use_state(String::new);

    {
        let login_attempts = login_attempts.clone();
        let session_timeout = session_timeout.clone();
        let video_quality = video_quality.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_settings().await {
                    Ok(settings) => {
                        login_attempts.set(settings.login_attempts.to_string());
                        session_timeout.set(settings.session_timeout.to_string());
                        video_quality.set(settings.video_quality);
                    },
                    Err(err) => log_error(&fill_one(t::FETCH_FAILED_LOG, &err)),
                }
            });
            || ()
        });
    }

    let on_save_security = {
        let modal = modal.clone();
        let login_attempts = login_attempts.clone();
        let session_timeout = session_timeout.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let update = match SecuritySettingsUpdate::parse(&login_attempts, &session_timeout) {
                Ok(update) => update,
                Err(message) => {
                    show_info(&modal, common_text::ERROR, message);
                    return;
                },
            };
            let modal = modal.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match save_security_settings(&update).await {
                    Ok(_) => show_info(&modal, common_text::SUCCESS, t::SECURITY_SAVED),
                    Err(err) => show_info(&modal, common_text::ERROR, err.prefixed()),
                }
            });
        })
    };

    let on_save_system = {
        let modal = modal.clone();
        let video_quality = video_quality.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let update = SystemSettingsUpdate {
                video_quality: (*video_quality).clone(),
            };
            let modal = modal.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match save_system_settings(&update).await {
                    Ok(_) => show_info(&modal, common_text::SUCCESS, t::SYSTEM_SAVED),
                    Err(err) => show_info(&modal, common_text::ERROR, err.prefixed()),
                }
            });
        })
    };

    let on_quality_change = {
        let video_quality = video_quality.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                video_quality.set(target.value());
            }
        })
    };

    let on_toggle_secret = {
        let modal = modal.clone();
        let secret = secret.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*secret).clone();
            let step = next.toggle();
            secret.set(next.clone());
            if step != SecretToggle::Fetch {
                return;
            }
            let modal = modal.clone();
            let secret = secret.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_api_key().await {
                    Ok(key) => next.revealed(key),
                    Err(err) => {
                        log_error(&err.message);
                        next.reveal_failed();
                        show_info(&modal, common_text::ERROR, t::API_KEY_FAILED);
                    },
                }
                secret.set(next);
            });
        })
    };

    // Backup and optimize ask first, then report on the feedback line.
    let run_confirmed_action = {
        let modal = modal.clone();
        let feedback = feedback.clone();
        Callback::from(move |action: DatabaseAction| {
            let Some((title, message)) = action.confirmation() else {
                return;
            };
            let feedback = feedback.clone();
            let on_confirm = Callback::from(move |_: ()| {
                let feedback = feedback.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let line = match run_database_action(action).await {
                        Ok(response) => Feedback::from_response(&response),
                        Err(err) => Feedback::failure(err.message),
                    };
                    feedback.set(Some(line));
                });
            });
            show_confirmation(&modal, title, message, on_confirm);
        })
    };
    let on_backup = {
        let run = run_confirmed_action.clone();
        Callback::from(move |_: MouseEvent| run.emit(DatabaseAction::Backup))
    };
    let on_optimize = {
        let run = run_confirmed_action.clone();
        Callback::from(move |_: MouseEvent| run.emit(DatabaseAction::Optimize))
    };

    let on_open_clear = {
        let modal = modal.clone();
        let clear_text = clear_text.clone();
        Callback::from(move |_: MouseEvent| {
            clear_text.set(String::new());
            modal.dispatch(ModalAction::Open(Dialog::ClearAllData));
        })
    };

    let on_submit_clear = {
        let modal = modal.clone();
        let clear_text = clear_text.clone();
        let feedback = feedback.clone();
        let on_data_cleared = props.on_data_cleared.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if !clear_confirmed(&clear_text) {
                show_info(&modal, t::CONFIRMATION_REQUIRED, t::CLEAR_NEEDS_LITERAL);
                return;
            }
            let modal = modal.clone();
            let clear_text = clear_text.clone();
            let feedback = feedback.clone();
            let on_data_cleared = on_data_cleared.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = match run_database_action(DatabaseAction::Clear).await {
                    Ok(response) => ClearOutcome::from_response(&response),
                    Err(err) => ClearOutcome::failed(err.message),
                };
                if outcome.reload_directories {
                    on_data_cleared.emit(());
                    clear_text.set(String::new());
                    modal.dispatch(ModalAction::Close(DialogId::ClearAllData));
                }
                feedback.set(Some(outcome.feedback));
            });
        })
    };

    html! {
        <div class={classes!("flex", "flex-col", "gap-5")}>
            <h1 class={classes!("m-0", "text-xl", "font-semibold")}>{ t::TITLE }</h1>

            <div class={classes!("grid", "gap-4", "lg:grid-cols-2")}>
                <form class={card_classes()} onsubmit={on_save_security}>
                    <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::SECURITY }</h2>
                    <label class={classes!("block", "text-sm", "mb-2")}>
                        { t::LOGIN_ATTEMPTS }
                        <input
                            type="number"
                            min="0"
                            class={input_classes()}
                            value={(*login_attempts).clone()}
                            oninput={bind_input(&login_attempts)}
                        />
                    </label>
                    <label class={classes!("block", "text-sm", "mb-3")}>
                        { t::SESSION_TIMEOUT }
                        <input
                            type="number"
                            min="0"
                            class={input_classes()}
                            value={(*session_timeout).clone()}
                            oninput={bind_input(&session_timeout)}
                        />
                    </label>
                    <button type="submit" class={classes!("btn-fluent-primary")}>{ t::SAVE_SECURITY }</button>
                </form>

                <form class={card_classes()} onsubmit={on_save_system}>
                    <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::SYSTEM }</h2>
                    <label class={classes!("block", "text-sm", "mb-3")}>
                        { t::VIDEO_QUALITY }
                        <select class={input_classes()} onchange={on_quality_change}>
                            { for VIDEO_QUALITIES.iter().map(|quality| html! {
                                <option value={*quality} selected={*video_quality == *quality}>{ *quality }</option>
                            }) }
                        </select>
                    </label>
                    <button type="submit" class={classes!("btn-fluent-primary")}>{ t::SAVE_SYSTEM }</button>
                </form>

                <section class={card_classes()}>
                    <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::API }</h2>
                    <label class={classes!("block", "text-sm", "mb-1")} for="api-key">{ t::API_KEY }</label>
                    <div class={classes!("flex", "gap-2")}>
                        <input
                            id="api-key"
                            readonly=true
                            type={secret.input_type()}
                            class={input_classes()}
                            value={secret.display_value().to_string()}
                        />
                        <button
                            type="button"
                            class={classes!("btn-fluent-secondary", "mt-1")}
                            disabled={*secret == SecretField::Revealing}
                            onclick={on_toggle_secret}
                        >
                            { secret.button_label() }
                        </button>
                    </div>
                </section>

                <section class={card_classes()}>
                    <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::DATABASE }</h2>
                    <div class={classes!("flex", "flex-wrap", "gap-2")}>
                        <button type="button" class={classes!("btn-fluent-secondary")} onclick={on_backup}>
                            <i class={classes!("fas", "fa-download", "mr-2")} aria-hidden="true"></i>
                            { t::BACKUP }
                        </button>
                        <button type="button" class={classes!("btn-fluent-secondary")} onclick={on_optimize}>
                            <i class={classes!("fas", "fa-screwdriver-wrench", "mr-2")} aria-hidden="true"></i>
                            { t::OPTIMIZE }
                        </button>
                        <button type="button" class={classes!("btn-fluent-danger")} onclick={on_open_clear}>
                            <i class={classes!("fas", "fa-trash", "mr-2")} aria-hidden="true"></i>
                            { t::CLEAR }
                        </button>
                    </div>
                    if let Some(line) = (*feedback).clone() {
                        <p class={classes!(line.class(), "mt-3", "mb-0", "text-sm")}>{ line.message.clone() }</p>
                    }
                </section>
            </div>

            if modal.dialogs.is_open(DialogId::ClearAllData) {
                <Modal id={DialogId::ClearAllData} title={t::CLEAR_TITLE}>
                    <form onsubmit={on_submit_clear}>
                        <p class={classes!("mt-0", "text-sm")}>{ t::CLEAR_WARNING }</p>
                        <input
                            type="text"
                            class={input_classes()}
                            autocomplete="off"
                            value={(*clear_text).clone()}
                            oninput={bind_input(&clear_text)}
                        />
                        <div class={classes!("mt-4", "flex", "justify-end")}>
                            <button type="submit" class={classes!("btn-fluent-danger")}>{ t::CLEAR_SUBMIT }</button>
                        </div>
                    </form>
                </Modal>
            }
        </div>
    }
}
