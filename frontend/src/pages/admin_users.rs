use reelgen_admin_shared::{
    dialog::{Dialog, DialogId},
    endpoints,
    listing::{ListingState, PageInfo, ReloadEpoch},
    NewUserRequest, UserRow, UserUpdateRequest, UsersPage, USER_ROLES,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    api::{create_user, delete_user, fetch_user, fetch_users, update_user},
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::Modal,
        pager::Pager,
    },
    i18n::{
        current::{common as common_text, users as t},
        fill_one,
    },
    modal_context::{show_confirmation, show_info, use_modal, ModalAction},
    utils::{bind_input, format_date, log_error, navigate_full_page},
};

#[derive(Properties, PartialEq)]
pub struct UsersSectionProps {
    /// Bumped by the console when all data was cleared.
    pub reload_epoch: ReloadEpoch,
}

fn input_classes() -> Classes {
    classes!("mt-1", "w-full", "rounded-lg", "border", "border-[var(--border)]", "px-3", "py-2")
}

fn user_row(user: &UserRow, on_view: &Callback<i64>, on_delete: &Callback<i64>) -> Html {
    let id = user.id;
    let status = user.status();
    let view = {
        let on_view = on_view.clone();
        Callback::from(move |_: MouseEvent| on_view.emit(id))
    };
    let delete = {
        let on_delete = on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };
    html! {
        <tr key={id} class={classes!("border-t", "border-[var(--border)]")}>
            <td class={classes!("px-3", "py-2")}>{ user.name.clone() }</td>
            <td class={classes!("px-3", "py-2")}>{ user.email.clone() }</td>
            <td class={classes!("px-3", "py-2")}>{ format_date(&user.created_at) }</td>
            <td class={classes!("px-3", "py-2")}>{ user.video_count_or_zero().to_string() }</td>
            <td class={classes!("px-3", "py-2")}>
                <span class={classes!("status-badge", status.badge_class())}>{ status.label() }</span>
            </td>
            <td class={classes!("px-3", "py-2", "whitespace-nowrap")}>
                <button type="button" class={classes!("btn-fluent-primary", "btn-sm", "view-user", "mr-2")} onclick={view}>
                    { common_text::VIEW }
                </button>
                <button type="button" class={classes!("btn-fluent-danger", "btn-sm", "delete-user")} onclick={delete}>
                    { common_text::DELETE }
                </button>
            </td>
        </tr>
    }
}

#[function_component(UsersSection)]
pub fn users_section(props: &UsersSectionProps) -> Html {
    let modal = use_modal();
    let listing = use_state(ListingState::<String>::default);
    let result = use_state(|| None::<UsersPage>);
    let search = use_state(String::new);
    // Id of the user whose details were shown last. The edit action reads
    // this, not the open dialog's payload.
    let detail_target = use_state(|| None::<i64>);

    let new_name = use_state(String::new);
    let new_email = use_state(String::new);
    let new_password = use_state(String::new);
    let new_role = use_state(|| USER_ROLES[0].to_string());
    let edit_name = use_state(String::new);
    let edit_email = use_state(String::new);
    let reset_password = use_state(String::new);

    let load = {
        let listing = listing.clone();
        let result = result.clone();
        Callback::from(move |state: ListingState<String>| {
            let listing = listing.clone();
            let result = result.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_users(&state).await {
                    Ok(page) => {
                        if let Some(shown) = state.settle(Some(page.page)) {
                            listing.set(shown);
                        }
                        result.set(Some(page));
                    },
                    Err(err) => log_error(&fill_one(t::FETCH_FAILED_LOG, &err)),
                }
            });
        })
    };

    // First page, no search. Used on mount, after create/delete and after a
    // global data reset.
    let reload_from_start = {
        let load = load.clone();
        let search = search.clone();
        Callback::from(move |_: ()| {
            search.set(String::new());
            load.emit(ListingState::default());
        })
    };

    {
        let reload_from_start = reload_from_start.clone();
        use_effect_with(props.reload_epoch, move |_| {
            reload_from_start.emit(());
            || ()
        });
    }

    let on_search_input = {
        let load = load.clone();
        let listing = listing.clone();
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                let text = target.value();
                search.set(text.clone());
                load.emit(listing.with_filter(text));
            }
        })
    };

    // Pager requests start from the page on screen and the text in the
    // search box, whichever search last loaded.
    let on_prev = {
        let load = load.clone();
        let listing = listing.clone();
        let search = search.clone();
        Callback::from(move |_: ()| {
            if let Some(previous) = listing.filtered_by((*search).clone()).previous() {
                load.emit(previous);
            }
        })
    };
    let on_next = {
        let load = load.clone();
        let listing = listing.clone();
        let search = search.clone();
        Callback::from(move |_: ()| load.emit(listing.filtered_by((*search).clone()).next()))
    };

    let on_view = {
        let modal = modal.clone();
        let detail_target = detail_target.clone();
        Callback::from(move |id: i64| {
            let modal = modal.clone();
            let detail_target = detail_target.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_user(id).await {
                    Ok(user) => {
                        detail_target.set(Some(user.id));
                        modal.dispatch(ModalAction::Open(Dialog::UserDetail(user)));
                    },
                    Err(err) => {
                        log_error(&format!("Error fetching user details: {}", err));
                        show_info(&modal, common_text::ERROR, err.message);
                    },
                }
            });
        })
    };

    let on_delete = {
        let modal = modal.clone();
        let reload_from_start = reload_from_start.clone();
        Callback::from(move |id: i64| {
            let on_confirm = {
                let modal = modal.clone();
                let reload_from_start = reload_from_start.clone();
                Callback::from(move |_: ()| {
                    let modal = modal.clone();
                    let reload_from_start = reload_from_start.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match delete_user(id).await {
                            Ok(_) => {
                                reload_from_start.emit(());
                                show_info(&modal, common_text::SUCCESS, t::DELETED);
                            },
                            Err(err) => {
                                log_error(&format!("Error deleting user: {}", err));
                                show_info(&modal, common_text::ERROR, err.prefixed());
                            },
                        }
                    });
                })
            };
            show_confirmation(&modal, t::DELETE_TITLE, fill_one(t::DELETE_CONFIRM_TEMPLATE, id), on_confirm);
        })
    };

    let on_open_add = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::Open(Dialog::AddUser)))
    };

    let on_role_change = {
        let new_role = new_role.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                new_role.set(target.value());
            }
        })
    };

    let on_submit_add = {
        let modal = modal.clone();
        let reload_from_start = reload_from_start.clone();
        let new_name = new_name.clone();
        let new_email = new_email.clone();
        let new_password = new_password.clone();
        let new_role = new_role.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request =
                NewUserRequest::from_form(&new_name, &new_email, &new_password, &new_role);
            let modal = modal.clone();
            let reload_from_start = reload_from_start.clone();
            let new_name = new_name.clone();
            let new_email = new_email.clone();
            let new_password = new_password.clone();
            let new_role = new_role.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match create_user(&request).await {
                    Ok(_) => {
                        modal.dispatch(ModalAction::Close(DialogId::AddUser));
                        new_name.set(String::new());
                        new_email.set(String::new());
                        new_password.set(String::new());
                        new_role.set(USER_ROLES[0].to_string());
                        reload_from_start.emit(());
                        show_info(&modal, common_text::SUCCESS, t::ADDED);
                    },
                    Err(err) => {
                        log_error(&format!("Error adding user: {}", err));
                        show_info(&modal, common_text::ERROR, err.prefixed());
                    },
                }
            });
        })
    };

    let on_open_reset = {
        let modal = modal.clone();
        let reset_password = reset_password.clone();
        Callback::from(move |user_id: i64| {
            reset_password.set(String::new());
            modal.dispatch(ModalAction::Open(Dialog::ResetPassword {
                user_id,
            }));
        })
    };

    let on_submit_reset = {
        let modal = modal.clone();
        let reset_password = reset_password.clone();
        Callback::from(move |(event, user_id): (SubmitEvent, i64)| {
            event.prevent_default();
            // An empty password sends nothing.
            let Some(request) = UserUpdateRequest::password_reset(&reset_password) else {
                return;
            };
            let modal = modal.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match update_user(user_id, &request).await {
                    Ok(response) => {
                        show_info(&modal, common_text::SUCCESS, response.message);
                        modal.dispatch(ModalAction::Close(DialogId::ResetPassword));
                    },
                    Err(err) => {
                        log_error(&format!("Error resetting password: {}", err));
                        show_info(&modal, common_text::ERROR, err.message);
                    },
                }
            });
        })
    };

    let on_login_as = Callback::from(|user_id: i64| navigate_full_page(&endpoints::login_as(user_id)));

    let on_open_edit = {
        let modal = modal.clone();
        let detail_target = detail_target.clone();
        let edit_name = edit_name.clone();
        let edit_email = edit_email.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(id) = *detail_target else {
                return;
            };
            let modal = modal.clone();
            let edit_name = edit_name.clone();
            let edit_email = edit_email.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_user(id).await {
                    Ok(user) => {
                        edit_name.set(user.name.clone());
                        edit_email.set(user.email.clone());
                        modal.dispatch(ModalAction::Close(DialogId::UserDetail));
                        modal.dispatch(ModalAction::Open(Dialog::EditUser(user)));
                    },
                    Err(err) => {
                        log_error(&format!("Error fetching user for edit: {}", err));
                        show_info(&modal, common_text::ERROR, err.message);
                    },
                }
            });
        })
    };

    let on_submit_edit = {
        let modal = modal.clone();
        let load = load.clone();
        let listing = listing.clone();
        let search = search.clone();
        let edit_name = edit_name.clone();
        let edit_email = edit_email.clone();
        Callback::from(move |(event, user_id): (SubmitEvent, i64)| {
            event.prevent_default();
            let request = UserUpdateRequest::profile(&edit_name, &edit_email);
            let current = listing.filtered_by((*search).clone());
            let modal = modal.clone();
            let load = load.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match update_user(user_id, &request).await {
                    Ok(response) => {
                        show_info(&modal, common_text::SUCCESS, response.message);
                        modal.dispatch(ModalAction::Close(DialogId::EditUser));
                        load.emit(current);
                    },
                    Err(err) => {
                        log_error(&format!("Error editing user: {}", err));
                        show_info(&modal, common_text::ERROR, err.message);
                    },
                }
            });
        })
    };

    let table = match &*result {
        None => html! { <LoadingSpinner size={SpinnerSize::Small} /> },
        Some(page) if page.users.is_empty() => html! {
            <p class={classes!("m-0", "p-4", "text-sm", "text-[var(--muted)]")}>{ t::EMPTY }</p>
        },
        Some(page) => html! {
            <table class={classes!("w-full", "text-sm", "text-left")}>
                <thead class={classes!("text-xs", "uppercase", "tracking-[0.06em]", "text-[var(--muted)]")}>
                    <tr>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_NAME }</th>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_EMAIL }</th>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_JOINED }</th>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_VIDEOS }</th>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_STATUS }</th>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_ACTIONS }</th>
                    </tr>
                </thead>
                <tbody>
                    { for page.users.iter().map(|user| user_row(user, &on_view, &on_delete)) }
                </tbody>
            </table>
        },
    };
    let page_info = result
        .as_ref()
        .map(|page| PageInfo::from_reported(page.page, page.total));

    let detail_dialog = match modal.dialogs.get(DialogId::UserDetail) {
        Some(Dialog::UserDetail(user)) => {
            let user_id = user.id;
            let reset = {
                let on_open_reset = on_open_reset.clone();
                Callback::from(move |_: MouseEvent| on_open_reset.emit(user_id))
            };
            let login_as = {
                let on_login_as = on_login_as.clone();
                Callback::from(move |_: MouseEvent| on_login_as.emit(user_id))
            };
            html! {
                <Modal id={DialogId::UserDetail} title={t::DETAIL_TITLE}>
                    <div class={classes!("user-detail-header", "flex", "items-center", "gap-3", "mb-4")}>
                        <i class={classes!("fas", "fa-user-circle", "text-4xl", "text-[var(--muted)]")} aria-hidden="true"></i>
                        <div>
                            <h4 class={classes!("m-0", "font-semibold")}>{ user.name.clone() }</h4>
                            <p class={classes!("m-0", "text-sm", "text-[var(--muted)]")}>{ user.email.clone() }</p>
                        </div>
                    </div>
                    <div class={classes!("user-detail-stats", "grid", "grid-cols-3", "gap-3", "mb-4", "text-center")}>
                        <div class="stat">
                            <div class={classes!("stat-value", "text-lg", "font-semibold")}>{ user.video_count_or_zero().to_string() }</div>
                            <div class={classes!("stat-label", "text-xs", "text-[var(--muted)]")}>{ t::VIDEOS_CREATED }</div>
                        </div>
                        <div class="stat">
                            <div class={classes!("stat-value", "text-lg", "font-semibold")}>{ user.subscription_label() }</div>
                            <div class={classes!("stat-label", "text-xs", "text-[var(--muted)]")}>{ t::SUBSCRIPTION }</div>
                        </div>
                        <div class="stat">
                            <div class={classes!("stat-value", "text-lg", "font-semibold")}>{ format_date(&user.created_at) }</div>
                            <div class={classes!("stat-label", "text-xs", "text-[var(--muted)]")}>{ t::JOINED }</div>
                        </div>
                    </div>
                    <div class={classes!("user-detail-actions", "flex", "flex-wrap", "gap-2")}>
                        <button type="button" class={classes!("btn-fluent-danger", "btn-sm")} onclick={reset}>
                            { t::RESET_PASSWORD }
                        </button>
                        <button type="button" class={classes!("btn-fluent-secondary", "btn-sm")} onclick={login_as}>
                            { t::LOGIN_AS }
                        </button>
                        <button type="button" class={classes!("btn-fluent-primary", "btn-sm")} onclick={on_open_edit.clone()}>
                            { t::EDIT }
                        </button>
                    </div>
                </Modal>
            }
        },
        _ => Html::default(),
    };

    let reset_dialog = match modal.dialogs.get(DialogId::ResetPassword) {
        Some(Dialog::ResetPassword {
            user_id,
        }) => {
            let user_id = *user_id;
            let onsubmit = {
                let on_submit_reset = on_submit_reset.clone();
                Callback::from(move |event: SubmitEvent| on_submit_reset.emit((event, user_id)))
            };
            html! {
                <Modal id={DialogId::ResetPassword} title={t::RESET_TITLE}>
                    <form {onsubmit}>
                        <input type="hidden" value={user_id.to_string()} />
                        <label class={classes!("block", "text-sm")}>
                            { t::NEW_PASSWORD }
                            <input
                                type="password"
                                autocomplete="new-password"
                                class={input_classes()}
                                value={(*reset_password).clone()}
                                oninput={bind_input(&reset_password)}
                            />
                        </label>
                        <div class={classes!("mt-4", "flex", "justify-end")}>
                            <button type="submit" class={classes!("btn-fluent-danger")}>{ t::SUBMIT_RESET }</button>
                        </div>
                    </form>
                </Modal>
            }
        },
        _ => Html::default(),
    };

    let edit_dialog = match modal.dialogs.get(DialogId::EditUser) {
        Some(Dialog::EditUser(user)) => {
            let user_id = user.id;
            let onsubmit = {
                let on_submit_edit = on_submit_edit.clone();
                Callback::from(move |event: SubmitEvent| on_submit_edit.emit((event, user_id)))
            };
            html! {
                <Modal id={DialogId::EditUser} title={t::EDIT_TITLE}>
                    <form {onsubmit}>
                        <label class={classes!("block", "text-sm", "mb-2")}>
                            { t::FIELD_NAME }
                            <input type="text" class={input_classes()} value={(*edit_name).clone()} oninput={bind_input(&edit_name)} />
                        </label>
                        <label class={classes!("block", "text-sm")}>
                            { t::FIELD_EMAIL }
                            <input type="email" class={input_classes()} value={(*edit_email).clone()} oninput={bind_input(&edit_email)} />
                        </label>
                        <div class={classes!("mt-4", "flex", "justify-end")}>
                            <button type="submit" class={classes!("btn-fluent-primary")}>{ common_text::SAVE }</button>
                        </div>
                    </form>
                </Modal>
            }
        },
        _ => Html::default(),
    };

    let add_dialog = if modal.dialogs.is_open(DialogId::AddUser) {
        html! {
            <Modal id={DialogId::AddUser} title={t::ADD_TITLE}>
                <form onsubmit={on_submit_add}>
                    <label class={classes!("block", "text-sm", "mb-2")}>
                        { t::FIELD_NAME }
                        <input type="text" required=true class={input_classes()} value={(*new_name).clone()} oninput={bind_input(&new_name)} />
                    </label>
                    <label class={classes!("block", "text-sm", "mb-2")}>
                        { t::FIELD_EMAIL }
                        <input type="email" required=true class={input_classes()} value={(*new_email).clone()} oninput={bind_input(&new_email)} />
                    </label>
                    <label class={classes!("block", "text-sm", "mb-2")}>
                        { t::FIELD_PASSWORD }
                        <input type="password" required=true autocomplete="new-password" class={input_classes()} value={(*new_password).clone()} oninput={bind_input(&new_password)} />
                    </label>
                    <label class={classes!("block", "text-sm")}>
                        { t::FIELD_ROLE }
                        <select class={input_classes()} onchange={on_role_change}>
                            { for USER_ROLES.iter().map(|role| html! {
                                <option value={*role} selected={*new_role == *role}>{ *role }</option>
                            }) }
                        </select>
                    </label>
                    <div class={classes!("mt-4", "flex", "justify-end")}>
                        <button type="submit" class={classes!("btn-fluent-primary")}>{ t::SUBMIT_ADD }</button>
                    </div>
                </form>
            </Modal>
        }
    } else {
        Html::default()
    };

    html! {
        <div class={classes!("flex", "flex-col", "gap-5")}>
            <div class={classes!("flex", "items-center", "justify-between", "gap-3", "flex-wrap")}>
                <h1 class={classes!("m-0", "text-xl", "font-semibold")}>{ t::TITLE }</h1>
                <div class={classes!("flex", "items-center", "gap-2")}>
                    <input
                        id="user-search"
                        type="search"
                        placeholder={t::SEARCH_PLACEHOLDER}
                        class={classes!("rounded-lg", "border", "border-[var(--border)]", "px-3", "py-2", "text-sm")}
                        value={(*search).clone()}
                        oninput={on_search_input}
                    />
                    <button type="button" class={classes!("btn-fluent-primary")} onclick={on_open_add}>
                        <i class={classes!("fas", "fa-user-plus", "mr-2")} aria-hidden="true"></i>
                        { t::ADD_USER }
                    </button>
                </div>
            </div>
            <section class={classes!("rounded-[var(--radius)]", "border", "border-[var(--border)]", "bg-[var(--surface)]", "overflow-x-auto")}>
                { table }
            </section>
            <Pager info={page_info} {on_prev} {on_next} />
            { add_dialog }
            { detail_dialog }
            { reset_dialog }
            { edit_dialog }
        </div>
    }
}
