use reelgen_admin_shared::{
    dialog::{Dialog, DialogId},
    endpoints,
    listing::{ListingState, PageInfo, ReloadEpoch, VideoFilter},
    VideoRow, VideosPage,
};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::{
    api::{delete_video, fetch_videos},
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::Modal,
        pager::Pager,
    },
    config::api_url,
    i18n::{
        current::{common as common_text, videos as t},
        fill_one,
    },
    modal_context::{show_confirmation, show_info, use_modal, ModalAction},
    utils::{download_via_anchor, format_date, log_error},
};

#[derive(Properties, PartialEq)]
pub struct VideosSectionProps {
    pub reload_epoch: ReloadEpoch,
}

fn video_row(video: &VideoRow, on_view: &Callback<i64>, on_delete: &Callback<i64>) -> Html {
    let id = video.id;
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
            <td class={classes!("px-3", "py-2")}>{ video.display_title().to_string() }</td>
            <td class={classes!("px-3", "py-2")}>{ video.user_name.clone() }</td>
            <td class={classes!("px-3", "py-2")}>{ format_date(&video.created_at) }</td>
            <td class={classes!("px-3", "py-2")}>{ video.duration_label() }</td>
            <td class={classes!("px-3", "py-2")}>{ video.music_style_label().to_string() }</td>
            <td class={classes!("px-3", "py-2", "whitespace-nowrap")}>
                <button type="button" class={classes!("btn-fluent-primary", "btn-sm", "view-video", "mr-2")} onclick={view}>
                    { common_text::VIEW }
                </button>
                <button type="button" class={classes!("btn-fluent-danger", "btn-sm", "delete-video")} onclick={delete}>
                    { common_text::DELETE }
                </button>
            </td>
        </tr>
    }
}

#[function_component(VideosSection)]
pub fn videos_section(props: &VideosSectionProps) -> Html {
    let modal = use_modal();
    let listing = use_state(ListingState::<VideoFilter>::default);
    let result = use_state(|| None::<VideosPage>);
    // What the select shows. `listing.filter` only moves once a page loads.
    let filter = use_state(VideoFilter::default);

    let load = {
        let listing = listing.clone();
        let result = result.clone();
        Callback::from(move |state: ListingState<VideoFilter>| {
            let listing = listing.clone();
            let result = result.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_videos(&state).await {
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

    let reload_from_start = {
        let load = load.clone();
        let filter = filter.clone();
        Callback::from(move |_: ()| {
            filter.set(VideoFilter::default());
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

    let on_filter_change = {
        let load = load.clone();
        let listing = listing.clone();
        let filter = filter.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<HtmlSelectElement>() {
                let chosen = VideoFilter::from_query(&target.value()).unwrap_or_default();
                filter.set(chosen);
                load.emit(listing.with_filter(chosen));
            }
        })
    };

    let on_prev = {
        let load = load.clone();
        let listing = listing.clone();
        let filter = filter.clone();
        Callback::from(move |_: ()| {
            if let Some(previous) = listing.filtered_by(*filter).previous() {
                load.emit(previous);
            }
        })
    };
    let on_next = {
        let load = load.clone();
        let listing = listing.clone();
        let filter = filter.clone();
        Callback::from(move |_: ()| load.emit(listing.filtered_by(*filter).next()))
    };

    let on_view = {
        let modal = modal.clone();
        Callback::from(move |video_id: i64| {
            modal.dispatch(ModalAction::Open(Dialog::VideoDetail {
                video_id,
            }))
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
                        match delete_video(id).await {
                            Ok(_) => {
                                // Back to page 1 with the default filter.
                                reload_from_start.emit(());
                                show_info(&modal, common_text::SUCCESS, t::DELETED);
                            },
                            Err(err) => {
                                log_error(&format!("Error deleting video: {}", err));
                                show_info(&modal, common_text::ERROR, err.prefixed());
                            },
                        }
                    });
                })
            };
            show_confirmation(&modal, t::DELETE_TITLE, fill_one(t::DELETE_CONFIRM_TEMPLATE, id), on_confirm);
        })
    };

    let table = match &*result {
        None => html! { <LoadingSpinner size={SpinnerSize::Small} /> },
        Some(page) if page.videos.is_empty() => html! {
            <p class={classes!("m-0", "p-4", "text-sm", "text-[var(--muted)]")}>{ t::EMPTY }</p>
        },
        Some(page) => html! {
            <table class={classes!("w-full", "text-sm", "text-left")}>
                <thead class={classes!("text-xs", "uppercase", "tracking-[0.06em]", "text-[var(--muted)]")}>
                    <tr>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_TITLE }</th>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_USER }</th>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_CREATED }</th>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_DURATION }</th>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_MUSIC }</th>
                        <th class={classes!("px-3", "py-2")}>{ t::COL_ACTIONS }</th>
                    </tr>
                </thead>
                <tbody>
                    { for page.videos.iter().map(|video| video_row(video, &on_view, &on_delete)) }
                </tbody>
            </table>
        },
    };
    let page_info = result
        .as_ref()
        .map(|page| PageInfo::from_reported(page.page, page.total));

    let detail_dialog = match modal.dialogs.get(DialogId::VideoDetail) {
        Some(Dialog::VideoDetail {
            video_id,
        }) => {
            let video_id = *video_id;
            let on_download = Callback::from(move |_: MouseEvent| {
                download_via_anchor(
                    &endpoints::video_stream(video_id),
                    &endpoints::video_download_name(video_id),
                )
            });
            html! {
                <Modal
                    id={DialogId::VideoDetail}
                    title={t::DETAIL_TITLE}
                    footer={html! {
                        <button type="button" class={classes!("btn-fluent-primary")} onclick={on_download}>
                            <i class={classes!("fas", "fa-download", "mr-2")} aria-hidden="true"></i>
                            { t::DOWNLOAD }
                        </button>
                    }}
                >
                    <div class="video-preview">
                        // New id, new element: patching `src` does not reload the player.
                        <video key={video_id} controls=true width="100%">
                            <source src={api_url(&endpoints::video_stream(video_id))} type="video/mp4" />
                            { t::UNSUPPORTED }
                        </video>
                    </div>
                </Modal>
            }
        },
        _ => Html::default(),
    };

    html! {
        <div class={classes!("flex", "flex-col", "gap-5")}>
            <div class={classes!("flex", "items-center", "justify-between", "gap-3", "flex-wrap")}>
                <h1 class={classes!("m-0", "text-xl", "font-semibold")}>{ t::TITLE }</h1>
                <select
                    id="video-filter"
                    aria-label={t::FILTER_ARIA}
                    class={classes!("rounded-lg", "border", "border-[var(--border)]", "px-3", "py-2", "text-sm")}
                    onchange={on_filter_change}
                >
                    { for VideoFilter::ALL.into_iter().map(|option| html! {
                        <option value={option.as_query()} selected={*filter == option}>
                            { option.label() }
                        </option>
                    }) }
                </select>
            </div>
            <section class={classes!("rounded-[var(--radius)]", "border", "border-[var(--border)]", "bg-[var(--surface)]", "overflow-x-auto")}>
                { table }
            </section>
            <Pager info={page_info} {on_prev} {on_next} />
            { detail_dialog }
        </div>
    }
}
