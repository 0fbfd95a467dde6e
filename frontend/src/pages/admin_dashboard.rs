use gloo_timers::callback::Interval;
use reelgen_admin_shared::DashboardData;
use yew::prelude::*;

use crate::{
    api::fetch_dashboard_data,
    components::stats_card::StatsCard,
    config::DASHBOARD_REFRESH_MS,
    i18n::{current::dashboard as t, fill_one},
    utils::{format_datetime, log_error},
};

#[function_component(DashboardSection)]
pub fn dashboard_section() -> Html {
    let data = use_state(|| None::<DashboardData>);

    // Polls are not de-duplicated: whichever response lands last is shown.
    let refresh = {
        let data = data.clone();
        Callback::from(move |_: ()| {
            let data = data.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_dashboard_data().await {
                    Ok(next) => data.set(Some(next)),
                    Err(err) => log_error(&fill_one(t::FETCH_FAILED_LOG, &err)),
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            let interval = Interval::new(DASHBOARD_REFRESH_MS, move || refresh.emit(()));
            move || drop(interval)
        });
    }

    let (users, videos) = match &*data {
        Some(d) => (d.total_users.to_string(), d.total_videos.to_string()),
        None => ("-".to_string(), "-".to_string()),
    };

    html! {
        <div class={classes!("flex", "flex-col", "gap-5")}>
            <h1 class={classes!("m-0", "text-xl", "font-semibold")}>{ t::TITLE }</h1>
            <div class={classes!("grid", "gap-4", "md:grid-cols-2")}>
                <StatsCard icon="fa-users" label={t::TOTAL_USERS} value={users} />
                <StatsCard icon="fa-video" label={t::TOTAL_VIDEOS} value={videos} />
            </div>

            <div class={classes!("grid", "gap-4", "xl:grid-cols-[2fr_1fr]")}>
                <section class={classes!("rounded-[var(--radius)]", "border", "border-[var(--border)]", "bg-[var(--surface)]", "p-5")}>
                    <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::RECENT_ACTIVITY }</h2>
                    <ul class={classes!("activity-list", "m-0", "p-0", "list-none", "flex", "flex-col", "gap-2")}>
                        {
                            match &*data {
                                Some(d) if !d.recent_activity.is_empty() => d.recent_activity.iter().map(|item| html! {
                                    <li class={classes!("activity-item", "flex", "items-start", "gap-3", "text-sm")}>
                                        <span class={classes!("activity-icon", "w-6", "text-center", "text-[var(--primary)]")} aria-hidden="true">
                                            if let Some(icon) = item.activity_type.icon_class() {
                                                <i class={classes!("fas", icon)}></i>
                                            }
                                        </span>
                                        <div class={classes!("flex", "flex-col")}>
                                            <span>{ item.message.clone() }</span>
                                            <span class={classes!("text-xs", "text-[var(--muted)]")}>
                                                { format_datetime(&item.created_at) }
                                            </span>
                                        </div>
                                    </li>
                                }).collect::<Html>(),
                                Some(_) => html! {
                                    <li class={classes!("text-sm", "text-[var(--muted)]")}>{ t::NO_ACTIVITY }</li>
                                },
                                None => Html::default(),
                            }
                        }
                    </ul>
                </section>

                <section class={classes!("rounded-[var(--radius)]", "border", "border-[var(--border)]", "bg-[var(--surface)]", "p-5")}>
                    <h2 class={classes!("m-0", "mb-3", "text-lg", "font-semibold")}>{ t::SYSTEM_STATUS }</h2>
                    {
                        if let Some(d) = &*data {
                            let metrics = &d.system_metrics;
                            html! {
                                <dl class={classes!("m-0", "grid", "grid-cols-[auto_1fr]", "gap-x-4", "gap-y-2", "text-sm")}>
                                    <dt class={classes!("text-[var(--muted)]")}>{ t::CPU }</dt>
                                    <dd id="cpu-usage" class={classes!("m-0", "font-semibold")}>{ metrics.cpu_label() }</dd>
                                    <dt class={classes!("text-[var(--muted)]")}>{ t::MEMORY }</dt>
                                    <dd id="memory-usage" class={classes!("m-0", "font-semibold")}>{ metrics.memory_label() }</dd>
                                    <dt class={classes!("text-[var(--muted)]")}>{ t::DISK }</dt>
                                    <dd id="disk-usage" class={classes!("m-0", "font-semibold")}>{ metrics.disk_label() }</dd>
                                </dl>
                            }
                        } else {
                            Html::default()
                        }
                    }
                </section>
            </div>
        </div>
    }
}
