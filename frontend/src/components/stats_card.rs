use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsCardProps {
    /// Font Awesome icon class, e.g. `fa-users`.
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    html! {
        <div
            class={classes!(
                "stats-card",
                "flex",
                "items-center",
                "gap-4",
                "rounded-[var(--radius)]",
                "border",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "p-5"
            )}
            role="status"
        >
            <span class={classes!("stats-card-icon", "text-2xl", "text-[var(--primary)]")} aria-hidden="true">
                <i class={classes!("fas", props.icon)}></i>
            </span>
            <div class={classes!("flex", "flex-col")}>
                <strong class={classes!("stats-card-value", "text-2xl")}>{ props.value.clone() }</strong>
                <span class={classes!("text-sm", "text-[var(--muted)]")}>{ props.label }</span>
            </div>
        </div>
    }
}
