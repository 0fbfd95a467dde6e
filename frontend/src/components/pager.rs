use reelgen_admin_shared::listing::PageInfo;
use yew::prelude::*;

use crate::i18n::current::pager as t;

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    /// Page/total as last reported by the server; `None` before the first
    /// response arrives.
    pub info: Option<PageInfo>,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    let Some(info) = props.info else {
        return Html::default();
    };

    let prev_onclick = {
        let on_prev = props.on_prev.clone();
        Callback::from(move |_: MouseEvent| on_prev.emit(()))
    };
    let next_onclick = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    let btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.75rem]",
        "h-10",
        "px-3",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "text-sm",
        "font-semibold",
        "transition-all",
        "duration-200",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class={classes!("pagination", "flex", "items-center", "gap-3")} aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class={btn_classes.clone()}
                disabled={info.previous_disabled()}
                onclick={prev_onclick}
                aria-label={t::PREV}
            >
                <i class={classes!("fas", "fa-chevron-left")} aria-hidden="true"></i>
            </button>
            <span class={classes!("page-info", "text-sm", "text-[var(--muted)]")}>{ info.label() }</span>
            <button
                type="button"
                class={btn_classes}
                disabled={info.next_disabled()}
                onclick={next_onclick}
                aria-label={t::NEXT}
            >
                <i class={classes!("fas", "fa-chevron-right")} aria-hidden="true"></i>
            </button>
        </nav>
    }
}
