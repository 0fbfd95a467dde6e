use reelgen_admin_shared::navigation::Section;
use yew::prelude::*;

use crate::i18n::current::console as t;

#[derive(Properties, PartialEq)]
pub struct AdminNavProps {
    pub active: Section,
    /// Receives the clicked link's section key.
    pub on_select: Callback<&'static str>,
}

#[function_component(AdminNav)]
pub fn admin_nav(props: &AdminNavProps) -> Html {
    html! {
        <nav
            class={classes!(
                "admin-nav",
                "flex",
                "flex-col",
                "gap-1",
                "w-56",
                "shrink-0",
                "border-r",
                "border-[var(--border)]",
                "bg-[var(--surface)]",
                "p-4"
            )}
            aria-label={t::NAV_ARIA}
        >
            <div class={classes!("mb-4", "text-lg", "font-bold", "tracking-tight")}>{ t::BRAND_NAME }</div>
            { for Section::ALL.into_iter().map(|section| {
                let is_active = section == props.active;
                let onclick = {
                    let on_select = props.on_select.clone();
                    let key = section.key();
                    Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        on_select.emit(key);
                    })
                };
                html! {
                    <a
                        href={format!("#{}", section.key())}
                        data-section={section.key()}
                        class={classes!(
                            "nav-link",
                            is_active.then_some("active"),
                            "flex",
                            "items-center",
                            "gap-3",
                            "rounded-lg",
                            "px-3",
                            "py-2",
                            "text-sm",
                            "transition-colors",
                            if is_active {
                                classes!("bg-[var(--primary)]", "text-white")
                            } else {
                                classes!("hover:bg-[var(--surface-alt)]")
                            }
                        )}
                        aria-current={is_active.then_some("page")}
                        {onclick}
                    >
                        <i class={classes!("fas", section.icon_class())} aria-hidden="true"></i>
                        { section.label() }
                    </a>
                }
            }) }
        </nav>
    }
}
