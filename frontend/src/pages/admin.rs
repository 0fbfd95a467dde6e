use reelgen_admin_shared::{listing::ReloadEpoch, navigation::Section};
use yew::prelude::*;

use crate::{
    components::{admin_nav::AdminNav, modal::ModalHost},
    pages::{
        admin_dashboard::DashboardSection, admin_settings::SettingsSection,
        admin_users::UsersSection, admin_videos::VideosSection,
    },
};

/// The console shell: navigation plus the four sections.
///
/// Every section stays mounted and only the active one is visible, so a
/// directory keeps its page and search while the operator looks elsewhere
/// and the dashboard keeps polling.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let active = use_state(Section::default);
    // Bumped after "clear all data"; both directories reload from page 1.
    let reload_epoch = use_state(ReloadEpoch::default);

    let on_select = {
        let active = active.clone();
        Callback::from(move |key: &'static str| active.set(active.activate(key)))
    };

    let on_data_cleared = {
        let reload_epoch = reload_epoch.clone();
        Callback::from(move |_: ()| reload_epoch.set(reload_epoch.bumped()))
    };

    let panel = |section: Section, body: Html| {
        let visible = *active == section;
        html! {
            <section
                id={section.key()}
                class={classes!("admin-section", visible.then_some("active"), (!visible).then_some("hidden"))}
                hidden={!visible}
            >
                { body }
            </section>
        }
    };

    html! {
        <div class={classes!("flex", "bg-[var(--bg)]")} style="min-height: 100vh; min-height: 100svh;">
            <AdminNav active={*active} {on_select} />
            <main class={classes!("flex-1", "min-w-0", "p-6")}>
                { panel(Section::Dashboard, html! { <DashboardSection /> }) }
                { panel(Section::Users, html! { <UsersSection reload_epoch={*reload_epoch} /> }) }
                { panel(Section::Videos, html! { <VideosSection reload_epoch={*reload_epoch} /> }) }
                { panel(Section::Settings, html! { <SettingsSection {on_data_cleared} /> }) }
            </main>
            <ModalHost />
        </div>
    }
}
