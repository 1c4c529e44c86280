pub mod handlers;

pub use handlers::masked_token;
#[cfg(target_arch = "wasm32")]
pub use handlers::AppHandlers;

#[cfg(target_arch = "wasm32")]
use chronos_core::view::ViewId;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(target_arch = "wasm32")]
use crate::components::header::Header;
#[cfg(target_arch = "wasm32")]
use crate::components::sidebar::Sidebar;
#[cfg(target_arch = "wasm32")]
use crate::pages;
#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::session::SessionState;

/// Compose the shell for the active view. The gate is recomputed here on
/// every render; a hidden destination renders as the dashboard while the
/// guard hook rewrites the address.
#[cfg(target_arch = "wasm32")]
pub fn render_app(
    session: &SessionState,
    route: Option<&Route>,
    navigator: Option<Navigator>,
) -> Html {
    let handlers = AppHandlers::new(session, navigator);
    let gate = session.gate();

    let requested = match route {
        Some(Route::NotFound) | None => {
            crate::router::recover_view(&crate::dom::current_fragment())
        }
        Some(route) => route.to_view(),
    };
    let view = if gate.gate(requested).visible {
        requested
    } else {
        ViewId::Dashboard
    };

    let identity = (*session.identity).clone();
    let pill_label = identity
        .as_ref()
        .map_or_else(|| String::from("Guest"), |id| id.pill_label());
    let pill_tone = identity
        .as_ref()
        .map_or("tone-ok", |id| id.tone().css_class());

    let main_view = match view {
        ViewId::Dashboard => html! {
            <pages::dashboard::DashboardPage
                signed_in={identity.is_some()}
                on_navigate={handlers.navigate.clone()}
            />
        },
        ViewId::Signals => html! {
            <pages::signals::SignalsPage limited={gate.signals_limited} />
        },
        ViewId::Radar => html! {
            <pages::radar::RadarPage limited={gate.radar_limited} />
        },
        ViewId::Account => html! {
            <pages::account::AccountPage
                identity={identity.clone()}
                toast={(*session.account_toast).clone()}
                read_only={gate.read_only}
                on_refresh={handlers.refresh_profile.clone()}
                on_copy_token={handlers.copy_token.clone()}
                on_logout={handlers.logout.clone()}
            />
        },
        ViewId::Support => html! {
            <pages::support::SupportPage
                channel={(*session.support).clone()}
                on_resolve={handlers.resolve_support.clone()}
                on_open_docs={handlers.open_docs.clone()}
            />
        },
        ViewId::Admin => html! {
            <pages::admin::AdminPage
                toast={(*session.admin_toast).clone()}
                output={(*session.admin_output).clone()}
                target={(*session.admin_target).clone()}
                read_only={gate.read_only}
                on_lookup={handlers.admin_lookup.clone()}
                on_activate={handlers.admin_activate.clone()}
                on_ban={handlers.admin_ban.clone()}
                on_unban={handlers.admin_unban.clone()}
            />
        },
        ViewId::Login => html! {
            <pages::login::LoginPage
                toast={(*session.auth_toast).clone()}
                on_login={handlers.login.clone()}
                on_register={handlers.register.clone()}
            />
        },
    };

    html! {
        <div class="shell">
            <Sidebar
                items={gate.nav_items()}
                active={view}
                open={*session.sidebar_open}
                signed_in={identity.is_some()}
                on_logout={handlers.logout.clone()}
                on_close={handlers.toggle_sidebar.clone()}
            />
            <main id="main" role="main" class="content">
                <Header
                    title={view.title()}
                    subtitle={view.subtitle()}
                    pill_label={pill_label}
                    pill_tone={pill_tone}
                    api_live={*session.api_live}
                    on_menu={handlers.toggle_sidebar.clone()}
                    on_open_docs={handlers.open_docs.clone()}
                />
                { main_view }
            </main>
        </div>
    }
}
