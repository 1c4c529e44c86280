#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod routing;
pub mod view;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <HashRouter>
            <AppInner />
        </HashRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let session = crate::session::use_session_state();
    bootstrap::use_bootstrap(&session);

    let navigator = use_navigator();
    let route = use_route::<Route>();

    routing::use_gate_guard(&session, navigator.clone(), route.clone());
    routing::use_sidebar_autoclose(&session, route.clone());

    view::render_app(&session, route.as_ref(), navigator)
}
