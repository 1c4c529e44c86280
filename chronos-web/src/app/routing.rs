#[cfg(any(target_arch = "wasm32", test))]
use chronos_core::gate::GateDecision;
#[cfg(any(target_arch = "wasm32", test))]
use chronos_core::view::ViewId;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use crate::session::SessionState;

/// Where a navigation attempt must be redirected, if anywhere.
///
/// Selecting a hidden view is not an error: the router silently lands on the
/// dashboard instead.
#[cfg(any(target_arch = "wasm32", test))]
fn redirect_for(gate: &GateDecision, destination: ViewId) -> Option<ViewId> {
    if gate.gate(destination).visible {
        None
    } else {
        Some(ViewId::Dashboard)
    }
}

/// Re-checks the gate on every navigation and identity change, replacing
/// hidden destinations with the dashboard without touching history depth.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_gate_guard(
    session: &SessionState,
    navigator: Option<Navigator>,
    route: Option<Route>,
) {
    let identity = session.identity.clone();
    use_effect_with((route, (*identity).clone()), move |(route, identity)| {
        let gate = chronos_core::gate::evaluate(identity.as_ref());
        if let (Some(nav), Some(route)) = (navigator.as_ref(), route.as_ref()) {
            if let Some(target) = redirect_for(&gate, route.to_view()) {
                nav.replace(&Route::from_view(target));
            }
        }
    });
}

/// Collapse the navigation overlay after a transition on narrow viewports.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sidebar_autoclose(session: &SessionState, route: Option<Route>) {
    let sidebar_open = session.sidebar_open.clone();
    use_effect_with(route, move |_| {
        if *sidebar_open && crate::dom::is_narrow_viewport() {
            sidebar_open.set(false);
        }
    });
}
