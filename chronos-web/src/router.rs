use chronos_core::{ViewId, parse_fragment};
use yew_router::prelude::*;

/// Address-fragment routes; one per navigable view plus home and not-found.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/signals")]
    Signals,
    #[at("/radar")]
    Radar,
    #[at("/account")]
    Account,
    #[at("/support")]
    Support,
    #[at("/admin")]
    Admin,
    #[at("/login")]
    Login,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_view(view: ViewId) -> Self {
        match view {
            ViewId::Dashboard => Self::Dashboard,
            ViewId::Signals => Self::Signals,
            ViewId::Radar => Self::Radar,
            ViewId::Account => Self::Account,
            ViewId::Support => Self::Support,
            ViewId::Admin => Self::Admin,
            ViewId::Login => Self::Login,
        }
    }

    /// The view a route lands on. Home and unknown fragments both resolve
    /// to the dashboard rather than guessing.
    #[must_use]
    pub const fn to_view(&self) -> ViewId {
        match self {
            Self::Home | Self::Dashboard | Self::NotFound => ViewId::Dashboard,
            Self::Signals => ViewId::Signals,
            Self::Radar => ViewId::Radar,
            Self::Account => ViewId::Account,
            Self::Support => ViewId::Support,
            Self::Admin => ViewId::Admin,
            Self::Login => ViewId::Login,
        }
    }
}

/// Salvage an address fragment the route table did not match. The original
/// hash scheme tolerated loose spellings like `#signals`; anything still
/// unrecognized lands on the dashboard.
#[must_use]
pub fn recover_view(fragment: &str) -> ViewId {
    parse_fragment(fragment).unwrap_or(ViewId::Dashboard)
}
