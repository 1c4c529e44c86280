/// One navigable screen in the single-page shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Dashboard,
    Signals,
    Radar,
    Account,
    Support,
    Admin,
    Login,
}

impl ViewId {
    pub const ALL: [Self; 7] = [
        Self::Dashboard,
        Self::Signals,
        Self::Radar,
        Self::Account,
        Self::Support,
        Self::Admin,
        Self::Login,
    ];

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Signals => "signals",
            Self::Radar => "radar",
            Self::Account => "account",
            Self::Support => "support",
            Self::Admin => "admin",
            Self::Login => "login",
        }
    }

    /// Address fragment for this view, e.g. `#/dashboard`.
    #[must_use]
    pub fn fragment(self) -> String {
        format!("#/{}", self.slug())
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Signals => "Signals",
            Self::Radar => "Radar",
            Self::Account => "Account",
            Self::Support => "Support",
            Self::Admin => "Admin",
            Self::Login => "Sign in",
        }
    }

    #[must_use]
    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Dashboard => "Control center",
            Self::Signals => "Ranking and execution",
            Self::Radar => "Market opportunities",
            Self::Account => "Profile and plan",
            Self::Support => "Help and contact",
            Self::Admin => "User management",
            Self::Login => "Access your account",
        }
    }
}

/// Parse an address fragment into a view identifier.
///
/// Accepts the `#/view`, `/view` and bare `view` spellings and ignores any
/// query suffix. Unknown fragments return `None`; the router treats that as
/// the home view rather than guessing.
#[must_use]
pub fn parse_fragment(fragment: &str) -> Option<ViewId> {
    let slug = fragment
        .trim_start_matches('#')
        .trim_start_matches('/')
        .split('?')
        .next()
        .unwrap_or_default();

    ViewId::ALL.into_iter().find(|view| view.slug() == slug)
}
