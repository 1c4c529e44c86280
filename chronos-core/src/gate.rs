use crate::identity::Identity;
use crate::view::ViewId;

/// Visibility and enablement for a single navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewGate {
    pub visible: bool,
    pub enabled: bool,
}

impl ViewGate {
    const SHOWN: Self = Self {
        visible: true,
        enabled: true,
    };
    const HIDDEN: Self = Self {
        visible: false,
        enabled: false,
    };
}

/// Derived UI affordances for the current identity.
///
/// Never stored: recomputed on every identity change and every navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateDecision {
    pub dashboard: ViewGate,
    pub signals: ViewGate,
    pub radar: ViewGate,
    pub account: ViewGate,
    pub support: ViewGate,
    pub admin: ViewGate,
    pub login: ViewGate,
    /// Signals ranking is capped for guest/free tiers.
    pub signals_limited: bool,
    /// Radar feed is capped below plus/premium.
    pub radar_limited: bool,
    /// Banned accounts keep navigation but lose every mutating action.
    pub read_only: bool,
}

impl GateDecision {
    #[must_use]
    pub const fn gate(&self, view: ViewId) -> ViewGate {
        match view {
            ViewId::Dashboard => self.dashboard,
            ViewId::Signals => self.signals,
            ViewId::Radar => self.radar,
            ViewId::Account => self.account,
            ViewId::Support => self.support,
            ViewId::Admin => self.admin,
            ViewId::Login => self.login,
        }
    }

    /// Destinations offered in the side navigation, in display order.
    #[must_use]
    pub fn nav_items(&self) -> Vec<ViewId> {
        ViewId::ALL
            .into_iter()
            .filter(|view| self.gate(*view).visible)
            .collect()
    }
}

/// Map an identity (or its absence) to the set of enabled UI affordances.
#[must_use]
pub fn evaluate(identity: Option<&Identity>) -> GateDecision {
    let Some(identity) = identity else {
        return GateDecision {
            dashboard: ViewGate::SHOWN,
            signals: ViewGate::SHOWN,
            radar: ViewGate::SHOWN,
            account: ViewGate::HIDDEN,
            support: ViewGate::SHOWN,
            admin: ViewGate::HIDDEN,
            login: ViewGate::SHOWN,
            signals_limited: true,
            radar_limited: true,
            read_only: false,
        };
    };

    // Admin is hidden outright when not an admin, never merely disabled.
    let admin = if identity.is_admin {
        ViewGate::SHOWN
    } else {
        ViewGate::HIDDEN
    };

    GateDecision {
        dashboard: ViewGate::SHOWN,
        signals: ViewGate::SHOWN,
        radar: ViewGate::SHOWN,
        account: ViewGate::SHOWN,
        support: ViewGate::SHOWN,
        admin,
        login: ViewGate::HIDDEN,
        signals_limited: !identity.plan.is_paid(),
        radar_limited: !identity.plan.is_paid(),
        read_only: identity.is_read_only(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{AccountStatus, Plan};

    fn identity(plan: Plan, status: AccountStatus, is_admin: bool) -> Identity {
        Identity {
            email: String::from("a@x.com"),
            plan,
            status,
            trial: false,
            is_admin,
        }
    }

    #[test]
    fn evaluation_is_pure() {
        let id = identity(Plan::Plus, AccountStatus::Active, true);
        assert_eq!(evaluate(Some(&id)), evaluate(Some(&id)));
        assert_eq!(evaluate(None), evaluate(None));
    }

    #[test]
    fn absent_identity_hides_account_and_admin() {
        let gate = evaluate(None);
        assert!(!gate.account.visible);
        assert!(!gate.admin.visible);
        assert!(gate.dashboard.visible);
        assert!(gate.signals.visible && gate.signals_limited);
        assert!(gate.radar.visible && gate.radar_limited);
        assert!(gate.support.visible);
        assert!(gate.login.visible);
    }

    #[test]
    fn admin_gate_follows_the_admin_flag() {
        let admin = identity(Plan::Free, AccountStatus::Active, true);
        assert!(evaluate(Some(&admin)).admin.visible);

        let user = identity(Plan::Premium, AccountStatus::Active, false);
        let gate = evaluate(Some(&user));
        assert!(!gate.admin.visible);
        assert!(!gate.admin.enabled);
        assert!(!gate.nav_items().contains(&ViewId::Admin));
    }

    #[test]
    fn free_plan_sees_both_limited_banners() {
        let gate = evaluate(Some(&identity(Plan::Free, AccountStatus::Active, false)));
        assert!(gate.signals_limited);
        assert!(gate.radar_limited);
    }

    #[test]
    fn paid_plans_lift_the_banners() {
        for plan in [Plan::Plus, Plan::Premium] {
            let gate = evaluate(Some(&identity(plan, AccountStatus::Active, false)));
            assert!(!gate.signals_limited);
            assert!(!gate.radar_limited);
        }
    }

    #[test]
    fn banned_accounts_are_read_only_but_still_navigable() {
        let gate = evaluate(Some(&identity(Plan::Premium, AccountStatus::Banned, false)));
        assert!(gate.read_only);
        assert!(gate.dashboard.visible);
        assert!(gate.account.visible);
        assert!(!gate.signals_limited);
        assert!(!gate.radar_limited);
    }

    #[test]
    fn login_surface_only_shows_while_signed_out() {
        assert!(evaluate(None).login.visible);
        let id = identity(Plan::Free, AccountStatus::Active, false);
        assert!(!evaluate(Some(&id)).login.visible);
    }
}
