//! Access decision for protected pages.
//!
//! [`evaluate`] is a pure function of the session snapshot and the target
//! route's requirement. The HTTP layer in `middleware::gate` turns its
//! [`GateDecision`] into a placeholder, a redirect or the page itself.

use shared::model::Role;

pub const CLIENT_SIGN_IN: &str = "/auth";
pub const PROFESSIONAL_SIGN_IN: &str = "/auth?role=professional";
pub const CLIENT_ONBOARDING: &str = "/onboarding";
pub const PROFESSIONAL_ONBOARDING: &str = "/professional/onboarding";
pub const CLIENT_DASHBOARD: &str = "/dashboard";
pub const PROFESSIONAL_DASHBOARD: &str = "/professional/dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFamily {
    Client,
    Professional,
}

impl RouteFamily {
    pub fn sign_in_path(self) -> &'static str {
        match self {
            RouteFamily::Client => CLIENT_SIGN_IN,
            RouteFamily::Professional => PROFESSIONAL_SIGN_IN,
        }
    }

    /// Client pages accept any signed-in role.
    pub fn admits(self, role: Role) -> bool {
        match self {
            RouteFamily::Client => true,
            RouteFamily::Professional => role == Role::Professional,
        }
    }
}

/// Declared statically by every protected route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRequirement {
    pub family: RouteFamily,
    pub requires_onboarding: bool,
}

impl RouteRequirement {
    pub const CLIENT_ONBOARDED: Self = Self {
        family: RouteFamily::Client,
        requires_onboarding: true,
    };
    pub const CLIENT_SIGNED_IN: Self = Self {
        family: RouteFamily::Client,
        requires_onboarding: false,
    };
    pub const PROFESSIONAL_ONBOARDED: Self = Self {
        family: RouteFamily::Professional,
        requires_onboarding: true,
    };
    pub const PROFESSIONAL_SIGNED_IN: Self = Self {
        family: RouteFamily::Professional,
        requires_onboarding: false,
    };
}

#[derive(Debug, Clone, Copy)]
pub struct GateInput<'a> {
    pub loading: bool,
    pub role: Option<Role>,
    pub onboarding_complete: bool,
    pub requirement: RouteRequirement,
    pub path: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Identity is still resolving; show a neutral placeholder.
    Loading,
    Redirect(&'static str),
    Render,
}

pub fn evaluate(input: GateInput<'_>) -> GateDecision {
    let family = input.requirement.family;

    if input.loading {
        return GateDecision::Loading;
    }

    let Some(role) = input.role else {
        return GateDecision::Redirect(family.sign_in_path());
    };

    if !family.admits(role) {
        return GateDecision::Redirect(PROFESSIONAL_SIGN_IN);
    }

    let onboarding_path = landing_path(role, false);
    if input.requirement.requires_onboarding
        && !input.onboarding_complete
        && input.path != onboarding_path
    {
        return GateDecision::Redirect(onboarding_path);
    }

    GateDecision::Render
}

/// Where a signed-in user lands when they reach a sign-in page. With
/// onboarding pending this is the onboarding page for their role.
pub fn landing_path(role: Role, onboarding_complete: bool) -> &'static str {
    match (role, onboarding_complete) {
        (Role::Client, true) => CLIENT_DASHBOARD,
        (Role::Client, false) => CLIENT_ONBOARDING,
        (Role::Professional, true) => PROFESSIONAL_DASHBOARD,
        (Role::Professional, false) => PROFESSIONAL_ONBOARDING,
    }
}
