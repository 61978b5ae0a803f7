use crate::model::role::{ProfessionalType, Role};
use tokio::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub role: Role,
}

/// Server-side state behind one session cookie.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: String,
    pub identity: Option<Identity>,
    pub resolving_until: Instant,
    pub expires_at: Instant,
    pub pending_mutations: u32,
}

impl SessionRecord {
    pub fn new(id: String, resolving_until: Instant, expires_at: Instant) -> Self {
        Self {
            id,
            identity: None,
            resolving_until,
            expires_at,
            pending_mutations: 0,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub fn is_loading(&self, now: Instant) -> bool {
        self.pending_mutations > 0 || now < self.resolving_until
    }
}

/// What the gate and the views see of a session at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub loading: bool,
    pub identity: Option<Identity>,
    pub onboarding_complete: bool,
    pub professional_type: Option<ProfessionalType>,
}

impl SessionSnapshot {
    pub fn anonymous(loading: bool) -> Self {
        Self {
            loading,
            identity: None,
            onboarding_complete: false,
            professional_type: None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }
}
