use crate::{
    abstract_trait::{DynAccountRepository, DynHashing, DynSessionRepository, SessionStoreTrait},
    domain::{
        requests::{OnboardingRequest, ProfessionalOnboardingRequest, SignInRequest, SignUpRequest},
        responses::{ApiResponse, SessionResponse},
    },
    errors::ServiceError,
    model::{Identity, NewAccount, ProfessionalProfile, Role, SessionRecord, SessionSnapshot},
    utils::{Metrics, MockLatency, Operation},
};
use async_trait::async_trait;
use tokio::{runtime::Handle, time::Instant};
use tracing::{debug, info, warn};

/// Holds one in-flight mutation open on a session. Settles it on drop if the
/// owning future is cancelled before [`MutationGuard::finish`] runs.
struct MutationGuard {
    sessions: DynSessionRepository,
    session_id: Option<String>,
}

impl MutationGuard {
    async fn finish(mut self) {
        if let Some(session_id) = self.session_id.take() {
            self.sessions.end_mutation(&session_id).await;
        }
    }
}

impl Drop for MutationGuard {
    fn drop(&mut self) {
        let Some(session_id) = self.session_id.take() else {
            return;
        };

        debug!("Mutation on session {session_id} cancelled, settling");
        let sessions = self.sessions.clone();
        if let Ok(handle) = Handle::try_current() {
            handle.spawn(async move { sessions.end_mutation(&session_id).await });
        }
    }
}

pub struct SessionStore {
    sessions: DynSessionRepository,
    accounts: DynAccountRepository,
    hashing: DynHashing,
    latency: MockLatency,
    metrics: Metrics,
    signup_completes_onboarding: bool,
}

pub struct SessionStoreDeps {
    pub sessions: DynSessionRepository,
    pub accounts: DynAccountRepository,
    pub hashing: DynHashing,
    pub latency: MockLatency,
    pub metrics: Metrics,
    pub signup_completes_onboarding: bool,
}

impl SessionStore {
    pub fn new(deps: SessionStoreDeps) -> Self {
        let SessionStoreDeps {
            sessions,
            accounts,
            hashing,
            latency,
            metrics,
            signup_completes_onboarding,
        } = deps;

        Self {
            sessions,
            accounts,
            hashing,
            latency,
            metrics,
            signup_completes_onboarding,
        }
    }

    async fn begin_mutation(&self, session_id: &str) -> Result<MutationGuard, ServiceError> {
        self.sessions.begin_mutation(session_id).await?;
        Ok(MutationGuard {
            sessions: self.sessions.clone(),
            session_id: Some(session_id.to_string()),
        })
    }

    async fn current_identity(&self, session_id: &str) -> Result<Identity, ServiceError> {
        self.sessions
            .find(session_id)
            .await
            .and_then(|record| record.identity)
            .ok_or(ServiceError::Unauthenticated)
    }

    async fn respond(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError> {
        let snapshot = self.snapshot(session_id).await;
        Ok(ApiResponse::success(message, SessionResponse::from(snapshot)))
    }

    async fn do_sign_in(
        &self,
        session_id: &str,
        request: &SignInRequest,
    ) -> Result<(), ServiceError> {
        self.latency.simulate("sign in").await?;

        let account = self
            .accounts
            .find_by_email(&request.email)
            .await
            .ok_or_else(|| {
                warn!("Sign-in attempt for unknown email {}", request.email);
                ServiceError::InvalidCredentials
            })?;

        self.hashing
            .compare_password(&account.password_hash, &request.password)
            .await?;

        self.sessions
            .set_identity(
                session_id,
                Some(Identity {
                    id: account.id,
                    email: account.email,
                    role: account.role,
                }),
            )
            .await?;

        Ok(())
    }

    async fn do_sign_up(
        &self,
        session_id: &str,
        request: &SignUpRequest,
    ) -> Result<(), ServiceError> {
        let role = request.role();
        let professional_type = match role {
            Role::Professional => Some(request.professional_type.ok_or_else(|| {
                ServiceError::Validation(vec!["Please select a professional type".to_string()])
            })?),
            Role::Client => None,
        };

        self.latency.simulate("sign up").await?;

        let password_hash = self.hashing.hash_password(&request.password).await?;

        let account = self
            .accounts
            .create(NewAccount {
                email: request.email.trim().to_string(),
                password_hash,
                role,
                professional_type,
                onboarding_complete: self.signup_completes_onboarding,
            })
            .await?;

        self.sessions
            .set_identity(
                session_id,
                Some(Identity {
                    id: account.id,
                    email: account.email,
                    role: account.role,
                }),
            )
            .await?;

        Ok(())
    }

    async fn do_sign_out(&self, session_id: &str) -> Result<(), ServiceError> {
        self.latency.simulate("sign out").await?;
        self.sessions.set_identity(session_id, None).await?;
        Ok(())
    }

    async fn do_complete_onboarding(
        &self,
        session_id: &str,
        request: &OnboardingRequest,
    ) -> Result<(), ServiceError> {
        let identity = self.current_identity(session_id).await?;
        if identity.role != Role::Client {
            return Err(ServiceError::Forbidden(
                "Business onboarding is only available to clients".to_string(),
            ));
        }

        self.latency.simulate("complete onboarding").await?;

        self.accounts
            .complete_client_onboarding(&identity.id, request.structure)
            .await?;

        Ok(())
    }

    async fn do_complete_professional_onboarding(
        &self,
        session_id: &str,
        request: &ProfessionalOnboardingRequest,
    ) -> Result<(), ServiceError> {
        let identity = self.current_identity(session_id).await?;
        if identity.role != Role::Professional {
            return Err(ServiceError::Forbidden(
                "Professional onboarding is only available to professionals".to_string(),
            ));
        }

        self.latency.simulate("complete professional onboarding").await?;

        self.accounts
            .complete_professional_onboarding(
                &identity.id,
                ProfessionalProfile {
                    full_name: request.full_name.trim().to_string(),
                    license_number: request.license_number.trim().to_string(),
                },
            )
            .await?;

        Ok(())
    }
}

#[async_trait]
impl SessionStoreTrait for SessionStore {
    async fn open_session(&self) -> SessionRecord {
        self.sessions.open(self.latency.identity_resolve()).await
    }

    async fn find_session(&self, session_id: &str) -> Option<SessionRecord> {
        self.sessions.find(session_id).await
    }

    async fn snapshot(&self, session_id: &str) -> SessionSnapshot {
        let Some(record) = self.sessions.find(session_id).await else {
            return SessionSnapshot::anonymous(false);
        };

        let loading = record.is_loading(Instant::now());

        let Some(identity) = record.identity else {
            return SessionSnapshot::anonymous(loading);
        };

        let account = self.accounts.find_by_id(&identity.id).await;

        SessionSnapshot {
            loading,
            onboarding_complete: account.as_ref().is_some_and(|a| a.onboarding_complete),
            professional_type: account.and_then(|a| a.professional_type),
            identity: Some(identity),
        }
    }

    async fn sign_in(
        &self,
        session_id: &str,
        request: &SignInRequest,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError> {
        info!("🔐 Signing in {}", request.email);
        let started = Instant::now();

        let guard = self.begin_mutation(session_id).await?;
        let result = self.do_sign_in(session_id, request).await;
        guard.finish().await;

        self.metrics.observe(Operation::SignIn, started, &result);
        result?;

        self.respond(session_id, "Signed in successfully").await
    }

    async fn sign_up(
        &self,
        session_id: &str,
        request: &SignUpRequest,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError> {
        info!("📝 Signing up {} as {}", request.email, request.role());
        let started = Instant::now();

        let guard = self.begin_mutation(session_id).await?;
        let result = self.do_sign_up(session_id, request).await;
        guard.finish().await;

        self.metrics.observe(Operation::SignUp, started, &result);
        result?;

        self.respond(session_id, "Account created successfully").await
    }

    async fn sign_out(
        &self,
        session_id: &str,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError> {
        info!("🚪 Signing out session {session_id}");
        let started = Instant::now();

        let guard = self.begin_mutation(session_id).await?;
        let result = self.do_sign_out(session_id).await;
        guard.finish().await;

        self.metrics.observe(Operation::SignOut, started, &result);
        result?;

        self.respond(session_id, "Signed out successfully").await
    }

    async fn complete_onboarding(
        &self,
        session_id: &str,
        request: &OnboardingRequest,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError> {
        info!("🏢 Completing onboarding with {}", request.structure.title());
        let started = Instant::now();

        let guard = self.begin_mutation(session_id).await?;
        let result = self.do_complete_onboarding(session_id, request).await;
        guard.finish().await;

        self.metrics.observe(Operation::CompleteOnboarding, started, &result);
        result?;

        self.respond(session_id, "Onboarding completed").await
    }

    async fn complete_professional_onboarding(
        &self,
        session_id: &str,
        request: &ProfessionalOnboardingRequest,
    ) -> Result<ApiResponse<SessionResponse>, ServiceError> {
        info!("🎓 Completing professional onboarding for {}", request.full_name);
        let started = Instant::now();

        let guard = self.begin_mutation(session_id).await?;
        let result = self
            .do_complete_professional_onboarding(session_id, request)
            .await;
        guard.finish().await;

        self.metrics.observe(Operation::CompleteProfessionalOnboarding, started, &result);
        result?;

        self.respond(session_id, "Professional profile completed").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{AccountRepositoryTrait, DynAccountRepository},
        config::{Hashing, MockConfig, SESSION_TTL},
        model::{BusinessStructure, ProfessionalType},
        repository::{AccountRepository, SessionRepository, seed},
    };
    use std::{sync::Arc, time::Duration};

    async fn store_with(mock: MockConfig, signup_completes_onboarding: bool) -> SessionStore {
        let hashing: DynHashing = Arc::new(Hashing::new());
        let accounts: DynAccountRepository = Arc::new(AccountRepository::with_accounts(
            seed::demo_accounts(&hashing).await.unwrap(),
        ));

        SessionStore::new(SessionStoreDeps {
            sessions: Arc::new(SessionRepository::new(SESSION_TTL)),
            accounts,
            hashing,
            latency: MockLatency::new(mock),
            metrics: Metrics::new(),
            signup_completes_onboarding,
        })
    }

    async fn store() -> SessionStore {
        store_with(MockConfig::instant(), true).await
    }

    fn sign_in_request(email: &str, password: &str) -> SignInRequest {
        SignInRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    fn sign_up_request(
        email: &str,
        role: Option<Role>,
        professional_type: Option<ProfessionalType>,
    ) -> SignUpRequest {
        SignUpRequest {
            email: email.into(),
            password: "secret123".into(),
            role,
            professional_type,
        }
    }

    #[tokio::test]
    async fn fresh_session_is_anonymous() {
        let store = store().await;
        let session = store.open_session().await;

        let snapshot = store.snapshot(&session.id).await;
        assert!(!snapshot.loading);
        assert!(snapshot.identity.is_none());
        assert!(!snapshot.onboarding_complete);
    }

    #[tokio::test]
    async fn unknown_session_reads_as_anonymous() {
        let store = store().await;
        assert_eq!(
            store.snapshot("missing").await,
            SessionSnapshot::anonymous(false)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn session_is_loading_until_identity_resolves() {
        let store = store_with(MockConfig::default(), true).await;
        let session = store.open_session().await;

        assert!(store.snapshot(&session.id).await.loading);

        tokio::time::advance(Duration::from_millis(1001)).await;
        assert!(!store.snapshot(&session.id).await.loading);
    }

    #[tokio::test(start_paused = true)]
    async fn session_is_loading_while_sign_in_is_in_flight() {
        let store = Arc::new(
            store_with(
                MockConfig {
                    identity_resolve: Duration::ZERO,
                    ..MockConfig::default()
                },
                true,
            )
            .await,
        );
        let session = store.open_session().await;

        let in_flight = {
            let store = store.clone();
            let id = session.id.clone();
            tokio::spawn(async move {
                store
                    .sign_in(&id, &sign_in_request("client@example.com", "password123"))
                    .await
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        let during = store.snapshot(&session.id).await;
        assert!(during.loading);
        assert!(during.identity.is_none());

        in_flight.await.unwrap().unwrap();
        let after = store.snapshot(&session.id).await;
        assert!(!after.loading);
        assert_eq!(after.role(), Some(Role::Client));
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_sign_in_does_not_leave_the_session_loading() {
        let store = store_with(
            MockConfig {
                identity_resolve: Duration::ZERO,
                ..MockConfig::default()
            },
            true,
        )
        .await;
        let session = store.open_session().await;

        let cancelled = tokio::time::timeout(
            Duration::from_millis(10),
            store.sign_in(&session.id, &sign_in_request("client@example.com", "password123")),
        )
        .await;
        assert!(cancelled.is_err());

        tokio::time::sleep(Duration::from_millis(1)).await;
        let snapshot = store.snapshot(&session.id).await;
        assert!(!snapshot.loading);
        assert!(snapshot.identity.is_none());

        tokio::time::advance(Duration::from_secs(3600)).await;
        assert!(!store.snapshot(&session.id).await.loading);
    }

    #[tokio::test]
    async fn sign_in_takes_role_and_onboarding_from_the_account() {
        let store = store().await;
        let session = store.open_session().await;

        let response = store
            .sign_in(&session.id, &sign_in_request("CA@example.com", "password123"))
            .await
            .unwrap();

        let user = response.data.user.unwrap();
        assert_eq!(user.role, Role::Professional);
        assert_eq!(user.email, "ca@example.com");
        assert!(!response.data.onboarding_complete);
        assert_eq!(response.data.professional_type, Some(ProfessionalType::Ca));
    }

    #[tokio::test]
    async fn sign_in_rejects_wrong_password_and_unknown_email() {
        let store = store().await;
        let session = store.open_session().await;

        let wrong = store
            .sign_in(&session.id, &sign_in_request("client@example.com", "nope-nope"))
            .await;
        assert!(matches!(wrong, Err(ServiceError::InvalidCredentials)));

        let unknown = store
            .sign_in(&session.id, &sign_in_request("ghost@example.com", "password123"))
            .await;
        assert!(matches!(unknown, Err(ServiceError::InvalidCredentials)));

        let snapshot = store.snapshot(&session.id).await;
        assert!(snapshot.identity.is_none());
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn sign_up_completes_onboarding_for_every_role() {
        let store = store().await;

        let client = store.open_session().await;
        let response = store
            .sign_up(&client.id, &sign_up_request("new@example.com", None, None))
            .await
            .unwrap();
        assert_eq!(response.data.user.unwrap().role, Role::Client);
        assert!(response.data.onboarding_complete);

        let professional = store.open_session().await;
        let response = store
            .sign_up(
                &professional.id,
                &sign_up_request(
                    "cs@example.com",
                    Some(Role::Professional),
                    Some(ProfessionalType::Cs),
                ),
            )
            .await
            .unwrap();
        assert_eq!(response.data.user.unwrap().role, Role::Professional);
        assert!(response.data.onboarding_complete);
        assert_eq!(response.data.professional_type, Some(ProfessionalType::Cs));
    }

    #[tokio::test]
    async fn sign_up_can_leave_onboarding_pending() {
        let store = store_with(MockConfig::instant(), false).await;
        let session = store.open_session().await;

        let response = store
            .sign_up(&session.id, &sign_up_request("new@example.com", None, None))
            .await
            .unwrap();
        assert!(!response.data.onboarding_complete);
    }

    #[tokio::test]
    async fn professional_sign_up_requires_a_type() {
        let store = store().await;
        let session = store.open_session().await;

        let result = store
            .sign_up(
                &session.id,
                &sign_up_request("pro@example.com", Some(Role::Professional), None),
            )
            .await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn duplicate_sign_up_conflicts() {
        let store = store().await;
        let session = store.open_session().await;

        let result = store
            .sign_up(&session.id, &sign_up_request("client@example.com", None, None))
            .await;
        assert!(matches!(
            result,
            Err(ServiceError::Repo(crate::errors::RepositoryError::AlreadyExists(_)))
        ));
    }

    #[tokio::test]
    async fn sign_out_clears_identity() {
        let store = store().await;
        let session = store.open_session().await;
        store
            .sign_in(&session.id, &sign_in_request("client@example.com", "password123"))
            .await
            .unwrap();

        let response = store.sign_out(&session.id).await.unwrap();
        assert!(response.data.user.is_none());
        assert!(store.snapshot(&session.id).await.identity.is_none());
    }

    #[tokio::test]
    async fn onboarding_status_follows_the_account_across_sessions() {
        let store = store().await;
        let session = store.open_session().await;
        store
            .sign_in(&session.id, &sign_in_request("founder@example.com", "password123"))
            .await
            .unwrap();
        assert!(!store.snapshot(&session.id).await.onboarding_complete);

        store
            .complete_onboarding(
                &session.id,
                &OnboardingRequest {
                    structure: BusinessStructure::Llp,
                },
            )
            .await
            .unwrap();
        store.sign_out(&session.id).await.unwrap();

        let other = store.open_session().await;
        let response = store
            .sign_in(&other.id, &sign_in_request("founder@example.com", "password123"))
            .await
            .unwrap();
        assert!(response.data.onboarding_complete);
    }

    #[tokio::test]
    async fn onboarding_is_role_specific() {
        let store = store().await;
        let session = store.open_session().await;

        let anonymous = store
            .complete_onboarding(
                &session.id,
                &OnboardingRequest {
                    structure: BusinessStructure::Opc,
                },
            )
            .await;
        assert!(matches!(anonymous, Err(ServiceError::Unauthenticated)));

        store
            .sign_in(&session.id, &sign_in_request("ca@example.com", "password123"))
            .await
            .unwrap();

        let wrong_flow = store
            .complete_onboarding(
                &session.id,
                &OnboardingRequest {
                    structure: BusinessStructure::Opc,
                },
            )
            .await;
        assert!(matches!(wrong_flow, Err(ServiceError::Forbidden(_))));

        let response = store
            .complete_professional_onboarding(
                &session.id,
                &ProfessionalOnboardingRequest {
                    full_name: "Priya Sharma".into(),
                    license_number: "CA-12345".into(),
                },
            )
            .await
            .unwrap();
        assert!(response.data.onboarding_complete);
    }

    #[tokio::test]
    async fn simulated_failure_leaves_state_untouched() {
        let store = store_with(
            MockConfig {
                failure_rate: 1.0,
                ..MockConfig::instant()
            },
            true,
        )
        .await;
        let session = store.open_session().await;

        let result = store
            .sign_in(&session.id, &sign_in_request("client@example.com", "password123"))
            .await;
        assert!(matches!(result, Err(ServiceError::Simulated(_))));

        let snapshot = store.snapshot(&session.id).await;
        assert!(snapshot.identity.is_none());
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn professional_profile_is_stored_on_the_account() {
        let hashing: DynHashing = Arc::new(Hashing::new());
        let accounts = Arc::new(AccountRepository::with_accounts(
            seed::demo_accounts(&hashing).await.unwrap(),
        ));
        let store = SessionStore::new(SessionStoreDeps {
            sessions: Arc::new(SessionRepository::new(SESSION_TTL)),
            accounts: accounts.clone(),
            hashing,
            latency: MockLatency::new(MockConfig::instant()),
            metrics: Metrics::new(),
            signup_completes_onboarding: true,
        });
        let session = store.open_session().await;
        store
            .sign_in(&session.id, &sign_in_request("ca@example.com", "password123"))
            .await
            .unwrap();
        store
            .complete_professional_onboarding(
                &session.id,
                &ProfessionalOnboardingRequest {
                    full_name: " Priya Sharma ".into(),
                    license_number: "CA-12345".into(),
                },
            )
            .await
            .unwrap();

        let account = accounts.find_by_email("ca@example.com").await.unwrap();
        assert_eq!(
            account.professional_profile,
            Some(ProfessionalProfile {
                full_name: "Priya Sharma".into(),
                license_number: "CA-12345".into(),
            })
        );
    }
}
