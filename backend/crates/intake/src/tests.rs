//! Submit flow tests
//! Fake housing API + in-memory session stores

#[cfg(test)]
mod submit_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use auth::{
        AuthApi, AuthConfig, AuthError, AuthResponse, AuthResult, LoginCredentials,
        PersistentSessionRepository, ProfileFetch, ProfileUpdate, RegistrationData,
        SessionContext, SessionToken,
    };
    use platform::storage::MemoryStore;
    use serde_json::{Map, Value, json};

    use crate::application::{ApplicationStatus, application_status, submit_application};
    use crate::domain::form::{ApplicationForm, FormField};
    use crate::error::SubmitError;

    /// Echoes updates back; counts every call
    #[derive(Default)]
    struct EchoApi {
        calls: AtomicUsize,
        reject_updates: bool,
    }

    impl AuthApi for EchoApi {
        async fn login(&self, _credentials: &LoginCredentials) -> AuthResult<AuthResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(serde_json::from_value(json!({
                "token": "tok",
                "user": {"id": "u1", "firstname": "Ada", "email": "ada@school.ng"}
            }))
            .unwrap())
        }

        async fn register(&self, _data: &RegistrationData) -> AuthResult<AuthResponse> {
            unreachable!("not used by the submit flow")
        }

        async fn fetch_profile(&self, _token: &SessionToken) -> AuthResult<ProfileFetch> {
            unreachable!("not used by the submit flow")
        }

        async fn update_profile(
            &self,
            _token: &SessionToken,
            update: &ProfileUpdate,
        ) -> AuthResult<Map<String, Value>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.reject_updates {
                return Err(AuthError::ProfileUpdate("BVN already registered".into()));
            }
            Ok(update.as_map().clone())
        }
    }

    type Ctx = SessionContext<EchoApi, PersistentSessionRepository<MemoryStore, MemoryStore>>;

    fn context(api: EchoApi) -> (Arc<EchoApi>, Ctx) {
        let config = AuthConfig::default();
        let repo = PersistentSessionRepository::new(MemoryStore::new(), MemoryStore::new(), &config);
        let api = Arc::new(api);
        let ctx = SessionContext::new(api.clone(), Arc::new(repo), Arc::new(config));
        (api, ctx)
    }

    async fn signed_in(api: EchoApi) -> (Arc<EchoApi>, Ctx) {
        let (api, ctx) = context(api);
        let creds = LoginCredentials::new("ada@school.ng", "pw".to_string()).unwrap();
        ctx.login(creds).await.unwrap();
        (api, ctx)
    }

    fn valid_form() -> ApplicationForm {
        serde_json::from_value(json!({
            "propertyState": "FCT",
            "propertyType": "3 Bedroom",
            "paymentMode": "mortgage",
            "firstName": "Ada",
            "lastName": "Obi",
            "email": "ada@school.ng",
            "dateOfBirth": "1988-04-12",
            "phone": "08031234567",
            "stateOfOrigin": "Enugu",
            "bvn": "12345678901",
            "nin": "10987654321",
            "monthlyIncome": "85,000",
            "employmentStatus": "permanent",
            "employerName": "Govt. Secondary School",
            "employerAddress": "Enugu",
            "bankName": "Access",
            "accountNumber": "0123456789",
            "nextOfKinName": "Chidi Obi",
            "nextOfKinRelation": "Brother",
            "nextOfKinPhone": "07031234567",
            "nextOfKinAddress": "Enugu",
            "terms": true,
            "privacy": true
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_api() {
        let (api, ctx) = signed_in(EchoApi::default()).await;
        let calls_after_login = api.calls.load(Ordering::SeqCst);

        let form = ApplicationForm {
            bvn: "123".into(),
            ..valid_form()
        };
        let err = submit_application(&ctx, &form).await.unwrap_err();

        let errors = err.field_errors().unwrap();
        assert_eq!(errors.get(FormField::Bvn), Some("BVN must be exactly 11 digits"));
        assert_eq!(api.calls.load(Ordering::SeqCst), calls_after_login);
        assert!(ctx.state().error.is_none());
    }

    #[tokio::test]
    async fn test_valid_form_updates_session() {
        let (_api, ctx) = signed_in(EchoApi::default()).await;
        assert_eq!(application_status(&ctx.state()), ApplicationStatus::NotSubmitted);

        let submission = submit_application(&ctx, &valid_form()).await.unwrap();
        assert_eq!(submission.fields.get("bvn"), Some(&json!("12345678901")));
        assert_eq!(submission.fields.get("next_of_kin"), Some(&json!("Chidi Obi")));
        assert_eq!(submission.fields.get("property_state"), Some(&json!("FCT")));

        assert_eq!(application_status(&ctx.state()), ApplicationStatus::Submitted);
    }

    #[tokio::test]
    async fn test_valid_form_without_session() {
        let (api, ctx) = context(EchoApi::default());
        let err = submit_application(&ctx, &valid_form()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Session(AuthError::NoActiveSession)));
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rejected_update_is_session_error() {
        let (_api, ctx) = signed_in(EchoApi {
            reject_updates: true,
            ..Default::default()
        })
        .await;

        let err = submit_application(&ctx, &valid_form()).await.unwrap_err();
        assert_eq!(err.to_string(), "BVN already registered");
        assert_eq!(ctx.state().error.as_deref(), Some("BVN already registered"));
        assert_eq!(application_status(&ctx.state()), ApplicationStatus::NotSubmitted);
    }
}
