//! Sign Up Use Case
//!
//! Creates a teacher account on the housing API and signs it in.

use kernel::validation::international_phone;
use platform::password::ClearTextPassword;

use crate::application::context::SessionContext;
use crate::domain::payload::{AuthResponse, RegistrationData};
use crate::domain::repository::{AuthApi, SessionRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input, as typed
#[derive(Debug, Clone, Default)]
pub struct SignUpInput {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub state_of_origin: String,
    pub property_type: String,
    pub password: String,
}

impl TryFrom<SignUpInput> for RegistrationData {
    type Error = AuthError;

    fn try_from(input: SignUpInput) -> AuthResult<Self> {
        let required = |value: String, label: &str| -> AuthResult<String> {
            let value = value.trim().to_string();
            if value.is_empty() {
                Err(AuthError::InvalidInput(format!("{label} is required")))
            } else {
                Ok(value)
            }
        };

        let email = Email::new(&input.email)
            .map_err(|e| AuthError::InvalidInput(e.message().to_string()))?;

        Ok(RegistrationData {
            firstname: required(input.firstname, "First name")?,
            lastname: required(input.lastname, "Last name")?,
            email,
            phone: required(input.phone, "Phone number")?,
            state_of_origin: input.state_of_origin.trim().to_string(),
            property_type: input.property_type.trim().to_string(),
            password: ClearTextPassword::for_registration(input.password)?,
        })
    }
}

impl<A, S> SessionContext<A, S>
where
    A: AuthApi,
    S: SessionRepository,
{
    /// Register, then persist `{user, token}` as `login` does.
    ///
    /// The phone number is rewritten into international form with the
    /// configured country code before it is sent.
    pub async fn register(&self, mut data: RegistrationData) -> AuthResult<AuthResponse> {
        data.phone = international_phone(&data.phone, &self.config.phone_country_code);

        self.run("register", async {
            let response = self.api.register(&data).await?;
            let token = self.resolve_token(response.token.as_deref())?;
            self.adopt(response.user.clone(), token).await?;

            tracing::info!(
                user_id = %response.user.id,
                "Teacher registered"
            );
            Ok(response)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::SignUpInput;
    use crate::domain::payload::RegistrationData;
    use crate::error::AuthError;

    fn input() -> SignUpInput {
        SignUpInput {
            firstname: " Ada ".into(),
            lastname: "Obi".into(),
            email: "ada@school.ng".into(),
            phone: "0803 123 4567".into(),
            state_of_origin: "Lagos".into(),
            property_type: "2 Bedroom".into(),
            password: "longenough".into(),
        }
    }

    #[test]
    fn test_valid_input_is_converted() {
        let data = RegistrationData::try_from(input()).unwrap();
        assert_eq!(data.firstname, "Ada");
        assert_eq!(data.email.as_str(), "ada@school.ng");
        // normalization happens at send time
        assert_eq!(data.phone, "0803 123 4567");
    }

    #[test]
    fn test_short_password_is_rejected() {
        let err = RegistrationData::try_from(SignUpInput {
            password: "short".into(),
            ..input()
        })
        .unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(_)));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let err = RegistrationData::try_from(SignUpInput {
            lastname: "  ".into(),
            ..input()
        })
        .unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput(msg) if msg == "Last name is required"));
    }
}
