//! Subcommand handlers
//!
//! Each handler runs against an initialized session and prints plain text.

use std::fmt::Write as _;
use std::path::Path;

use auth::{
    AppResult, AuthApi, LoginCredentials, RegistrationData, SessionContext, SessionRepository,
    SessionState, SignUpInput,
};
use intake::{ApplicationForm, ApplicationStatus, FormErrors, SubmitError};
use kernel::error::{app_error::ResultExt, kind::ErrorKind};
use kernel::geo::{canonical_state, state_label};
use listings::{LOCATIONS_PENDING, Property, PropertyFilter, format_naira};

use crate::cli::{Command, RegisterArgs};

pub async fn dispatch<A, S>(ctx: &SessionContext<A, S>, command: Command) -> AppResult<()>
where
    A: AuthApi,
    S: SessionRepository,
{
    match command {
        Command::Status => {
            print!("{}", render_status(&ctx.state()));
        }
        Command::Login { email, password } => {
            let credentials = LoginCredentials::new(&email, password)?;
            ctx.login(credentials).await?;
            print!("{}", render_status(&ctx.state()));
        }
        Command::Register(args) => {
            let data = RegistrationData::try_from(sign_up_input(args))?;
            ctx.register(data).await?;
            print!("{}", render_status(&ctx.state()));
        }
        Command::Logout => {
            ctx.logout().await?;
            println!("Signed out");
        }
        Command::Refresh => {
            ctx.refresh_profile().await?;
            print!("{}", render_status(&ctx.state()));
        }
        Command::Apply { form, check } => apply(ctx, &form, check).await?,
        Command::Properties {
            state,
            property_type,
            price,
        } => {
            let filter = property_filter(state.as_deref(), property_type.as_deref(), price.as_deref())?;
            print!("{}", render_properties(&listings::search(&filter)));
        }
        Command::Locations { state } => {
            let locations = listings::locations_for_state(&state)?;
            print!("{}", render_locations(&state, locations));
        }
    }
    Ok(())
}

async fn apply<A, S>(ctx: &SessionContext<A, S>, path: &Path, check: bool) -> AppResult<()>
where
    A: AuthApi,
    S: SessionRepository,
{
    let raw = tokio::fs::read_to_string(path).await.map_app_err(
        ErrorKind::BadRequest,
        format!("Could not read application form {}", path.display()),
    )?;
    let form: ApplicationForm = serde_json::from_str(&raw)?;

    if check {
        let errors = intake::validate(&form);
        if !errors.is_valid() {
            eprint!("{}", render_form_errors(&errors));
            return Err(SubmitError::Invalid(errors).into());
        }
        println!("Form is valid");
        return Ok(());
    }

    match intake::submit_application(ctx, &form).await {
        Ok(submission) => {
            println!("Application submitted ({} fields saved)", submission.fields.len());
            Ok(())
        }
        Err(err) => {
            if let Some(errors) = err.field_errors() {
                eprint!("{}", render_form_errors(errors));
            }
            Err(err.into())
        }
    }
}

fn sign_up_input(args: RegisterArgs) -> SignUpInput {
    SignUpInput {
        firstname: args.firstname,
        lastname: args.lastname,
        email: args.email,
        phone: args.phone,
        state_of_origin: args.state_of_origin,
        property_type: args.property_type,
        password: args.password,
    }
}

fn property_filter(
    state: Option<&str>,
    property_type: Option<&str>,
    price: Option<&str>,
) -> listings::ListingsResult<PropertyFilter> {
    let mut filter = PropertyFilter::new();
    if let Some(state) = state {
        filter = filter.with_state(state)?;
    }
    if let Some(property_type) = property_type {
        filter = filter.with_property_type(property_type.parse()?);
    }
    if let Some(price) = price {
        filter = filter.with_price_range(price.parse()?);
    }
    Ok(filter)
}

pub fn render_status(state: &SessionState) -> String {
    let Some(user) = state.user.as_ref().filter(|_| state.is_authenticated) else {
        return "Not signed in\n".to_string();
    };

    let application = match intake::application_status(state) {
        ApplicationStatus::Submitted => "submitted",
        ApplicationStatus::NotSubmitted => "not submitted",
    };
    let mut out = String::new();
    let _ = writeln!(out, "Signed in as {} <{}>", user.display_name(), user.email);
    let _ = writeln!(out, "Application: {application}");
    if let Some(error) = &state.error {
        let _ = writeln!(out, "Last error: {error}");
    }
    out
}

pub fn render_properties(properties: &[&Property]) -> String {
    if properties.is_empty() {
        return "No properties match these filters\n".to_string();
    }
    let mut out = String::new();
    for property in properties {
        let _ = writeln!(
            out,
            "#{} {} - {} [{}]",
            property.id, property.title, property.location, property.status
        );
        let _ = writeln!(
            out,
            "   {} ({}/month) | {} bed, {} bath | {} sqm",
            format_naira(property.price),
            format_naira(property.monthly_payment),
            property.bedrooms,
            property.bathrooms,
            property.area_sqm
        );
    }
    out
}

/// `state` has already resolved through `locations_for_state`
pub fn render_locations(state: &str, locations: &[&str]) -> String {
    let heading = canonical_state(state).map(state_label).unwrap_or_else(|_| state.to_string());
    if locations.is_empty() {
        return format!("{heading}: {LOCATIONS_PENDING}\n");
    }
    let mut out = format!("{heading}:\n");
    for location in locations {
        let _ = writeln!(out, "  {location}");
    }
    out
}

pub fn render_form_errors(errors: &FormErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {message}\n", field.label()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth::{SessionToken, User};
    use intake::FormField;
    use serde_json::json;

    #[test]
    fn test_render_status_anonymous() {
        assert_eq!(render_status(&SessionState::anonymous()), "Not signed in\n");
    }

    #[test]
    fn test_render_status_signed_in() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "firstname": "Ada",
            "lastname": "Obi",
            "email": "ada@school.ng"
        }))
        .unwrap();
        let state = SessionState::authenticated(user, SessionToken::new("t").unwrap());

        let out = render_status(&state);
        assert!(out.contains("<ada@school.ng>"));
        assert!(out.contains("Application: not submitted"));
    }

    #[test]
    fn test_render_properties() {
        let filter = property_filter(Some("abuja"), Some("4 bedroom"), None).unwrap();
        let out = render_properties(&listings::search(&filter));
        assert!(out.contains("#3 4 Bedroom Duplex - Gwarinpa, FCT [Coming Soon]"));
        assert!(out.contains("₦45,000,000 (₦225,000/month)"));

        let filter = property_filter(None, None, Some("50m+")).unwrap();
        assert_eq!(
            render_properties(&listings::search(&filter)),
            "No properties match these filters\n"
        );
    }

    #[test]
    fn test_property_filter_rejects_unknown_values() {
        assert!(property_filter(Some("Atlantis"), None, None).is_err());
        assert!(property_filter(None, Some("castle"), None).is_err());
        assert!(property_filter(None, None, Some("cheap")).is_err());
    }

    #[test]
    fn test_render_locations() {
        assert_eq!(
            render_locations("kano", &[]),
            "Kano State: Location will be available soon\n"
        );
        assert_eq!(
            render_locations("lagos", &["Ikoyi", "Lekki"]),
            "Lagos State:\n  Ikoyi\n  Lekki\n"
        );
        assert_eq!(render_locations("Abuja", &["Wuye"]), "FCT:\n  Wuye\n");
    }

    #[test]
    fn test_render_form_errors() {
        let mut errors = FormErrors::new();
        errors.add(FormField::Bvn, "BVN is required");
        assert_eq!(render_form_errors(&errors), "BVN: BVN is required\n");
    }
}
