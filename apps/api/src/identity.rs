//! Caller identity.
//!
//! Authentication happens upstream; each request carries the id of the
//! logged-in profile in `x-profile-id`. The extractors here load that
//! profile and gate endpoints on its role.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{ProfileRow, UserType};
use crate::profiles::store;
use crate::state::AppState;

pub const PROFILE_HEADER: &str = "x-profile-id";

/// Any registered profile.
pub struct CurrentProfile(pub ProfileRow);

/// A profile with `user_type = jobseeker`.
pub struct SeekerProfile(pub ProfileRow);

/// A profile with `user_type = company`.
pub struct CompanyProfile(pub ProfileRow);

fn profile_id_from_parts(parts: &Parts) -> Result<Uuid, AppError> {
    let raw = parts
        .headers
        .get(PROFILE_HEADER)
        .ok_or_else(|| AppError::Unauthorized(format!("Missing {PROFILE_HEADER} header")))?;

    raw.to_str()
        .ok()
        .and_then(|s| Uuid::parse_str(s.trim()).ok())
        .ok_or_else(|| AppError::Unauthorized(format!("Malformed {PROFILE_HEADER} header")))
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentProfile {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let id = profile_id_from_parts(parts)?;
        let profile = store::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Unknown profile".to_string()))?;
        Ok(CurrentProfile(profile))
    }
}

fn require_role(profile: ProfileRow, role: UserType) -> Result<ProfileRow, AppError> {
    if profile.user_type == role {
        Ok(profile)
    } else {
        warn!(
            "Profile {} ({}) attempted a {} endpoint",
            profile.id, profile.user_type, role
        );
        Err(AppError::Forbidden(format!("Only {role} accounts can do this")))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SeekerProfile {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentProfile(profile) = CurrentProfile::from_request_parts(parts, state).await?;
        require_role(profile, UserType::Jobseeker).map(SeekerProfile)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CompanyProfile {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let CurrentProfile(profile) = CurrentProfile::from_request_parts(parts, state).await?;
        require_role(profile, UserType::Company).map(CompanyProfile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::profile;
    use axum::http::Request;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = header {
            builder = builder.header(PROFILE_HEADER, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let err = profile_id_from_parts(&parts_with(None)).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_malformed_header_is_unauthorized() {
        let err = profile_id_from_parts(&parts_with(Some("not-a-uuid"))).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_header_parses_uuid() {
        let id = Uuid::new_v4();
        let parsed = profile_id_from_parts(&parts_with(Some(&format!(" {id} ")))).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_require_role() {
        let seeker = profile(UserType::Jobseeker, "Ada", &[]);
        assert!(require_role(seeker.clone(), UserType::Jobseeker).is_ok());
        assert!(matches!(
            require_role(seeker, UserType::Company),
            Err(AppError::Forbidden(_))
        ));
    }
}
