//! Axum route handlers for profile registration and maintenance.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::{AppError, OrConflict};
use crate::extract::{AppJson, AppQuery};
use crate::identity::CurrentProfile;
use crate::matching::skills::parse_skill_list;
use crate::models::profile::{ProfileRow, UserType};
use crate::profiles::store::{self, NewProfile, ProfileUpdate};
use crate::state::AppState;

/// Registration form. A `password` field may be sent but is ignored:
/// credentials are checked upstream.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub user_type: UserType,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub company_name: Option<String>,
    /// Comma-separated.
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Partial profile update. Omitted fields keep their stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    /// Comma-separated.
    pub skills: Option<String>,
    pub experience: Option<String>,
}

fn validate_registration(req: &RegisterRequest) -> Result<(), AppError> {
    if req.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name cannot be empty".to_string()));
    }
    if !req.email.contains('@') {
        return Err(AppError::Validation("email must be a valid address".to_string()));
    }
    let company_name = req.company_name.as_deref().unwrap_or("").trim();
    if req.user_type == UserType::Company && company_name.is_empty() {
        return Err(AppError::Validation(
            "company_name is required for company accounts".to_string(),
        ));
    }
    Ok(())
}

/// Turns a PATCH body into a column update. Only seekers carry skills and
/// experience, matching what registration stores.
fn build_profile_update(
    req: &UpdateProfileRequest,
    user_type: UserType,
) -> Result<ProfileUpdate<'_>, AppError> {
    if let Some(name) = &req.full_name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("full_name cannot be empty".to_string()));
        }
    }
    if user_type == UserType::Company && (req.skills.is_some() || req.experience.is_some()) {
        return Err(AppError::Validation(
            "skills and experience can only be set on jobseeker accounts".to_string(),
        ));
    }

    Ok(ProfileUpdate {
        full_name: req.full_name.as_deref().map(str::trim),
        skills: req.skills.as_deref().map(parse_skill_list),
        experience: req.experience.as_deref(),
    })
}

/// POST /api/v1/profiles
pub async fn handle_register(
    State(state): State<AppState>,
    AppJson(req): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ProfileRow>), AppError> {
    validate_registration(&req)?;

    // Only seekers list skills and experience
    let (skills, experience) = match req.user_type {
        UserType::Jobseeker => (
            parse_skill_list(req.skills.as_deref().unwrap_or("")),
            req.experience.clone().unwrap_or_default(),
        ),
        UserType::Company => (Vec::new(), String::new()),
    };

    let profile = store::insert_profile(
        &state.db,
        NewProfile {
            user_type: req.user_type,
            full_name: req.full_name.trim(),
            email: req.email.trim(),
            company_name: req.company_name.as_deref().unwrap_or("").trim(),
            skills: &skills,
            experience: &experience,
        },
    )
    .await
    .or_conflict("An account with this email already exists")?;

    info!("Registered {} profile {}", profile.user_type, profile.id);
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/profiles/lookup?email=
pub async fn handle_lookup(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<EmailQuery>,
) -> Result<Json<ProfileRow>, AppError> {
    let profile = store::find_by_email(&state.db, params.email.trim())
        .await?
        .ok_or_else(|| AppError::NotFound("Profile not found. Please register first.".to_string()))?;
    Ok(Json(profile))
}

/// GET /api/v1/profiles/me
pub async fn handle_get_me(CurrentProfile(profile): CurrentProfile) -> Json<ProfileRow> {
    Json(profile)
}

/// PATCH /api/v1/profiles/me
pub async fn handle_update_me(
    State(state): State<AppState>,
    CurrentProfile(profile): CurrentProfile,
    AppJson(req): AppJson<UpdateProfileRequest>,
) -> Result<Json<ProfileRow>, AppError> {
    let update = build_profile_update(&req, profile.user_type)?;
    let updated = store::update_profile(&state.db, profile.id, update).await?;

    info!("Updated profile {}", updated.id);
    Ok(Json(updated))
}
