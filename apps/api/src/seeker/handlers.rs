//! Axum route handlers for job seekers.

use std::collections::HashSet;

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::applications::{self, store as application_store};
use crate::errors::{AppError, OrConflict};
use crate::extract::{AppPath, AppQuery};
use crate::identity::SeekerProfile;
use crate::jobs::store as job_store;
use crate::matching::filters::{filter_by_status, filter_jobs, recommend_jobs, JobFilter, StatusFilter};
use crate::matching::stats::{seeker_stats, SeekerStats};
use crate::matching::views::{JobCard, SeekerApplicationCard};
use crate::models::application::ApplicationRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeekerDashboardResponse {
    pub full_name: String,
    pub stats: SeekerStats,
    pub recommended_jobs: Vec<JobCard>,
}

fn applied_job_ids(applications: &[ApplicationRow]) -> HashSet<Uuid> {
    applications.iter().map(|a| a.job_id).collect()
}

/// GET /api/v1/seeker/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    SeekerProfile(profile): SeekerProfile,
) -> Result<Json<SeekerDashboardResponse>, AppError> {
    let applications = application_store::list_for_applicant(&state.db, profile.id).await?;
    let listings = job_store::list_active_listings(&state.db).await?;

    let applied = applied_job_ids(&applications);
    let recommended_jobs = recommend_jobs(
        &listings,
        &profile.skills,
        state.config.recommended_jobs_limit,
    )
    .iter()
    .map(|listing| JobCard::for_seeker(listing, &applied))
    .collect();

    Ok(Json(SeekerDashboardResponse {
        full_name: profile.full_name,
        stats: seeker_stats(&applications),
        recommended_jobs,
    }))
}

/// GET /api/v1/jobs?search=&job_type=&location=
pub async fn handle_browse_jobs(
    State(state): State<AppState>,
    SeekerProfile(profile): SeekerProfile,
    AppQuery(filter): AppQuery<JobFilter>,
) -> Result<Json<Vec<JobCard>>, AppError> {
    let applications = application_store::list_for_applicant(&state.db, profile.id).await?;
    let listings = job_store::list_active_listings(&state.db).await?;

    let applied = applied_job_ids(&applications);
    let cards = filter_jobs(&listings, &filter)
        .iter()
        .map(|listing| JobCard::for_seeker(listing, &applied))
        .collect();
    Ok(Json(cards))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    SeekerProfile(profile): SeekerProfile,
    AppPath(job_id): AppPath<Uuid>,
) -> Result<Json<JobCard>, AppError> {
    let listing = job_store::find_active_listing(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    let applications = application_store::list_for_applicant(&state.db, profile.id).await?;

    Ok(Json(JobCard::for_seeker(&listing, &applied_job_ids(&applications))))
}

/// POST /api/v1/jobs/:id/apply
pub async fn handle_apply(
    State(state): State<AppState>,
    SeekerProfile(profile): SeekerProfile,
    AppPath(job_id): AppPath<Uuid>,
) -> Result<(StatusCode, Json<ApplicationRow>), AppError> {
    job_store::find_active_listing(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    let application = application_store::insert_application(&state.db, job_id, profile.id)
        .await
        .or_conflict("You have already applied to this job")?;

    info!(
        "Profile {} applied to job {} (application {})",
        profile.id, job_id, application.id
    );
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/v1/seeker/applications?status=
pub async fn handle_my_applications(
    State(state): State<AppState>,
    SeekerProfile(profile): SeekerProfile,
    AppQuery(filter): AppQuery<StatusFilter>,
) -> Result<Json<Vec<SeekerApplicationCard>>, AppError> {
    let applications = applications::load_seeker_applications(&state.db, profile.id).await?;
    let cards = filter_by_status(&applications, filter.status)
        .iter()
        .map(SeekerApplicationCard::from)
        .collect();
    Ok(Json(cards))
}
