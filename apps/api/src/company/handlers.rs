//! Axum route handlers for hiring companies.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::applications::{self, store as application_store};
use crate::errors::AppError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::identity::CompanyProfile;
use crate::jobs::store::{self as job_store, JobUpdate, NewJob};
use crate::matching::filters::{auto_filter_applicants, filter_applications, ApplicantFilter};
use crate::matching::skills::parse_skill_list;
use crate::matching::stats::{company_stats, CompanyStats};
use crate::matching::views::{company_display_name, ApplicantCard, ApplicantDetailView, JobCard};
use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::models::job::JobType;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CompanyDashboardResponse {
    pub company_name: String,
    pub stats: CompanyStats,
}

#[derive(Debug, Deserialize)]
pub struct PostJobRequest {
    pub title: String,
    pub description: String,
    /// Comma-separated.
    #[serde(default)]
    pub required_skills: String,
    pub location: String,
    pub job_type: JobType,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Comma-separated.
    pub required_skills: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<JobType>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
}

#[derive(Debug, Serialize)]
pub struct AutoFilterResponse {
    pub applicants: Vec<ApplicantCard>,
    pub eliminated: usize,
    pub message: String,
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn validate_post_job(req: &PostJobRequest) -> Result<(), AppError> {
    require_text("title", &req.title)?;
    require_text("description", &req.description)?;
    require_text("location", &req.location)
}

fn validate_update_job(req: &UpdateJobRequest) -> Result<(), AppError> {
    let fields = [
        ("title", &req.title),
        ("description", &req.description),
        ("location", &req.location),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            require_text(name, value)?;
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/company/dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
    CompanyProfile(profile): CompanyProfile,
) -> Result<Json<CompanyDashboardResponse>, AppError> {
    let jobs = job_store::list_company_jobs(&state.db, profile.id).await?;
    let active_ids: Vec<Uuid> = jobs.iter().filter(|j| j.is_active).map(|j| j.id).collect();
    let applications = application_store::list_for_jobs(&state.db, &active_ids).await?;

    Ok(Json(CompanyDashboardResponse {
        company_name: company_display_name(&profile.company_name, &profile.full_name),
        stats: company_stats(&jobs, &applications),
    }))
}

/// POST /api/v1/company/jobs
pub async fn handle_post_job(
    State(state): State<AppState>,
    CompanyProfile(profile): CompanyProfile,
    AppJson(req): AppJson<PostJobRequest>,
) -> Result<(StatusCode, Json<JobCard>), AppError> {
    validate_post_job(&req)?;

    let required_skills = parse_skill_list(&req.required_skills);
    let job = job_store::insert_job(
        &state.db,
        profile.id,
        NewJob {
            title: req.title.trim(),
            description: req.description.trim(),
            location: req.location.trim(),
            job_type: req.job_type,
            required_skills: &required_skills,
        },
    )
    .await?;

    info!("Company {} posted job {} ({})", profile.id, job.id, job.title);
    Ok((StatusCode::CREATED, Json(JobCard::for_owner(&job, &profile))))
}

/// GET /api/v1/company/jobs
pub async fn handle_my_jobs(
    State(state): State<AppState>,
    CompanyProfile(profile): CompanyProfile,
) -> Result<Json<Vec<JobCard>>, AppError> {
    let jobs = job_store::list_company_jobs(&state.db, profile.id).await?;
    Ok(Json(
        jobs.iter()
            .map(|job| JobCard::for_owner(job, &profile))
            .collect(),
    ))
}

/// PATCH /api/v1/company/jobs/:id
///
/// Partial update; `{"is_active": false}` deactivates the posting.
pub async fn handle_update_job(
    State(state): State<AppState>,
    CompanyProfile(profile): CompanyProfile,
    AppPath(job_id): AppPath<Uuid>,
    AppJson(req): AppJson<UpdateJobRequest>,
) -> Result<Json<JobCard>, AppError> {
    validate_update_job(&req)?;

    let required_skills = req.required_skills.as_deref().map(parse_skill_list);
    let update = JobUpdate {
        title: req.title.as_deref().map(str::trim),
        description: req.description.as_deref().map(str::trim),
        location: req.location.as_deref().map(str::trim),
        job_type: req.job_type,
        required_skills: required_skills.as_deref(),
        is_active: req.is_active,
    };

    let job = job_store::update_job(&state.db, profile.id, job_id, update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    info!("Company {} updated job {} (active: {})", profile.id, job.id, job.is_active);
    Ok(Json(JobCard::for_owner(&job, &profile)))
}

/// GET /api/v1/company/applications?search=&job_id=&status=
pub async fn handle_list_applications(
    State(state): State<AppState>,
    CompanyProfile(profile): CompanyProfile,
    AppQuery(filter): AppQuery<ApplicantFilter>,
) -> Result<Json<Vec<ApplicantCard>>, AppError> {
    let details = applications::load_company_applications(&state.db, profile.id).await?;
    let cards = filter_applications(&details, &filter)
        .iter()
        .map(ApplicantCard::from)
        .collect();
    Ok(Json(cards))
}

/// POST /api/v1/company/applications/auto-filter
///
/// Drops applicants that share no skill with the job they applied to.
pub async fn handle_auto_filter(
    State(state): State<AppState>,
    CompanyProfile(profile): CompanyProfile,
) -> Result<Json<AutoFilterResponse>, AppError> {
    let details = applications::load_company_applications(&state.db, profile.id).await?;
    let outcome = auto_filter_applicants(&details);

    info!(
        "Company {} auto-filter: kept {}, eliminated {}",
        profile.id,
        outcome.kept.len(),
        outcome.eliminated
    );
    Ok(Json(AutoFilterResponse {
        applicants: outcome.kept.iter().map(ApplicantCard::from).collect(),
        eliminated: outcome.eliminated,
        message: outcome.message,
    }))
}

/// GET /api/v1/company/applications/:id
pub async fn handle_get_application(
    State(state): State<AppState>,
    CompanyProfile(profile): CompanyProfile,
    AppPath(application_id): AppPath<Uuid>,
) -> Result<Json<ApplicantDetailView>, AppError> {
    let details = applications::load_company_applications(&state.db, profile.id).await?;
    let detail = details
        .iter()
        .find(|d| d.application.id == application_id)
        .ok_or_else(|| AppError::NotFound(format!("Application {application_id} not found")))?;
    Ok(Json(ApplicantDetailView::from(detail)))
}

/// PATCH /api/v1/company/applications/:id/status
pub async fn handle_update_status(
    State(state): State<AppState>,
    CompanyProfile(profile): CompanyProfile,
    AppPath(application_id): AppPath<Uuid>,
    AppJson(req): AppJson<UpdateStatusRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    let application =
        application_store::update_status(&state.db, profile.id, application_id, req.status)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Application {application_id} not found"))
            })?;

    info!(
        "Company {} set application {} to {}",
        profile.id, application.id, application.status
    );
    Ok(Json(application))
}
