//! JSON view models: the shape each screen needs, built from fetched rows.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::matching::skills::split_skills;
use crate::models::application::{ApplicationDetail, ApplicationStatus, SeekerApplication};
use crate::models::job::{JobRow, JobType, JobWithCompanyRow};
use crate::models::profile::ProfileRow;

const DESCRIPTION_PREVIEW_CHARS: usize = 150;
const EXPERIENCE_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, Serialize)]
pub struct JobCard {
    pub id: Uuid,
    pub company_id: Uuid,
    pub company_display_name: String,
    pub title: String,
    pub location: String,
    pub job_type: JobType,
    pub required_skills: Vec<String>,
    pub description: String,
    pub description_preview: String,
    pub is_active: bool,
    pub status_label: &'static str,
    pub already_applied: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicantCard {
    pub application_id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub applicant_id: Uuid,
    pub applicant_name: String,
    pub applicant_email: String,
    pub skills: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_preview: Option<String>,
    pub status: ApplicationStatus,
    pub status_slug: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicantDetailView {
    pub application_id: Uuid,
    pub job_title: String,
    pub applicant: ProfileRow,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub status: ApplicationStatus,
    pub status_slug: String,
    pub applied_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeekerApplicationCard {
    pub application_id: Uuid,
    pub job_id: Uuid,
    pub job_title: String,
    pub company_display_name: String,
    pub location: String,
    pub job_type: JobType,
    pub status: ApplicationStatus,
    pub status_slug: String,
    pub applied_at: DateTime<Utc>,
}

/// CSS-friendly badge slug: `In Review` → `in-review`.
pub fn status_slug(status: ApplicationStatus) -> String {
    status.as_str().to_lowercase().replacen(' ', "-", 1)
}

/// First `max_chars` characters of `text`, never splitting a character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Company name, else contact name, else a generic label.
pub fn company_display_name(company_name: &str, full_name: &str) -> String {
    [company_name, full_name]
        .into_iter()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .unwrap_or("Company")
        .to_string()
}

fn description_preview(description: &str) -> String {
    format!("{}...", truncate_chars(description, DESCRIPTION_PREVIEW_CHARS))
}

fn experience_preview(experience: &str) -> Option<String> {
    if experience.trim().is_empty() {
        return None;
    }
    let head = truncate_chars(experience, EXPERIENCE_PREVIEW_CHARS);
    if head.len() < experience.len() {
        Some(format!("{head}..."))
    } else {
        Some(head.to_string())
    }
}

impl JobCard {
    fn build(job: &JobRow, company_display_name: String, already_applied: bool) -> Self {
        JobCard {
            id: job.id,
            company_id: job.company_id,
            company_display_name,
            title: job.title.clone(),
            location: job.location.clone(),
            job_type: job.job_type,
            required_skills: job.required_skills.clone(),
            description: job.description.clone(),
            description_preview: description_preview(&job.description),
            is_active: job.is_active,
            status_label: if job.is_active { "Active" } else { "Inactive" },
            already_applied,
            created_at: job.created_at,
        }
    }

    /// A listing as seen by a seeker who has applied to `applied_job_ids`.
    pub fn for_seeker(listing: &JobWithCompanyRow, applied_job_ids: &HashSet<Uuid>) -> Self {
        Self::build(
            &listing.job,
            company_display_name(&listing.company_name, &listing.company_full_name),
            applied_job_ids.contains(&listing.job.id),
        )
    }

    /// One of the company's own postings.
    pub fn for_owner(job: &JobRow, owner: &ProfileRow) -> Self {
        Self::build(job, company_display_name(&owner.company_name, &owner.full_name), false)
    }
}

impl From<&ApplicationDetail> for ApplicantCard {
    fn from(detail: &ApplicationDetail) -> Self {
        let breakdown = split_skills(&detail.job.required_skills, &detail.applicant.skills);
        ApplicantCard {
            application_id: detail.application.id,
            job_id: detail.job.id,
            job_title: detail.job.title.clone(),
            applicant_id: detail.applicant.id,
            applicant_name: detail.applicant.full_name.clone(),
            applicant_email: detail.applicant.email.clone(),
            skills: detail.applicant.skills.clone(),
            matching_skills: breakdown.matching,
            missing_skills: breakdown.missing,
            experience_preview: experience_preview(&detail.applicant.experience),
            status: detail.application.status,
            status_slug: status_slug(detail.application.status),
            applied_at: detail.application.applied_at,
        }
    }
}

impl From<&ApplicationDetail> for ApplicantDetailView {
    fn from(detail: &ApplicationDetail) -> Self {
        let breakdown = split_skills(&detail.job.required_skills, &detail.applicant.skills);
        ApplicantDetailView {
            application_id: detail.application.id,
            job_title: detail.job.title.clone(),
            applicant: detail.applicant.clone(),
            matching_skills: breakdown.matching,
            missing_skills: breakdown.missing,
            status: detail.application.status,
            status_slug: status_slug(detail.application.status),
            applied_at: detail.application.applied_at,
        }
    }
}

impl From<&SeekerApplication> for SeekerApplicationCard {
    fn from(app: &SeekerApplication) -> Self {
        SeekerApplicationCard {
            application_id: app.application.id,
            job_id: app.job.id,
            job_title: app.job.title.clone(),
            company_display_name: company_display_name(&app.company_name, &app.company_full_name),
            location: app.job.location.clone(),
            job_type: app.job.job_type,
            status: app.application.status,
            status_slug: status_slug(app.application.status),
            applied_at: app.application.applied_at,
        }
    }
}
