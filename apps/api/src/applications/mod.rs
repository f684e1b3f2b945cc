//! Application records and the joins the dashboards need.
//!
//! Joins are assembled in memory from one query per table, the same way the
//! records are fetched wholesale and filtered afterwards.

pub mod store;

use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::jobs;
use crate::models::application::{ApplicationDetail, ApplicationRow, SeekerApplication};
use crate::models::job::{JobRow, JobWithCompanyRow};
use crate::models::profile::ProfileRow;
use crate::profiles;

/// Pairs each application with its job and applicant, keeping application
/// order. Applications whose job or applicant is not supplied are dropped.
pub fn assemble_details(
    applications: Vec<ApplicationRow>,
    jobs: &[JobRow],
    applicants: &[ProfileRow],
) -> Vec<ApplicationDetail> {
    let jobs: HashMap<Uuid, &JobRow> = jobs.iter().map(|j| (j.id, j)).collect();
    let applicants: HashMap<Uuid, &ProfileRow> = applicants.iter().map(|p| (p.id, p)).collect();

    applications
        .into_iter()
        .filter_map(|application| {
            let job = jobs.get(&application.job_id)?;
            let applicant = applicants.get(&application.applicant_id)?;
            Some(ApplicationDetail {
                job: (*job).clone(),
                applicant: (*applicant).clone(),
                application,
            })
        })
        .collect()
}

/// Pairs each of a seeker's applications with the job and its company.
pub fn assemble_seeker_applications(
    applications: Vec<ApplicationRow>,
    listings: &[JobWithCompanyRow],
) -> Vec<SeekerApplication> {
    let listings: HashMap<Uuid, &JobWithCompanyRow> =
        listings.iter().map(|l| (l.job.id, l)).collect();

    applications
        .into_iter()
        .filter_map(|application| {
            let listing = listings.get(&application.job_id)?;
            Some(SeekerApplication {
                job: listing.job.clone(),
                company_full_name: listing.company_full_name.clone(),
                company_name: listing.company_name.clone(),
                application,
            })
        })
        .collect()
}

/// Every application to any of the company's jobs, newest first.
pub async fn load_company_applications(
    pool: &PgPool,
    company_id: Uuid,
) -> Result<Vec<ApplicationDetail>, sqlx::Error> {
    let jobs = jobs::store::list_company_jobs(pool, company_id).await?;
    let job_ids: Vec<Uuid> = jobs.iter().map(|j| j.id).collect();

    let applications = store::list_for_jobs(pool, &job_ids).await?;
    if applications.is_empty() {
        return Ok(Vec::new());
    }

    let mut applicant_ids: Vec<Uuid> = applications.iter().map(|a| a.applicant_id).collect();
    applicant_ids.sort_unstable();
    applicant_ids.dedup();
    let applicants = profiles::store::find_by_ids(pool, &applicant_ids).await?;

    Ok(assemble_details(applications, &jobs, &applicants))
}

/// A seeker's applications with job and company, newest first.
pub async fn load_seeker_applications(
    pool: &PgPool,
    applicant_id: Uuid,
) -> Result<Vec<SeekerApplication>, sqlx::Error> {
    let applications = store::list_for_applicant(pool, applicant_id).await?;
    if applications.is_empty() {
        return Ok(Vec::new());
    }

    let mut job_ids: Vec<Uuid> = applications.iter().map(|a| a.job_id).collect();
    job_ids.sort_unstable();
    job_ids.dedup();
    let listings = jobs::store::find_listings_by_ids(pool, &job_ids).await?;

    Ok(assemble_seeker_applications(applications, &listings))
}
