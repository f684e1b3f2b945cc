use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::{JobRow, JobType, JobWithCompanyRow};

const LISTING_SELECT: &str = r#"
    SELECT j.*, p.full_name AS company_full_name, p.company_name AS company_name
    FROM jobs j
    JOIN profiles p ON p.id = j.company_id
"#;

pub struct NewJob<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: &'a str,
    pub job_type: JobType,
    pub required_skills: &'a [String],
}

/// Partial update of a posting. `None` leaves the column unchanged.
#[derive(Default)]
pub struct JobUpdate<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub location: Option<&'a str>,
    pub job_type: Option<JobType>,
    pub required_skills: Option<&'a [String]>,
    pub is_active: Option<bool>,
}

/// Inserts a new, active posting owned by `company_id`.
pub async fn insert_job(
    pool: &PgPool,
    company_id: Uuid,
    new: NewJob<'_>,
) -> Result<JobRow, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs (company_id, title, description, location, job_type, required_skills, is_active)
        VALUES ($1, $2, $3, $4, $5, $6, TRUE)
        RETURNING *
        "#,
    )
    .bind(company_id)
    .bind(new.title)
    .bind(new.description)
    .bind(new.location)
    .bind(new.job_type.as_str())
    .bind(new.required_skills)
    .fetch_one(pool)
    .await
}

/// All of a company's postings, active or not, newest first.
pub async fn list_company_jobs(pool: &PgPool, company_id: Uuid) -> Result<Vec<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE company_id = $1 ORDER BY created_at DESC",
    )
    .bind(company_id)
    .fetch_all(pool)
    .await
}

/// Every active posting with its company's names, newest first.
pub async fn list_active_listings(pool: &PgPool) -> Result<Vec<JobWithCompanyRow>, sqlx::Error> {
    let sql = format!("{LISTING_SELECT} WHERE j.is_active = TRUE ORDER BY j.created_at DESC");
    sqlx::query_as::<_, JobWithCompanyRow>(&sql)
        .fetch_all(pool)
        .await
}

pub async fn find_active_listing(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<Option<JobWithCompanyRow>, sqlx::Error> {
    let sql = format!("{LISTING_SELECT} WHERE j.id = $1 AND j.is_active = TRUE");
    sqlx::query_as::<_, JobWithCompanyRow>(&sql)
        .bind(job_id)
        .fetch_optional(pool)
        .await
}

/// Listings by id regardless of active flag, for showing past applications.
pub async fn find_listings_by_ids(
    pool: &PgPool,
    ids: &[Uuid],
) -> Result<Vec<JobWithCompanyRow>, sqlx::Error> {
    let sql = format!("{LISTING_SELECT} WHERE j.id = ANY($1)");
    sqlx::query_as::<_, JobWithCompanyRow>(&sql)
        .bind(ids)
        .fetch_all(pool)
        .await
}

/// Applies `update` to a posting owned by `company_id`.
/// Returns `None` when no such posting belongs to the company.
pub async fn update_job(
    pool: &PgPool,
    company_id: Uuid,
    job_id: Uuid,
    update: JobUpdate<'_>,
) -> Result<Option<JobRow>, sqlx::Error> {
    sqlx::query_as::<_, JobRow>(
        r#"
        UPDATE jobs
        SET title = COALESCE($1, title),
            description = COALESCE($2, description),
            location = COALESCE($3, location),
            job_type = COALESCE($4, job_type),
            required_skills = COALESCE($5, required_skills),
            is_active = COALESCE($6, is_active),
            updated_at = NOW()
        WHERE id = $7 AND company_id = $8
        RETURNING *
        "#,
    )
    .bind(update.title)
    .bind(update.description)
    .bind(update.location)
    .bind(update.job_type.map(|t| t.as_str()))
    .bind(update.required_skills)
    .bind(update.is_active)
    .bind(job_id)
    .bind(company_id)
    .fetch_optional(pool)
    .await
}
