use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::{ApplicationRow, ApplicationStatus};

/// Creates an `Applied` application. The database holds a unique index on
/// (job_id, applicant_id); a second attempt fails with a unique violation.
pub async fn insert_application(
    pool: &PgPool,
    job_id: Uuid,
    applicant_id: Uuid,
) -> Result<ApplicationRow, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        INSERT INTO applications (job_id, applicant_id, status)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(job_id)
    .bind(applicant_id)
    .bind(ApplicationStatus::Applied.as_str())
    .fetch_one(pool)
    .await
}

/// A seeker's applications, newest first.
pub async fn list_for_applicant(
    pool: &PgPool,
    applicant_id: Uuid,
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE applicant_id = $1 ORDER BY applied_at DESC",
    )
    .bind(applicant_id)
    .fetch_all(pool)
    .await
}

/// Applications made to any of `job_ids`, newest first.
pub async fn list_for_jobs(
    pool: &PgPool,
    job_ids: &[Uuid],
) -> Result<Vec<ApplicationRow>, sqlx::Error> {
    if job_ids.is_empty() {
        return Ok(Vec::new());
    }
    sqlx::query_as::<_, ApplicationRow>(
        "SELECT * FROM applications WHERE job_id = ANY($1) ORDER BY applied_at DESC",
    )
    .bind(job_ids)
    .fetch_all(pool)
    .await
}

/// Sets the status of an application to one of `company_id`'s jobs.
/// Returns `None` if the application does not exist or belongs to another company.
pub async fn update_status(
    pool: &PgPool,
    company_id: Uuid,
    application_id: Uuid,
    status: ApplicationStatus,
) -> Result<Option<ApplicationRow>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRow>(
        r#"
        UPDATE applications a
        SET status = $1, updated_at = NOW()
        FROM jobs j
        WHERE a.id = $2 AND a.job_id = j.id AND j.company_id = $3
        RETURNING a.*
        "#,
    )
    .bind(status.as_str())
    .bind(application_id)
    .bind(company_id)
    .fetch_optional(pool)
    .await
}
