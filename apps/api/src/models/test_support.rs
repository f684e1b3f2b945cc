//! Row builders shared by unit tests.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::application::{ApplicationDetail, ApplicationRow, ApplicationStatus};
use crate::models::job::{JobRow, JobType, JobWithCompanyRow};
use crate::models::profile::{ProfileRow, UserType};

pub fn profile(user_type: UserType, name: &str, skills: &[&str]) -> ProfileRow {
    ProfileRow {
        id: Uuid::new_v4(),
        user_type,
        full_name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        company_name: String::new(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience: String::new(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn job(title: &str, required: &[&str]) -> JobRow {
    JobRow {
        id: Uuid::new_v4(),
        company_id: Uuid::new_v4(),
        title: title.to_string(),
        description: format!("{title} role"),
        location: "Berlin".to_string(),
        job_type: JobType::FullTime,
        required_skills: required.iter().map(|s| s.to_string()).collect(),
        is_active: true,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn listing(job: JobRow, company_name: &str) -> JobWithCompanyRow {
    JobWithCompanyRow {
        job,
        company_full_name: "Pat Recruiter".to_string(),
        company_name: company_name.to_string(),
    }
}

pub fn detail(
    job: &JobRow,
    applicant: ProfileRow,
    status: ApplicationStatus,
    age_days: i64,
) -> ApplicationDetail {
    let applied_at = Utc::now() - Duration::days(age_days);
    ApplicationDetail {
        application: ApplicationRow {
            id: Uuid::new_v4(),
            job_id: job.id,
            applicant_id: applicant.id,
            status,
            applied_at,
            updated_at: applied_at,
        },
        job: job.clone(),
        applicant,
    }
}
