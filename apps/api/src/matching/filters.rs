//! Client-side list filtering over fetched jobs and applications.
//!
//! Every filter is a pure intersection of independent predicates, so running
//! one twice over the same input yields the same output.

use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::matching::skills::{has_skill_overlap, skills_match};
use crate::models::application::{ApplicationDetail, ApplicationStatus, SeekerApplication};
use crate::models::job::{JobType, JobWithCompanyRow};

/// Company-side applicant filter. Unset fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicantFilter {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub job_id: Option<Uuid>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<ApplicationStatus>,
}

/// Seeker-side job browse filter. Unset fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobFilter {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub job_type: Option<JobType>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub location: Option<String>,
}

/// Seeker-side status filter over their own applications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusFilter {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<ApplicationStatus>,
}

/// Result of bulk-eliminating applicants with no overlapping skill.
#[derive(Debug, Clone)]
pub struct AutoFilterOutcome {
    pub kept: Vec<ApplicationDetail>,
    pub eliminated: usize,
    pub message: String,
}

/// Treats `?field=` the same as an absent field. Select boxes send an empty
/// value for "All".
fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw: Option<String> = Option::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => T::deserialize(serde::de::value::StrDeserializer::<D::Error>::new(value))
            .map(Some),
    }
}

fn normalized_search(search: &Option<String>) -> Option<String> {
    search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

impl ApplicantFilter {
    pub fn matches(&self, detail: &ApplicationDetail) -> bool {
        let matches_search = match normalized_search(&self.search) {
            None => true,
            Some(term) => {
                detail.applicant.full_name.to_lowercase().contains(&term)
                    || detail
                        .applicant
                        .skills
                        .iter()
                        .any(|skill| skill.to_lowercase().contains(&term))
            }
        };
        let matches_job = self
            .job_id
            .map_or(true, |id| detail.application.job_id == id);
        let matches_status = self
            .status
            .map_or(true, |status| detail.application.status == status);

        matches_search && matches_job && matches_status
    }
}

impl JobFilter {
    pub fn matches(&self, job: &JobWithCompanyRow) -> bool {
        let matches_search = match normalized_search(&self.search) {
            None => true,
            Some(term) => {
                job.job.title.to_lowercase().contains(&term)
                    || job.company_name.to_lowercase().contains(&term)
            }
        };
        let matches_type = self.job_type.map_or(true, |t| job.job.job_type == t);
        let matches_location = self
            .location
            .as_deref()
            .map_or(true, |loc| job.job.location == loc);

        matches_search && matches_type && matches_location
    }
}

pub fn filter_applications(
    applications: &[ApplicationDetail],
    filter: &ApplicantFilter,
) -> Vec<ApplicationDetail> {
    applications
        .iter()
        .filter(|detail| filter.matches(detail))
        .cloned()
        .collect()
}

pub fn filter_jobs(jobs: &[JobWithCompanyRow], filter: &JobFilter) -> Vec<JobWithCompanyRow> {
    jobs.iter().filter(|job| filter.matches(job)).cloned().collect()
}

pub fn filter_by_status(
    applications: &[SeekerApplication],
    status: Option<ApplicationStatus>,
) -> Vec<SeekerApplication> {
    applications
        .iter()
        .filter(|app| status.map_or(true, |s| app.application.status == s))
        .cloned()
        .collect()
}

/// Keeps applicants sharing at least one skill with the job they applied to.
/// Jobs without required skills keep every applicant.
pub fn auto_filter_applicants(applications: &[ApplicationDetail]) -> AutoFilterOutcome {
    let kept: Vec<ApplicationDetail> = applications
        .iter()
        .filter(|detail| skills_match(&detail.job.required_skills, &detail.applicant.skills))
        .cloned()
        .collect();
    let eliminated = applications.len() - kept.len();

    let message = if eliminated > 0 {
        format!(
            "Auto-filtered: {eliminated} applicant(s) eliminated due to missing required skills. Showing {} matching applicant(s).",
            kept.len()
        )
    } else {
        "All applicants have at least one matching skill!".to_string()
    };

    AutoFilterOutcome {
        kept,
        eliminated,
        message,
    }
}

/// Active jobs sharing at least one skill with the seeker, in input order,
/// capped at `limit`.
pub fn recommend_jobs(
    jobs: &[JobWithCompanyRow],
    seeker_skills: &[String],
    limit: usize,
) -> Vec<JobWithCompanyRow> {
    jobs.iter()
        .filter(|job| job.job.is_active && has_skill_overlap(&job.job.required_skills, seeker_skills))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::*;
    use crate::models::profile::UserType;

    fn sample_applications() -> (Vec<ApplicationDetail>, Uuid) {
        let backend = job("Backend Engineer", &["Rust", "SQL"]);
        let frontend = job("Frontend Engineer", &["React"]);
        let apps = vec![
            detail(
                &backend,
                profile(UserType::Jobseeker, "Ada Lovelace", &["rust", "PostgreSQL"]),
                ApplicationStatus::Applied,
                1,
            ),
            detail(
                &backend,
                profile(UserType::Jobseeker, "Bob Vue", &["Vue"]),
                ApplicationStatus::Rejected,
                2,
            ),
            detail(
                &frontend,
                profile(UserType::Jobseeker, "Cy React", &["ReactJS"]),
                ApplicationStatus::InReview,
                3,
            ),
        ];
        (apps, backend.id)
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let (apps, _) = sample_applications();
        let out = filter_applications(&apps, &ApplicantFilter::default());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_filter_by_job_and_status_is_intersection() {
        let (apps, backend_id) = sample_applications();
        let filter = ApplicantFilter {
            search: None,
            job_id: Some(backend_id),
            status: Some(ApplicationStatus::Applied),
        };
        let out = filter_applications(&apps, &filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].applicant.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_filter_is_idempotent() {
        let (apps, backend_id) = sample_applications();
        let filter = ApplicantFilter {
            search: Some("a".to_string()),
            job_id: Some(backend_id),
            status: None,
        };
        let once = filter_applications(&apps, &filter);
        let twice = filter_applications(&once, &filter);
        let ids = |v: &[ApplicationDetail]| v.iter().map(|d| d.application.id).collect::<Vec<_>>();
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(ids(&once), ids(&filter_applications(&apps, &filter)));
    }

    #[test]
    fn test_search_matches_name_or_skill_case_insensitive() {
        let (apps, _) = sample_applications();
        let by_skill = ApplicantFilter {
            search: Some("POSTGRES".to_string()),
            ..Default::default()
        };
        let out = filter_applications(&apps, &by_skill);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].applicant.full_name, "Ada Lovelace");

        let by_name = ApplicantFilter {
            search: Some("bob".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_applications(&apps, &by_name).len(), 1);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let (apps, _) = sample_applications();
        let filter = ApplicantFilter {
            search: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_applications(&apps, &filter).len(), 3);
    }

    #[test]
    fn test_auto_filter_eliminates_applicants_without_overlap() {
        let (apps, _) = sample_applications();
        let outcome = auto_filter_applicants(&apps);
        assert_eq!(outcome.eliminated, 1);
        assert_eq!(outcome.kept.len() + outcome.eliminated, apps.len());
        assert!(outcome.kept.iter().all(|d| d.applicant.full_name != "Bob Vue"));
        assert!(outcome.message.contains("1 applicant(s) eliminated"));
        assert!(outcome.message.contains("Showing 2 matching"));
    }

    #[test]
    fn test_auto_filter_keeps_all_for_jobs_without_requirements() {
        let open = job("Generalist", &[]);
        let apps = vec![detail(
            &open,
            profile(UserType::Jobseeker, "No Skills", &[]),
            ApplicationStatus::Applied,
            0,
        )];
        let outcome = auto_filter_applicants(&apps);
        assert_eq!(outcome.eliminated, 0);
        assert_eq!(outcome.message, "All applicants have at least one matching skill!");
    }

    #[test]
    fn test_job_filter_by_search_type_and_location() {
        let mut remote = job("Data Analyst", &["SQL"]);
        remote.job_type = JobType::Remote;
        remote.location = "Anywhere".to_string();
        let jobs = vec![
            listing(job("Rust Developer", &["Rust"]), "Ferris Labs"),
            listing(remote, "Numbers Inc"),
        ];

        let by_company = JobFilter {
            search: Some("ferris".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_jobs(&jobs, &by_company).len(), 1);

        let by_type = JobFilter {
            job_type: Some(JobType::Remote),
            ..Default::default()
        };
        let out = filter_jobs(&jobs, &by_type);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].job.title, "Data Analyst");

        let by_location = JobFilter {
            location: Some("Berlin".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_jobs(&jobs, &by_location)[0].job.title, "Rust Developer");
    }

    #[test]
    fn test_recommend_jobs_requires_overlap_and_respects_limit() {
        let mut inactive = job("Old Rust Role", &["Rust"]);
        inactive.is_active = false;
        let jobs = vec![
            listing(job("Rust One", &["Rust"]), "A"),
            listing(job("No Requirements", &[]), "B"),
            listing(inactive, "C"),
            listing(job("Rust Two", &["rustlang"]), "D"),
            listing(job("Rust Three", &["Rust", "Go"]), "E"),
            listing(job("Vue Only", &["Vue"]), "F"),
        ];
        let skills = vec!["rust".to_string()];

        let titles: Vec<_> = recommend_jobs(&jobs, &skills, 2)
            .into_iter()
            .map(|j| j.job.title)
            .collect();
        assert_eq!(titles, vec!["Rust One", "Rust Two"]);

        assert_eq!(recommend_jobs(&jobs, &skills, 10).len(), 3);
        assert!(recommend_jobs(&jobs, &[], 10).is_empty());
    }

    #[test]
    fn test_query_params_treat_empty_as_unset() {
        let filter: ApplicantFilter =
            serde_json::from_value(serde_json::json!({ "job_id": "", "status": "In Review" }))
                .unwrap();
        assert!(filter.job_id.is_none());
        assert_eq!(filter.status, Some(ApplicationStatus::InReview));

        let jobs: JobFilter =
            serde_json::from_value(serde_json::json!({ "job_type": "Part-time", "search": "" }))
                .unwrap();
        assert_eq!(jobs.job_type, Some(JobType::PartTime));
        assert!(jobs.search.is_none());
    }
}
