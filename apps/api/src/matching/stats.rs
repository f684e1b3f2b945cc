use serde::{Deserialize, Serialize};

use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::models::job::JobRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyStats {
    pub total_jobs: usize,
    pub total_applicants: usize,
    pub pending_review: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeekerStats {
    pub applied: usize,
    pub in_review: usize,
    pub shortlisted: usize,
}

/// Counters for a company dashboard. Only active jobs and the applications
/// made to them are counted.
pub fn company_stats(jobs: &[JobRow], applications: &[ApplicationRow]) -> CompanyStats {
    let active: Vec<_> = jobs.iter().filter(|j| j.is_active).map(|j| j.id).collect();
    let relevant: Vec<_> = applications
        .iter()
        .filter(|app| active.contains(&app.job_id))
        .collect();

    CompanyStats {
        total_jobs: active.len(),
        total_applicants: relevant.len(),
        pending_review: relevant.iter().filter(|app| app.status.is_pending()).count(),
    }
}

pub fn seeker_stats(applications: &[ApplicationRow]) -> SeekerStats {
    let count = |status: ApplicationStatus| {
        applications
            .iter()
            .filter(|app| app.status == status)
            .count()
    };

    SeekerStats {
        applied: applications.len(),
        in_review: count(ApplicationStatus::InReview),
        shortlisted: count(ApplicationStatus::Shortlisted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::{detail, job, profile};
    use crate::models::profile::UserType;

    fn app(job: &JobRow, status: ApplicationStatus) -> ApplicationRow {
        detail(job, profile(UserType::Jobseeker, "Someone", &[]), status, 0).application
    }

    #[test]
    fn test_company_stats_count_active_jobs_only() {
        let live = job("Live", &[]);
        let mut closed = job("Closed", &[]);
        closed.is_active = false;

        let apps = vec![
            app(&live, ApplicationStatus::Applied),
            app(&live, ApplicationStatus::InReview),
            app(&live, ApplicationStatus::Accepted),
            app(&closed, ApplicationStatus::Applied),
        ];

        let stats = company_stats(&[live, closed], &apps);
        assert_eq!(
            stats,
            CompanyStats {
                total_jobs: 1,
                total_applicants: 3,
                pending_review: 2,
            }
        );
    }

    #[test]
    fn test_company_stats_without_jobs() {
        assert_eq!(company_stats(&[], &[]), CompanyStats::default());
    }

    #[test]
    fn test_seeker_stats() {
        let j = job("Any", &[]);
        let apps = vec![
            app(&j, ApplicationStatus::Applied),
            app(&j, ApplicationStatus::InReview),
            app(&j, ApplicationStatus::Shortlisted),
            app(&j, ApplicationStatus::Shortlisted),
            app(&j, ApplicationStatus::Rejected),
        ];
        let stats = seeker_stats(&apps);
        assert_eq!(stats.applied, 5);
        assert_eq!(stats.in_review, 1);
        assert_eq!(stats.shortlisted, 2);
    }
}
