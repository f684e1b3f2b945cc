use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::job::JobRow;
use crate::models::profile::ProfileRow;
use crate::models::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    #[serde(rename = "In Review")]
    InReview,
    Shortlisted,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::Applied,
        ApplicationStatus::InReview,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Rejected,
        ApplicationStatus::Accepted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::InReview => "In Review",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Accepted => "Accepted",
        }
    }

    /// Still waiting on the company: counts toward "pending review".
    pub fn is_pending(&self) -> bool {
        matches!(self, ApplicationStatus::Applied | ApplicationStatus::InReview)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "application status",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An application with its job and applicant loaded alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationDetail {
    pub application: ApplicationRow,
    pub job: JobRow,
    pub applicant: ProfileRow,
}

/// An application with its job and the job's company, as seen by the applicant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeekerApplication {
    pub application: ApplicationRow,
    pub job: JobRow,
    pub company_full_name: String,
    pub company_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_display_labels() {
        assert_eq!(
            "In Review".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::InReview
        );
        assert!("in review".parse::<ApplicationStatus>().is_err());
        assert!("Hired".parse::<ApplicationStatus>().is_err());
    }

    #[test]
    fn test_pending_statuses() {
        let pending: Vec<_> = ApplicationStatus::ALL
            .into_iter()
            .filter(ApplicationStatus::is_pending)
            .collect();
        assert_eq!(
            pending,
            vec![ApplicationStatus::Applied, ApplicationStatus::InReview]
        );
    }

    #[test]
    fn test_status_serde_matches_as_str() {
        for status in ApplicationStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
