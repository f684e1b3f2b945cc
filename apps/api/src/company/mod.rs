// Company endpoints: dashboard, postings, applicant triage.

pub mod handlers;
