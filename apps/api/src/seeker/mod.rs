// Job-seeker endpoints: dashboard, browsing, applying, tracking.

pub mod handlers;
