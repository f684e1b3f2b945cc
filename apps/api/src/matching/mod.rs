// Pure, in-memory logic over already-fetched records: skill matching,
// list filtering, dashboard counters, and response shaping.
// Nothing in here touches the database.

pub mod filters;
pub mod skills;
pub mod stats;
pub mod views;
