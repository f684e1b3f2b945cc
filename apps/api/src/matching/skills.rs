//! Skill matching — case-insensitive bidirectional substring containment.
//!
//! Two skills overlap when either one, lower-cased, contains the other
//! (`"Java"` overlaps `"javascript"`). The list-level predicates are built
//! on that single comparison.

use serde::{Deserialize, Serialize};

/// Required skills partitioned by whether the candidate covers them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
}

/// True if either skill is a case-insensitive substring of the other.
pub fn skills_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// True if any of the candidate's skills overlaps `required`.
pub fn skill_is_covered<S: AsRef<str>>(required: &str, candidate: &[S]) -> bool {
    candidate
        .iter()
        .any(|skill| skills_overlap(skill.as_ref(), required))
}

/// The skill-match predicate.
///
/// True if any required skill overlaps any candidate skill. A posting that
/// lists no required skills matches every candidate.
pub fn skills_match<R: AsRef<str>, C: AsRef<str>>(required: &[R], candidate: &[C]) -> bool {
    required.is_empty() || has_skill_overlap(required, candidate)
}

/// Like [`skills_match`] but an empty required list never matches.
pub fn has_skill_overlap<R: AsRef<str>, C: AsRef<str>>(required: &[R], candidate: &[C]) -> bool {
    required
        .iter()
        .any(|req| skill_is_covered(req.as_ref(), candidate))
}

/// Splits `required` into covered and uncovered skills, keeping input order.
pub fn split_skills<R: AsRef<str>, C: AsRef<str>>(required: &[R], candidate: &[C]) -> SkillBreakdown {
    let (matching, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .map(|req| req.as_ref().to_string())
        .partition(|req| skill_is_covered(req, candidate));
    SkillBreakdown { matching, missing }
}

/// Parses a comma-separated form value into a skill list.
pub fn parse_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
