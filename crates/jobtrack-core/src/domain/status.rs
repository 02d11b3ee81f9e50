//! Application status and the view filter built on top of it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stage of a job application.
///
/// State transitions:
/// - A new record always starts as `Applied`.
/// - Any status may follow any other (no enforced graph).
/// - There is no terminal status; a record can be deleted from any of them.
///
/// Serialized with the exact variant names (`"Applied"`, `"Interview"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobStatus {
    #[default]
    Applied,
    Interview,
    Offer,
    Rejected,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Applied,
        JobStatus::Interview,
        JobStatus::Offer,
        JobStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Applied => "Applied",
            JobStatus::Interview => "Interview",
            JobStatus::Offer => "Offer",
            JobStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for JobStatus {
    type Err = UnknownStatus;

    /// Matching is exact (case-sensitive), the same strings the slot stores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// View-only selector over the job sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl StatusFilter {
    /// Does a record with `status` pass this filter?
    pub fn matches(self, status: JobStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl From<JobStatus> for StatusFilter {
    fn from(status: JobStatus) -> Self {
        StatusFilter::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("All"),
            StatusFilter::Only(status) => status.fmt(f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(StatusFilter::All);
        }
        s.parse::<JobStatus>().map(StatusFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Applied", JobStatus::Applied)]
    #[case("Interview", JobStatus::Interview)]
    #[case("Offer", JobStatus::Offer)]
    #[case("Rejected", JobStatus::Rejected)]
    fn parses_known_statuses(#[case] input: &str, #[case] expected: JobStatus) {
        assert_eq!(input.parse::<JobStatus>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }

    #[rstest]
    #[case("NotAStatus")]
    #[case("applied")]
    #[case("")]
    #[case("All")]
    fn rejects_unknown_statuses(#[case] input: &str) {
        assert_eq!(
            input.parse::<JobStatus>(),
            Err(UnknownStatus(input.to_string()))
        );
    }

    #[test]
    fn default_status_is_applied() {
        assert_eq!(JobStatus::default(), JobStatus::Applied);
    }

    #[test]
    fn serde_uses_variant_names() {
        let json = serde_json::to_string(&JobStatus::Interview).unwrap();
        assert_eq!(json, "\"Interview\"");
        assert!(serde_json::from_str::<JobStatus>("\"Pending\"").is_err());
    }

    #[test]
    fn filter_all_matches_everything() {
        for status in JobStatus::ALL {
            assert!(StatusFilter::All.matches(status));
        }
    }

    #[test]
    fn filter_only_matches_one_status() {
        let filter = StatusFilter::from(JobStatus::Offer);
        assert!(filter.matches(JobStatus::Offer));
        assert!(!filter.matches(JobStatus::Applied));
        assert!(!filter.matches(JobStatus::Rejected));
    }

    #[rstest]
    #[case("All", StatusFilter::All)]
    #[case("Offer", StatusFilter::Only(JobStatus::Offer))]
    fn parses_filters(#[case] input: &str, #[case] expected: StatusFilter) {
        assert_eq!(input.parse::<StatusFilter>().unwrap(), expected);
        assert_eq!(expected.to_string(), input);
    }
}
