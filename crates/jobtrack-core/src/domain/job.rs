//! Job record and the input used to create one.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use super::ids::JobId;
use super::status::JobStatus;

/// One tracked application.
///
/// Design:
/// - `id` is fixed at creation; there is no setter.
/// - `status` is the only field that changes after creation.
/// - Serialized shape is the slot's wire format (camelCase, date omitted when absent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    id: JobId,
    pub company: String,
    pub role: String,
    pub status: JobStatus,
    #[serde(
        rename = "followUpDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub follow_up: Option<NaiveDate>,
}

impl JobRecord {
    /// Build a fresh record from validated input. Status always starts as `Applied`.
    pub fn new(id: JobId, job: NewJob) -> Self {
        Self {
            id,
            company: job.company,
            role: job.role,
            status: JobStatus::Applied,
            follow_up: job.follow_up,
        }
    }

    /// Rebuild a record read back from the slot.
    pub(crate) fn restore(
        id: JobId,
        company: String,
        role: String,
        status: JobStatus,
        follow_up: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            company,
            role,
            status,
            follow_up,
        }
    }

    pub fn id(&self) -> JobId {
        self.id
    }

    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.follow_up == Some(date)
    }
}

/// User input for `JobStore::add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub company: String,
    pub role: String,
    pub follow_up: Option<NaiveDate>,
}

impl NewJob {
    pub fn new(company: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            role: role.into(),
            follow_up: None,
        }
    }

    pub fn with_follow_up(mut self, date: NaiveDate) -> Self {
        self.follow_up = Some(date);
        self
    }

    /// Company and role must contain something other than whitespace.
    /// The values are kept as typed; only the emptiness check trims.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.company.trim().is_empty() {
            return Err(ValidationError::EmptyCompany);
        }
        if self.role.trim().is_empty() {
            return Err(ValidationError::EmptyRole);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use ulid::Ulid;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn new_record_starts_applied() {
        let id = JobId::from(Ulid::new());
        let record = JobRecord::new(id, NewJob::new("Acme", "Engineer"));

        assert_eq!(record.id(), id);
        assert_eq!(record.status, JobStatus::Applied);
        assert_eq!(record.follow_up, None);
    }

    #[rstest]
    #[case("", "Engineer", Err(ValidationError::EmptyCompany))]
    #[case("   ", "Engineer", Err(ValidationError::EmptyCompany))]
    #[case("Acme", "", Err(ValidationError::EmptyRole))]
    #[case("Acme", "\t\n", Err(ValidationError::EmptyRole))]
    #[case("Acme", "Engineer", Ok(()))]
    fn validate_requires_company_and_role(
        #[case] company: &str,
        #[case] role: &str,
        #[case] expected: Result<(), ValidationError>,
    ) {
        assert_eq!(NewJob::new(company, role).validate(), expected);
    }

    #[test]
    fn serializes_to_wire_shape() {
        let ulid = Ulid::new();
        let record = JobRecord::new(
            JobId::from(ulid),
            NewJob::new("Acme", "Engineer").with_follow_up(date("2024-05-01")),
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": ulid.to_string(),
                "company": "Acme",
                "role": "Engineer",
                "status": "Applied",
                "followUpDate": "2024-05-01",
            })
        );
    }

    #[test]
    fn absent_follow_up_is_omitted() {
        let record = JobRecord::new(JobId::from(Ulid::new()), NewJob::new("Globex", "Analyst"));
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("followUpDate").is_none());
    }

    #[test]
    fn is_due_on_compares_follow_up() {
        let record = JobRecord::new(
            JobId::from(Ulid::new()),
            NewJob::new("Acme", "Engineer").with_follow_up(date("2024-05-01")),
        );
        assert!(record.is_due_on(date("2024-05-01")));
        assert!(!record.is_due_on(date("2024-05-02")));
    }
}
