//! Slot codec: the job sequence as a JSON array.
//!
//! Encoding always writes the canonical shape (see `JobRecord`). Decoding also
//! accepts the shapes older app variants wrote: the date under `followUp` or
//! `date`, an empty date string for "no date", and records without a usable id.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::domain::{JobId, JobRecord, JobStatus};
use crate::ports::IdGenerator;

/// Wire shape accepted when reading the slot.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    #[serde(default)]
    id: Option<serde_json::Value>,
    company: String,
    role: String,
    #[serde(default)]
    status: JobStatus,
    #[serde(default, deserialize_with = "lenient_date")]
    follow_up_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    follow_up: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    date: Option<NaiveDate>,
}

impl StoredRecord {
    /// First non-empty of `followUpDate`, `followUp`, `date`.
    fn follow_up(&self) -> Option<NaiveDate> {
        self.follow_up_date.or(self.follow_up).or(self.date)
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Result of reading the slot.
#[derive(Debug)]
pub struct Decoded {
    pub records: Vec<JobRecord>,

    /// How many records were given a fresh id (missing, foreign or duplicate).
    pub reassigned: usize,
}

/// Parse the slot value. Any structural problem fails the whole value.
pub fn decode(text: &str, ids: &dyn IdGenerator) -> Result<Decoded, serde_json::Error> {
    let stored: Vec<StoredRecord> = serde_json::from_str(text)?;

    let mut seen = HashSet::with_capacity(stored.len());
    let mut reassigned = 0;
    let mut records = Vec::with_capacity(stored.len());

    for entry in stored {
        let existing = entry
            .id
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .and_then(|s| s.parse::<JobId>().ok())
            .filter(|id| !seen.contains(id));

        let id = match existing {
            Some(id) => id,
            None => {
                reassigned += 1;
                fresh_id(ids, &seen)
            }
        };
        seen.insert(id);

        let follow_up = entry.follow_up();
        records.push(JobRecord::restore(
            id,
            entry.company,
            entry.role,
            entry.status,
            follow_up,
        ));
    }

    Ok(Decoded {
        records,
        reassigned,
    })
}

pub fn encode(records: &[JobRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}

/// Next id from the generator that nobody in `taken` holds yet.
pub(crate) fn fresh_id(ids: &dyn IdGenerator, taken: &HashSet<JobId>) -> JobId {
    loop {
        let id = ids.generate_job_id();
        if !taken.contains(&id) {
            return id;
        }
    }
}
