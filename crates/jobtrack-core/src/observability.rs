use serde::{Deserialize, Serialize};

use crate::domain::{JobRecord, JobStatus};

/// Per-status tallies of the job sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn tally<'a>(jobs: impl IntoIterator<Item = &'a JobRecord>) -> Self {
        let mut counts = StatusCounts::default();
        for job in jobs {
            counts.total += 1;
            match job.status {
                JobStatus::Applied => counts.applied += 1,
                JobStatus::Interview => counts.interview += 1,
                JobStatus::Offer => counts.offer += 1,
                JobStatus::Rejected => counts.rejected += 1,
            }
        }
        counts
    }

    pub fn get(&self, status: JobStatus) -> usize {
        match status {
            JobStatus::Applied => self.applied,
            JobStatus::Interview => self.interview,
            JobStatus::Offer => self.offer,
            JobStatus::Rejected => self.rejected,
        }
    }
}
