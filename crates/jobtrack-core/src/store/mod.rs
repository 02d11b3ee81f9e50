//! JobStore: the authoritative job sequence and its persistence mirror.
//!
//! Design:
//! - The store only exists after `load`, so nothing can mutate it before the
//!   slot has been read.
//! - Every mutation rewrites the full sequence to the slot (last write wins).
//! - Mutation takes `&mut self`; there is exactly one actor.

pub mod codec;

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{
    JobId, JobRecord, JobStatus, NewJob, StatusFilter, StoreError, StoreEvent,
};
use crate::observability::StatusCounts;
use crate::ports::{ChangeListener, Clock, IdGenerator, KeyValueSlot};

/// Slot key used when none is configured.
pub const DEFAULT_SLOT_KEY: &str = "jobs";

pub struct JobStore<S, G> {
    slot: S,
    ids: G,
    key: String,
    jobs: Vec<JobRecord>,
    active_filter: StatusFilter,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl<S: KeyValueSlot, G: IdGenerator> JobStore<S, G> {
    /// Read the slot and install its contents.
    ///
    /// A missing slot, a failed read or an unparsable value all give an empty
    /// store. Records that had to be given a fresh id are written back once.
    pub fn load(slot: S, ids: G, key: impl Into<String>) -> Self {
        let key = key.into();
        let mut store = Self {
            slot,
            ids,
            key,
            jobs: Vec::new(),
            active_filter: StatusFilter::All,
            listeners: Vec::new(),
        };

        let text = match store.slot.read(&store.key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(key = %store.key, "slot is empty, starting with no jobs");
                return store;
            }
            Err(e) => {
                warn!(key = %store.key, error = %e, "could not read slot, starting with no jobs");
                return store;
            }
        };

        match codec::decode(&text, &store.ids) {
            Ok(decoded) => {
                store.jobs = decoded.records;
                debug!(key = %store.key, count = store.jobs.len(), "jobs loaded");
                if decoded.reassigned > 0 {
                    info!(
                        count = decoded.reassigned,
                        "assigned fresh ids to stored jobs"
                    );
                    if let Some(reason) = store.persist() {
                        warn!(%reason, "could not write repaired ids back");
                    }
                }
            }
            Err(e) => {
                warn!(key = %store.key, error = %e, "slot value is malformed, starting with no jobs");
            }
        }
        store
    }

    /// Append a new `Applied` record.
    ///
    /// Rejected input leaves the store untouched and notifies nobody.
    pub fn add(&mut self, job: NewJob) -> Result<JobId, StoreError> {
        job.validate()?;

        let taken: HashSet<JobId> = self.jobs.iter().map(JobRecord::id).collect();
        let id = codec::fresh_id(&self.ids, &taken);
        let record = JobRecord::new(id, job);
        info!(%id, company = %record.company, role = %record.role, "job added");

        self.jobs.push(record);
        self.commit(StoreEvent::Added(id));
        Ok(id)
    }

    /// Replace the status of `id` in place. Returns `false` on a lookup miss.
    ///
    /// Setting the status a record already has is a no-op: no write, no event.
    pub fn update_status(&mut self, id: JobId, status: JobStatus) -> bool {
        let Some(record) = self.jobs.iter_mut().find(|job| job.id() == id) else {
            debug!(%id, "update_status: no such job");
            return false;
        };

        let from = record.status;
        if from == status {
            debug!(%id, %status, "update_status: status unchanged");
            return true;
        }
        record.status = status;
        info!(%id, %from, to = %status, "job status changed");

        self.commit(StoreEvent::StatusChanged {
            id,
            from,
            to: status,
        });
        true
    }

    /// Like `update_status`, for a status that arrives as text.
    ///
    /// Anything other than the four status names is rejected before lookup.
    pub fn update_status_str(&mut self, id: JobId, status: &str) -> Result<bool, StoreError> {
        let status = status.parse::<JobStatus>()?;
        Ok(self.update_status(id, status))
    }

    /// Remove the record with `id`. Returns `false` on a lookup miss.
    pub fn delete(&mut self, id: JobId) -> bool {
        let Some(index) = self.jobs.iter().position(|job| job.id() == id) else {
            debug!(%id, "delete: no such job");
            return false;
        };

        let removed = self.jobs.remove(index);
        info!(%id, company = %removed.company, "job deleted");

        self.commit(StoreEvent::Deleted(id));
        true
    }

    /// Records passing `filter`, in stored order.
    pub fn filtered_view(&self, filter: StatusFilter) -> Vec<&JobRecord> {
        self.jobs
            .iter()
            .filter(|job| filter.matches(job.status))
            .collect()
    }

    /// `filtered_view` under the active filter.
    pub fn visible(&self) -> Vec<&JobRecord> {
        self.filtered_view(self.active_filter)
    }

    pub fn active_filter(&self) -> StatusFilter {
        self.active_filter
    }

    /// Change the view selector. The sequence and the slot are not touched.
    pub fn set_filter(&mut self, filter: StatusFilter) {
        if self.active_filter == filter {
            return;
        }
        self.active_filter = filter;
        self.notify(&StoreEvent::FilterChanged(filter));
    }

    /// Records whose follow-up date is `on`, in stored order.
    pub fn follow_ups_due(&self, on: NaiveDate) -> Vec<&JobRecord> {
        self.jobs.iter().filter(|job| job.is_due_on(on)).collect()
    }

    pub fn follow_ups_due_today(&self, clock: &impl Clock) -> Vec<&JobRecord> {
        self.follow_ups_due(clock.today())
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts::tally(&self.jobs)
    }

    pub fn jobs(&self) -> &[JobRecord] {
        &self.jobs
    }

    pub fn get(&self, id: JobId) -> Option<&JobRecord> {
        self.jobs.iter().find(|job| job.id() == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Register a listener for every later state change.
    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Persist, then tell listeners what changed (and whether the write failed).
    fn commit(&mut self, event: StoreEvent) {
        let failure = self.persist();
        self.notify(&event);
        if let Some(reason) = failure {
            warn!(key = %self.key, %reason, "could not persist jobs, change kept in memory only");
            self.notify(&StoreEvent::PersistFailed { reason });
        }
    }

    /// Overwrite the slot with the full sequence. Returns the failure reason, if any.
    fn persist(&mut self) -> Option<String> {
        let text = match codec::encode(&self.jobs) {
            Ok(text) => text,
            Err(e) => return Some(e.to_string()),
        };
        match self.slot.write(&self.key, &text) {
            Ok(()) => {
                debug!(key = %self.key, count = self.jobs.len(), "jobs persisted");
                None
            }
            Err(e) => Some(e.to_string()),
        }
    }

    fn notify(&self, event: &StoreEvent) {
        for listener in &self.listeners {
            listener.on_change(event);
        }
    }
}
