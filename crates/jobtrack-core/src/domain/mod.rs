//! Domain model (ids, status, records, errors, events).

pub mod errors;
pub mod events;
pub mod ids;
pub mod job;
pub mod status;

pub use errors::{StoreError, ValidationError};
pub use events::StoreEvent;
pub use ids::{JobId, ParseJobIdError};
pub use job::{JobRecord, NewJob};
pub use status::{JobStatus, StatusFilter, UnknownStatus};
