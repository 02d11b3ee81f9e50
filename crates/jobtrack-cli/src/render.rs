//! Terminal presentation of the store.
//!
//! Views go to stdout, notices and warnings to stderr.

use std::fmt::Write as _;

use jobtrack_core::observability::StatusCounts;
use jobtrack_core::{JobId, JobRecord, JobStatus, StoreError, StoreEvent};

const NO_DATE: &str = "No date";

/// Listener installed on the store.
pub fn change(event: &StoreEvent) {
    match event {
        StoreEvent::Added(id) => eprintln!("added {id}"),
        StoreEvent::StatusChanged { id, from, to } => eprintln!("{id}: {from} -> {to}"),
        StoreEvent::Deleted(id) => eprintln!("deleted {id}"),
        StoreEvent::PersistFailed { reason } => {
            eprintln!("warning: changes could not be saved ({reason})")
        }
        StoreEvent::FilterChanged(_) => {}
    }
}

pub fn rejected(error: &StoreError) {
    eprintln!("warning: {error}");
}

pub fn missing(id: JobId) {
    eprintln!("no job with id {id}");
}

pub fn total(count: usize) {
    println!("Total jobs: {count}");
}

pub fn table(jobs: Vec<&JobRecord>) {
    print!("{}", format_table(&jobs));
}

pub fn due(jobs: &[&JobRecord]) {
    match format_due(jobs) {
        Some(line) => println!("{line}"),
        None => println!("No follow-ups due."),
    }
}

pub fn counts(counts: &StatusCounts) {
    print!("{}", format_counts(counts));
}

fn format_table(jobs: &[&JobRecord]) -> String {
    let mut out = String::new();
    if jobs.is_empty() {
        out.push_str("No jobs yet.\n");
        return out;
    }

    let company_width = column_width("COMPANY", jobs.iter().map(|j| j.company.as_str()));
    let role_width = column_width("ROLE", jobs.iter().map(|j| j.role.as_str()));

    let _ = writeln!(
        out,
        "{:<31}  {:<company_width$}  {:<role_width$}  {:<9}  FOLLOW-UP",
        "ID", "COMPANY", "ROLE", "STATUS"
    );
    for job in jobs {
        let follow_up = job
            .follow_up
            .map(|d| d.to_string())
            .unwrap_or_else(|| NO_DATE.to_string());
        let _ = writeln!(
            out,
            "{:<31}  {:<company_width$}  {:<role_width$}  {:<9}  {}",
            job.id().to_string(),
            job.company,
            job.role,
            job.status.as_str(),
            follow_up
        );
    }
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(header.len())
}

fn format_due(jobs: &[&JobRecord]) -> Option<String> {
    if jobs.is_empty() {
        return None;
    }
    let companies: Vec<&str> = jobs.iter().map(|j| j.company.as_str()).collect();
    Some(format!("Follow-up today: {}", companies.join(", ")))
}

fn format_counts(counts: &StatusCounts) -> String {
    let mut out = String::new();
    for status in JobStatus::ALL {
        let _ = writeln!(out, "{:<9}  {}", status.as_str(), counts.get(status));
    }
    let _ = writeln!(out, "{:<9}  {}", "Total", counts.total);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobtrack_core::impls::InMemorySlot;
    use jobtrack_core::ports::{IdGenerator, SystemClock, UlidGenerator};
    use jobtrack_core::{JobStore, NewJob};

    fn store(slot: &InMemorySlot) -> JobStore<&InMemorySlot, UlidGenerator<SystemClock>> {
        let mut store = JobStore::load(slot, UlidGenerator::new(SystemClock), "jobs");
        store
            .add(NewJob::new("Acme", "Engineer").with_follow_up("2024-05-01".parse().unwrap()))
            .unwrap();
        store.add(NewJob::new("Globex", "Analyst")).unwrap();
        store
    }

    #[test]
    fn change_handles_every_event() {
        let id = UlidGenerator::new(SystemClock).generate_job_id();
        let events = [
            StoreEvent::Added(id),
            StoreEvent::StatusChanged {
                id,
                from: JobStatus::Applied,
                to: JobStatus::Offer,
            },
            StoreEvent::Deleted(id),
            StoreEvent::FilterChanged(JobStatus::Offer.into()),
            StoreEvent::PersistFailed {
                reason: "quota exceeded".to_string(),
            },
        ];
        for event in &events {
            // exhaustive so a new variant must be rendered before this compiles
            match event {
                StoreEvent::Added(_)
                | StoreEvent::StatusChanged { .. }
                | StoreEvent::Deleted(_)
                | StoreEvent::FilterChanged(_)
                | StoreEvent::PersistFailed { .. } => change(event),
            }
        }
    }

    #[test]
    fn empty_table() {
        assert_eq!(format_table(&[]), "No jobs yet.\n");
    }

    #[test]
    fn table_has_one_row_per_job() {
        let slot = InMemorySlot::new();
        let store = store(&slot);

        let text = format_table(&store.visible());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Acme") && lines[1].contains("2024-05-01"));
        assert!(lines[2].contains("Globex") && lines[2].contains(NO_DATE));
        assert!(lines[1].contains(&store.jobs()[0].id().to_string()));
    }

    #[test]
    fn due_lists_companies() {
        let slot = InMemorySlot::new();
        let store = store(&slot);

        let due = store.follow_ups_due("2024-05-01".parse().unwrap());
        assert_eq!(format_due(&due).as_deref(), Some("Follow-up today: Acme"));
        assert_eq!(format_due(&[]), None);
    }

    #[test]
    fn counts_end_with_total() {
        let slot = InMemorySlot::new();
        let store = store(&slot);

        let text = format_counts(&store.counts());
        assert!(text.starts_with("Applied    2\n"));
        assert!(text.ends_with("Total      2\n"));
    }
}
