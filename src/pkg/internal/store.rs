use chrono::NaiveDate;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobStatus};

/// In-memory owner of the job collection.
///
/// Identifiers come from a counter that only moves forward, so an id is
/// never handed out twice for the lifetime of the store, deletions included.
#[derive(Debug, Clone)]
pub struct JobStore {
    pub(crate) jobs: Vec<JobEntry>,
    next_id: u32,
}

impl Default for JobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl JobStore {
    pub fn new() -> Self {
        JobStore {
            jobs: vec![],
            next_id: 1,
        }
    }

    /// Store holding the sample listing shown on a fresh page.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        let id = store.allocate_id();
        store.jobs.push(JobEntry {
            id,
            company: "Meta".into(),
            company_logo: "./meta-logo.png".into(),
            job_name: "Ethical Hacker".into(),
            description: "Lorem ipsum dolor sit amet.".into(),
            status: JobStatus::Draft,
            work_type: "Remote".into(),
            publish_date: NaiveDate::from_ymd_opt(2023, 10, 13).unwrap_or_default(),
            created_by: "Marie S.".into(),
        });
        store
    }

    pub(crate) fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn all(&self) -> &[JobEntry] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
