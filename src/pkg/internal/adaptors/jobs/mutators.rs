use chrono::NaiveDate;

use crate::pkg::internal::adaptors::jobs::spec::{JobEntry, JobStatus};
use crate::pkg::internal::store::JobStore;
use crate::pkg::server::handlers::jobs::JobInput;

pub struct JobMutator<'a> {
    store: &'a mut JobStore,
}

impl<'a> JobMutator<'a> {
    pub fn new(store: &'a mut JobStore) -> Self {
        JobMutator { store }
    }

    /// Appends a new draft listing under a freshly allocated id.
    pub fn create(&mut self, job: JobInput, created_by: &str, published: NaiveDate) -> JobEntry {
        let entry = JobEntry {
            id: self.store.allocate_id(),
            company: job.company,
            company_logo: job.company_logo.unwrap_or_default(),
            job_name: job.job_name,
            description: job.description,
            status: JobStatus::Draft,
            work_type: job.work_type,
            publish_date: published,
            created_by: created_by.to_string(),
        };
        self.store.jobs.push(entry.clone());
        entry
    }

    /// Replaces the editable fields. Id, status, publish date and author stay
    /// as they were; a logo of `None` keeps the current one.
    pub fn update(&mut self, id: u32, job: JobInput) -> Option<JobEntry> {
        let entry = self.store.jobs.iter_mut().find(|j| j.id == id)?;
        entry.company = job.company;
        entry.job_name = job.job_name;
        entry.description = job.description;
        entry.work_type = job.work_type;
        if let Some(logo) = job.company_logo {
            entry.company_logo = logo;
        }
        Some(entry.clone())
    }

    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.store.jobs.len();
        self.store.jobs.retain(|j| j.id != id);
        self.store.jobs.len() < before
    }
}
