use askama::Template;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;

#[derive(Template)]
#[template(path = "jobs.html")]
pub struct JobsPage<'a> {
    pub service_name: &'a str,
    pub search: &'a str,
    /// Hidden inputs that keep the current sort when the search form submits.
    pub sort_params: Vec<(&'static str, String)>,
    pub sort_options: Vec<SortOption>,
    pub company_header: HeaderLink,
    pub publish_date_header: HeaderLink,
    pub rows: Vec<JobRow>,
    pub pages: Vec<PageLink>,
}

pub struct SortOption {
    pub label: &'static str,
    pub href: String,
    pub selected: bool,
}

pub struct HeaderLink {
    pub href: String,
    /// ▲, ▼ or empty when the column is not the sort key
    pub indicator: &'static str,
}

pub struct JobRow {
    pub id: u32,
    pub company: String,
    pub logo: String,
    pub initial: String,
    pub job_name: String,
    pub description: String,
    pub status: String,
    pub work_type: String,
    pub publish_date: String,
    pub created_by: String,
}

impl From<JobEntry> for JobRow {
    fn from(job: JobEntry) -> Self {
        JobRow {
            id: job.id,
            initial: job.initial(),
            publish_date: job.publish_date_display(),
            status: job.status.to_string(),
            company: job.company,
            logo: job.company_logo,
            job_name: job.job_name,
            description: job.description,
            work_type: job.work_type,
            created_by: job.created_by,
        }
    }
}

pub struct PageLink {
    pub number: u32,
    pub current: bool,
}
