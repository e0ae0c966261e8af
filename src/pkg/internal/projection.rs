//! Filter + sort view over the job collection.
//!
//! The projection is what the table renders: jobs whose company or title
//! contains the search term (case-insensitive), optionally ordered by one
//! sortable column. Inputs are never modified.

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[serde(rename = "company")]
    Company,
    #[serde(rename = "publishDate")]
    PublishDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Direction a column header click asks for: the opposite of the current
    /// one, ascending when nothing is selected yet.
    pub fn toggled(current: Option<SortDirection>) -> SortDirection {
        match current {
            Some(SortDirection::Asc) => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(SortField::Company),
            "publishDate" => Ok(SortField::PublishDate),
            other => Err(format!("unknown sort field: {}", other)),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {}", other)),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Company => write!(f, "company"),
            SortField::PublishDate => write!(f, "publishDate"),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        SortDirective { field, direction }
    }

    /// A directive exists only when both halves are present.
    pub fn from_parts(
        field: Option<SortField>,
        direction: Option<SortDirection>,
    ) -> Option<SortDirective> {
        Some(SortDirective::new(field?, direction?))
    }

    pub fn compare(&self, a: &JobEntry, b: &JobEntry) -> Ordering {
        let natural = match self.field {
            SortField::Company => a.company.cmp(&b.company),
            SortField::PublishDate => a.publish_date.cmp(&b.publish_date),
        };
        self.direction.apply(natural)
    }
}

/// True when `needle` (already lowercased) appears in the company or title.
fn matches(job: &JobEntry, needle: &str) -> bool {
    job.company.to_lowercase().contains(needle) || job.job_name.to_lowercase().contains(needle)
}

pub fn project(jobs: &[JobEntry], search: &str, sort: Option<&SortDirective>) -> Vec<JobEntry> {
    let mut projected: Vec<JobEntry> = if search.is_empty() {
        jobs.to_vec()
    } else {
        let needle = search.to_lowercase();
        jobs.iter().filter(|job| matches(job, &needle)).cloned().collect()
    };
    if let Some(directive) = sort {
        // stable: ties keep their input order
        projected.sort_by(|a, b| directive.compare(a, b));
    }
    projected
}
