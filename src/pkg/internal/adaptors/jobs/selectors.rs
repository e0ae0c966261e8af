use crate::pkg::internal::{
    adaptors::jobs::spec::JobEntry,
    projection::{self, SortDirective},
    store::JobStore,
};

pub struct JobSelector<'a> {
    store: &'a JobStore,
}

impl<'a> JobSelector<'a> {
    pub fn new(store: &'a JobStore) -> Self {
        JobSelector { store }
    }

    pub fn get_by_id(&self, id: u32) -> Option<JobEntry> {
        self.store.all().iter().find(|j| j.id == id).cloned()
    }

    pub fn project(&self, search: &str, sort: Option<&SortDirective>) -> Vec<JobEntry> {
        let jobs = projection::project(self.store.all(), search, sort);
        tracing::debug!(
            "projected {} of {} jobs (search={:?}, sort={:?})",
            jobs.len(),
            self.store.len(),
            search,
            sort
        );
        jobs
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::internal::projection::{SortDirection, SortField};

    #[test]
    #[traced_test]
    fn test_select_from_seeded_store() {
        let store = JobStore::seeded();
        let selector = JobSelector::new(&store);
        assert_eq!(selector.project("", None).len(), 1);
        assert_eq!(selector.get_by_id(1).map(|j| j.company), Some("Meta".to_string()));
        assert!(selector.get_by_id(2).is_none());
        let directive = SortDirective::new(SortField::Company, SortDirection::Asc);
        assert_eq!(selector.project("HACKER", Some(&directive)).len(), 1);
        assert!(selector.project("google", None).is_empty());
        assert!(logs_contain("projected 0 of 1 jobs"));
    }
}
