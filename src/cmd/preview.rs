use standard_error::{Interpolate, StandardError};

use crate::{
    pkg::{
        internal::{
            adaptors::jobs::selectors::JobSelector,
            projection::{SortDirection, SortDirective, SortField},
        },
        server::state::AppState,
    },
    prelude::Result,
};

pub fn print(search: &str, sort: Option<SortField>, direction: Option<SortDirection>) -> Result<()> {
    let store = AppState::initial_store();
    let directive = SortDirective::from_parts(sort, direction);
    if directive.is_none() && (sort.is_some() || direction.is_some()) {
        tracing::warn!("both --sort and --direction are needed to sort, ignoring");
    }
    let jobs = JobSelector::new(&store).project(search, directive.as_ref());
    let out = serde_json::to_string_pretty(&jobs)
        .map_err(|e| StandardError::new("ERR-JOB-000").interpolate_err(e.to_string()))?;
    println!("{}", out);
    Ok(())
}
