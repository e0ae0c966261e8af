use axum::{
    Json,
    extract::{Multipart, Path, Query, State, multipart::Field},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Local;
use serde::Deserialize;
use standard_error::{Interpolate, StandardError, Status};
use validator::Validate;

use crate::{
    conf::settings,
    pkg::{
        internal::{
            adaptors::jobs::{mutators::JobMutator, selectors::JobSelector, spec::JobEntry},
            logo,
            projection::{SortDirection, SortDirective, SortField},
        },
        server::state::AppState,
    },
    prelude::Result,
};

/// Editable part of a job, as sent by the create and edit dialogs.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    #[serde(default)]
    #[validate(length(min = 1, message = "company is required"))]
    pub company: String,
    /// `None` leaves an existing logo untouched, `Some("")` clears it.
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "job title is required"))]
    pub job_name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "work type is required"))]
    pub work_type: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: String,
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
}

impl ListQuery {
    pub fn directive(&self) -> Option<SortDirective> {
        SortDirective::from_parts(self.sort, self.direction)
    }
}

fn not_found(id: u32) -> StandardError {
    tracing::warn!("job {} not found", id);
    StandardError::new("ERR-JOB-404").code(StatusCode::NOT_FOUND)
}

fn validated(input: JobInput) -> Result<JobInput> {
    input.validate().map_err(|e| {
        StandardError::new("ERR-JOB-001")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })?;
    Ok(input)
}

async fn insert(state: &AppState, input: JobInput) -> JobEntry {
    let mut store = state.store.write().await;
    let job = JobMutator::new(&mut store).create(
        input,
        &settings.default_author,
        Local::now().date_naive(),
    );
    tracing::info!("created job {}: {} at {}", job.id, &job.job_name, &job.company);
    job
}

async fn replace(state: &AppState, id: u32, input: JobInput) -> Result<JobEntry> {
    let mut store = state.store.write().await;
    let job = JobMutator::new(&mut store)
        .update(id, input)
        .ok_or_else(|| not_found(id))?;
    tracing::info!("updated job {}", job.id);
    Ok(job)
}

async fn form_text(field: Field<'_>) -> Result<String> {
    field.text().await.map_err(|e| {
        StandardError::new("ERR-JOB-002")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })
}

/// Reads the multipart body posted by the page dialogs. The logo arrives as a
/// file and is stored inline as a `data:` URL.
async fn read_form(mut multipart: Multipart) -> Result<JobInput> {
    let mut input = JobInput::default();
    let mut remove_logo = false;
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        StandardError::new("ERR-JOB-002")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })? {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "company" => input.company = form_text(field).await?,
            "jobName" => input.job_name = form_text(field).await?,
            "description" => input.description = form_text(field).await?,
            "workType" => input.work_type = form_text(field).await?,
            "removeLogo" => {
                remove_logo = !form_text(field).await?.is_empty();
            }
            "companyLogo" => {
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|e| {
                    StandardError::new("ERR-JOB-002")
                        .interpolate_err(e.to_string())
                        .code(StatusCode::BAD_REQUEST)
                })?;
                if !data.is_empty() {
                    tracing::debug!("received {} byte logo", data.len());
                    input.company_logo = Some(logo::to_data_url(&data, content_type.as_deref()));
                }
            }
            // unread fields are skipped by the next `next_field` call
            _ => {}
        }
    }
    if remove_logo && input.company_logo.is_none() {
        input.company_logo = Some(String::new());
    }
    Ok(input)
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<JobEntry>>> {
    let store = state.store.read().await;
    let jobs = JobSelector::new(&store).project(&query.search, query.directive().as_ref());
    Ok(Json(jobs))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<JobEntry>> {
    let store = state.store.read().await;
    let job = JobSelector::new(&store)
        .get_by_id(id)
        .ok_or_else(|| not_found(id))?;
    Ok(Json(job))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<JobInput>,
) -> Result<(StatusCode, Json<JobEntry>)> {
    let input = validated(input)?;
    let job = insert(&state, input).await;
    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn create_from_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect> {
    let input = validated(read_form(multipart).await?)?;
    insert(&state, input).await;
    Ok(Redirect::to("/"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(input): Json<JobInput>,
) -> Result<Json<JobEntry>> {
    let input = validated(input)?;
    Ok(Json(replace(&state, id, input).await?))
}

pub async fn update_from_form(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    multipart: Multipart,
) -> Result<Redirect> {
    let input = validated(read_form(multipart).await?)?;
    replace(&state, id, input).await?;
    Ok(Redirect::to("/"))
}

/// htmx callers get sent back to the page, api callers just get the 204.
pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<u32>,
) -> Result<Response> {
    let mut store = state.store.write().await;
    if !JobMutator::new(&mut store).delete(id) {
        return Err(not_found(id));
    }
    tracing::info!("deleted job {}", id);
    if headers.contains_key("HX-Request") {
        return Ok((StatusCode::NO_CONTENT, [("HX-Redirect", "/")]).into_response());
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}
