use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::{
    conf::settings,
    pkg::{
        internal::{
            adaptors::jobs::selectors::JobSelector,
            projection::{SortDirection, SortDirective, SortField},
        },
        server::{
            handlers::jobs::ListQuery,
            state::AppState,
            uispec::{HeaderLink, JobRow, JobsPage, PageLink, SortOption},
        },
    },
    prelude::Result,
};

const SORT_MENU: [(&str, SortField, SortDirection); 4] = [
    ("Company A to Z", SortField::Company, SortDirection::Asc),
    ("Company Z to A", SortField::Company, SortDirection::Desc),
    ("Newest", SortField::PublishDate, SortDirection::Desc),
    ("Oldest", SortField::PublishDate, SortDirection::Asc),
];

fn page_href(search: &str, directive: Option<SortDirective>) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if !search.is_empty() {
        query.append_pair("search", search);
    }
    if let Some(d) = directive {
        query
            .append_pair("sort", &d.field.to_string())
            .append_pair("direction", &d.direction.to_string());
    }
    let query = query.finish();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", query)
    }
}

/// Clicking a sortable header flips whatever direction is active, even if a
/// different column currently holds the sort.
fn header_link(search: &str, field: SortField, current: Option<SortDirective>) -> HeaderLink {
    let next = SortDirective::new(field, SortDirection::toggled(current.map(|d| d.direction)));
    let indicator = match current {
        Some(d) if d.field == field && d.direction == SortDirection::Asc => "▲",
        Some(d) if d.field == field => "▼",
        _ => "",
    };
    HeaderLink {
        href: page_href(search, Some(next)),
        indicator,
    }
}

pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>> {
    let directive = query.directive();
    let jobs = {
        let store = state.store.read().await;
        JobSelector::new(&store).project(&query.search, directive.as_ref())
    };
    let sort_params = directive
        .map(|d| {
            vec![
                ("sort", d.field.to_string()),
                ("direction", d.direction.to_string()),
            ]
        })
        .unwrap_or_default();
    let sort_options = SORT_MENU
        .into_iter()
        .map(|(label, field, direction)| {
            let option = SortDirective::new(field, direction);
            SortOption {
                label,
                href: page_href(&query.search, Some(option)),
                selected: directive == Some(option),
            }
        })
        .collect();
    let pages = (1..=settings.page_count)
        .map(|number| PageLink {
            number,
            current: number == settings.current_page,
        })
        .collect();

    let template = JobsPage {
        service_name: &settings.service_name,
        search: &query.search,
        sort_params,
        sort_options,
        company_header: header_link(&query.search, SortField::Company, directive),
        publish_date_header: header_link(&query.search, SortField::PublishDate, directive),
        rows: jobs.into_iter().map(JobRow::from).collect(),
        pages,
    };

    Ok(Html(template.render()?))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::*;
    use crate::pkg::{internal::store::JobStore, server::router::routes};

    async fn render(uri: &str) -> String {
        let app = routes(AppState::with_store(JobStore::seeded()));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    #[traced_test]
    async fn test_home_renders_seeded_job() {
        let html = render("/").await;
        assert!(html.contains("Ethical Hacker"));
        assert!(html.contains("13 Oct 2023"));
        assert!(html.contains("DRAFT"));
        assert!(html.contains("Marie S."));
    }

    #[tokio::test]
    async fn test_home_applies_search() {
        let html = render("/?search=google").await;
        assert!(!html.contains("Ethical Hacker"));
        assert!(html.contains("No jobs match"));
    }

    #[test]
    fn test_header_toggles_direction() {
        let asc = SortDirective::new(SortField::Company, SortDirection::Asc);
        let link = header_link("", SortField::Company, Some(asc));
        assert_eq!(link.href, "/?sort=company&direction=desc");
        assert_eq!(link.indicator, "▲");

        let link = header_link("meta labs", SortField::PublishDate, Some(asc));
        assert_eq!(link.href, "/?search=meta+labs&sort=publishDate&direction=desc");
        assert_eq!(link.indicator, "");

        let link = header_link("", SortField::PublishDate, None);
        assert_eq!(link.href, "/?sort=publishDate&direction=asc");
        assert_eq!(page_href("", None), "/");
    }
}
