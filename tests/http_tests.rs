//! End-to-end tests for the HTTP surface

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use major_event_log::{
    create_router, AppConfig, AppState, Event, EventRepository, NewEvent, Outcome,
    SqliteEventRepository,
};

fn new_event(title: &str, outcome: Outcome, day: i64) -> NewEvent {
    NewEvent {
        title: title.to_string(),
        detail: "none".to_string(),
        outcome,
        outcome_detail: "none".to_string(),
        date: Utc.with_ymd_and_hms(2018, 1, 1, 12, 0, 0).unwrap() + Duration::days(day),
        contact_name: "John Doe".to_string(),
        contact_email: "admin@email.com".to_string(),
    }
}

fn setup() -> (Arc<SqliteEventRepository>, Router) {
    let repo = Arc::new(SqliteEventRepository::open_in_memory().unwrap());
    let state = Arc::new(AppState::new(repo.clone(), AppConfig::default()));
    (repo, create_router(state))
}

fn seed(repo: &SqliteEventRepository, count: i64) -> Vec<Event> {
    (0..count)
        .map(|i| {
            repo.create_event(new_event(&format!("event {i}"), Outcome::Success, i))
                .unwrap()
        })
        .collect()
}

async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

const MALFORMED_IDS: [&str; 2] = ["abcd-1234", "z7768443-04z2-45q2-y71m-2w716px13uzz"];
const UNKNOWN_ID: &str = "d7768443-04e2-45d2-b71f-2b716bf13f13";

// ----------------------------------------------------------------------------
// HTML pages
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_index_lists_events_newest_first() {
    let (repo, app) = setup();
    seed(&repo, 3);

    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(content_type(&response).starts_with("text/html"));

    let html = body_text(response).await;
    let newest = html.find("event 2").unwrap();
    let oldest = html.find("event 0").unwrap();
    assert!(newest < oldest);
}

#[tokio::test]
async fn test_index_pages() {
    let (repo, app) = setup();
    seed(&repo, 12);

    let response = get(&app, "/?page=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("event 1<"));
    assert!(html.contains("event 0<"));
    assert!(!html.contains("event 2<"));

    assert_eq!(get(&app, "/?page=last").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/?page=3").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(get(&app, "/?page=zero").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_index_with_no_events() {
    let (_repo, app) = setup();
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("No events have been recorded."));
}

#[tokio::test]
async fn test_event_details() {
    let (repo, app) = setup();
    let event = repo
        .create_event(new_event("Storage migration", Outcome::Success, 0))
        .unwrap();

    let response = get(&app, &format!("/event/{}/", event.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Storage migration"));
    assert!(html.contains(&format!("/event/{}.premis.xml", event.id)));
}

#[tokio::test]
async fn test_event_details_not_found() {
    let (_repo, app) = setup();
    for id in MALFORMED_IDS.iter().chain([&UNKNOWN_ID]) {
        let response = get(&app, &format!("/event/{id}/")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "id {id}");
    }
}

#[tokio::test]
async fn test_bare_id_redirects_to_details() {
    let (repo, app) = setup();
    let event = repo
        .create_event(new_event("Outage", Outcome::Failure, 0))
        .unwrap();

    let response = get(&app, &format!("/event/{}", event.id)).await;
    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        &format!("/event/{}/", event.id)
    );

    assert_eq!(get(&app, "/event/abcd-1234").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_about_and_health() {
    let (_repo, app) = setup();
    assert_eq!(get(&app, "/about/").await.status(), StatusCode::OK);

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "OK");
}

// ----------------------------------------------------------------------------
// Per-event exports
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_premis_export() {
    let (repo, app) = setup();
    let failure = repo
        .create_event(new_event("Disk failure", Outcome::Failure, 0))
        .unwrap();
    let success = repo
        .create_event(new_event("Fixity audit", Outcome::Success, 1))
        .unwrap();

    let response = get(&app, &format!("/event/{}.premis.xml", failure.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/xml; charset=utf-8");
    let xml = body_text(response).await;
    assert!(xml.contains("<premis:eventOutcome>Failure</premis:eventOutcome>"));
    assert!(xml.contains(&failure.id.to_string()));

    let response = get(&app, &format!("/event/{}.premis.xml", success.id)).await;
    let xml = body_text(response).await;
    assert!(xml.contains("<premis:eventOutcome>Success</premis:eventOutcome>"));
}

#[tokio::test]
async fn test_atom_export() {
    let (repo, app) = setup();
    let event = repo
        .create_event(new_event("Fixity audit", Outcome::Success, 0))
        .unwrap();

    let response = get(&app, &format!("/event/{}.xml", event.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "text/xml; charset=utf-8");
    let xml = body_text(response).await;
    assert!(xml.contains("<title>Fixity audit</title>"));
    assert!(xml.contains(&format!("<id>urn:uuid:{}</id>", event.id)));
    assert!(xml.contains(&format!(
        "<link href=\"http://localhost:8000/event/{}/\"/>",
        event.id
    )));
}

#[tokio::test]
async fn test_exports_not_found() {
    let (_repo, app) = setup();
    for id in MALFORMED_IDS.iter().chain([&UNKNOWN_ID]) {
        for suffix in [".xml", ".premis.xml"] {
            let response = get(&app, &format!("/event/{id}{suffix}")).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{id}{suffix}");
        }
    }
}

#[tokio::test]
async fn test_reads_leave_entry_timestamps_alone() {
    let (repo, app) = setup();
    let event = repo
        .create_event(new_event("Fixity audit", Outcome::Success, 0))
        .unwrap();

    for uri in [
        format!("/event/{}/", event.id),
        format!("/event/{}.xml", event.id),
        format!("/event/{}.premis.xml", event.id),
        "/feed/".to_string(),
    ] {
        assert_eq!(get(&app, &uri).await.status(), StatusCode::OK);
    }

    let stored = repo.get_event(event.id).unwrap().unwrap();
    assert_eq!(stored.entry_created, event.entry_created);
    assert_eq!(stored.entry_modified, event.entry_modified);
}

// ----------------------------------------------------------------------------
// Feed
// ----------------------------------------------------------------------------

fn entry_count(xml: &str) -> usize {
    xml.matches("<entry>").count()
}

#[tokio::test]
async fn test_feed_middle_page() {
    let (repo, app) = setup();
    seed(&repo, 31);

    let response = get(&app, "/feed/?p=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/xml");

    let xml = body_text(response).await;
    assert!(xml.contains(r#"<link href="http://localhost:8000/feed/?p=1" rel="first"/>"#));
    assert!(xml.contains(r#"<link href="http://localhost:8000/feed/?p=1" rel="previous"/>"#));
    assert!(xml.contains(r#"<link href="http://localhost:8000/feed/?p=3" rel="next"/>"#));
    assert!(xml.contains(r#"<link href="http://localhost:8000/feed/?p=4" rel="last"/>"#));
    assert_eq!(entry_count(&xml), 10);
}

#[tokio::test]
async fn test_feed_first_and_last_pages() {
    let (repo, app) = setup();
    seed(&repo, 31);

    let first = body_text(get(&app, "/feed/").await).await;
    assert!(!first.contains(r#"rel="previous""#));
    assert!(first.contains(r#"rel="next""#));
    assert!(first.contains("<title>event 30</title>"));

    let last = body_text(get(&app, "/feed/?p=4").await).await;
    assert!(!last.contains(r#"rel="next""#));
    assert!(last.contains(r#"rel="previous""#));
    assert_eq!(entry_count(&last), 1);
    assert!(last.contains("<title>event 0</title>"));
}

#[tokio::test]
async fn test_feed_invalid_pages() {
    let (repo, app) = setup();
    seed(&repo, 31);

    // `+2` decodes to " 2" and `%2B2` to "+2"
    for page in ["0", "-1", "5", "five", "last", "02", "+2", "%2B2"] {
        let response = get(&app, &format!("/feed/?p={page}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "page {page}");
    }
}

#[tokio::test]
async fn test_feed_empty() {
    let (_repo, app) = setup();

    let response = get(&app, "/feed/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let xml = body_text(response).await;
    assert_eq!(entry_count(&xml), 0);
    assert!(xml.contains("<updated>1970-01-01T00:00:00Z</updated>"));
}
