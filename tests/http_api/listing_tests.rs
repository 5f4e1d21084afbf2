//! Listing, search, filtered view, and statistics endpoint tests.

use crate::http_api::helpers::{
    app, create_task, number_field, read_json, send, text_field, toggle_task,
};
use axum::{Router, http::StatusCode};
use rstest::rstest;
use serde_json::Value;

/// Seeds three tasks and completes the first, returning ids in creation
/// order.
async fn seed_three(app: &Router) -> Vec<String> {
    let mut ids = Vec::new();
    for title in ["Buy groceries", "Call plumber", "Review proposal"] {
        let body = create_task(app, title, None).await.expect("create");
        let id = text_field(&body, "id").expect("id present").to_owned();
        ids.push(id);
    }
    let first = ids.first().expect("seeded");
    toggle_task(app, first).await.expect("toggle");
    ids
}

/// Tests that listing reports the window alongside collection counters.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_reports_window_and_counters(app: Router) {
    let ids = seed_three(&app).await;

    let response = send(app, "GET", "/tasks?skip=1&limit=1")
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await.expect("body");
    assert_eq!(number_field(&body, "total"), Some(3));
    assert_eq!(number_field(&body, "completed"), Some(1));
    assert_eq!(number_field(&body, "pending"), Some(2));
    let tasks = body.get("tasks").and_then(Value::as_array).expect("tasks");
    assert_eq!(tasks.len(), 1);
    assert_eq!(
        tasks.first().and_then(|task| text_field(task, "id")),
        ids.get(1).map(String::as_str)
    );
}

/// Tests that a bare listing returns the whole collection.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_without_parameters_returns_everything(app: Router) {
    seed_three(&app).await;

    let response = send(app, "GET", "/tasks").await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await.expect("body");
    let tasks = body.get("tasks").and_then(Value::as_array).expect("tasks");
    assert_eq!(tasks.len(), 3);
}

/// Tests that search matches titles and descriptions case-insensitively.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_filters_by_title_and_description(app: Router) {
    create_task(&app, "Buy groceries", Some("Weekly shopping run"))
        .await
        .expect("create");
    create_task(&app, "Call plumber", Some("Kitchen sink leaks"))
        .await
        .expect("create");

    let response = send(app, "GET", "/tasks/search?q=KITCHEN")
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await.expect("body");
    let matches = body.as_array().expect("array body");
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches.first().and_then(|task| text_field(task, "title")),
        Some("Call plumber")
    );
}

/// Tests that the completed and pending views partition the collection.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_and_pending_views_partition(app: Router) {
    let ids = seed_three(&app).await;

    let completed_response = send(app.clone(), "GET", "/tasks/completed")
        .await
        .expect("request");
    assert_eq!(completed_response.status(), StatusCode::OK);
    let completed = read_json(completed_response).await.expect("body");
    let completed_tasks = completed.as_array().expect("array body");
    assert_eq!(completed_tasks.len(), 1);
    assert_eq!(
        completed_tasks
            .first()
            .and_then(|task| text_field(task, "id")),
        ids.first().map(String::as_str)
    );

    let pending_response = send(app, "GET", "/tasks/pending").await.expect("request");
    assert_eq!(pending_response.status(), StatusCode::OK);
    let pending = read_json(pending_response).await.expect("body");
    assert_eq!(pending.as_array().map(Vec::len), Some(2));
}

/// Tests that statistics report counts with the rate rounded to two
/// decimal places.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stats_report_counts_and_rounded_rate(app: Router) {
    let mut ids = Vec::new();
    for title in ["First task", "Second task", "Third task"] {
        let body = create_task(&app, title, None).await.expect("create");
        ids.push(text_field(&body, "id").expect("id present").to_owned());
    }
    for id in ids.iter().take(2) {
        toggle_task(&app, id).await.expect("toggle");
    }

    let response = send(app, "GET", "/tasks/stats").await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await.expect("body");
    assert_eq!(number_field(&body, "total"), Some(3));
    assert_eq!(number_field(&body, "completed"), Some(2));
    assert_eq!(number_field(&body, "pending"), Some(1));
    assert_eq!(
        body.get("completion_rate").and_then(Value::as_f64),
        Some(66.67)
    );
}

/// Tests that an empty store reports zeroed statistics.
#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stats_on_empty_store_report_zeroes(app: Router) {
    let response = send(app, "GET", "/tasks/stats").await.expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await.expect("body");
    assert_eq!(number_field(&body, "total"), Some(0));
    assert_eq!(
        body.get("completion_rate").and_then(Value::as_f64),
        Some(0.0)
    );
}
