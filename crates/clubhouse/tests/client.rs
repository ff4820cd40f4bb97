//! End-to-end tests through the `ClubClient` facade.

use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use clubhouse::prelude::*;
use serde_json::json;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("should bind");
    let addr = listener.local_addr().expect("should have local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn club_api() -> Router {
    Router::new()
        .route(
            "/members/login/",
            post(|| async {
                Json(json!({
                    "token": "t1",
                    "member": { "_id": "m1", "username": "alice", "email": "alice@example.com" }
                }))
            }),
        )
        .route(
            "/events",
            get(|| async {
                Json(json!([{
                    "_id": "E1", "activity": "Échecs", "title": "Tournoi",
                    "date": "", "location": "Hall", "memberLimit": 8, "members": ["m1"]
                }]))
            }),
        )
        .route(
            "/events/leave/{id}",
            post(|| async {
                Json(json!({ "message": "Désinscrit", "event": { "members": [] } }))
            }),
        )
        .route(
            "/gallery",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        )
}

fn config(base: &str, dir: &tempfile::TempDir) -> ClientConfig {
    ClientConfig::default()
        .api_url(base)
        .session_file(dir.path().join("session.json"))
        .timeout(Some(Duration::from_secs(5)))
}

#[tokio::test]
async fn test_session_survives_client_restart() {
    let base = serve(club_api()).await;
    let dir = tempfile::tempdir().unwrap();

    let client = ClubClient::builder().config(config(&base, &dir)).build().unwrap();
    client.login(&Credentials::new("alice", "x")).await.unwrap();
    drop(client);

    let restarted = ClubClient::builder().config(config(&base, &dir)).build().unwrap();

    assert_eq!(restarted.member().map(|m| m.username), Some("alice".to_string()));
    assert!(restarted.session().is_authenticated());

    restarted.logout();
    let again = ClubClient::builder().config(config(&base, &dir)).build().unwrap();
    assert_eq!(again.session(), Session::Anonymous);
}

#[tokio::test]
async fn test_events_view_leave_through_client() {
    let base = serve(club_api()).await;
    let dir = tempfile::tempdir().unwrap();
    let client = ClubClient::builder().config(config(&base, &dir)).build().unwrap();
    client.login(&Credentials::new("alice", "x")).await.unwrap();

    let view = client.events_view();
    view.mount();
    view.settled().await;
    let id = EventId::new("E1");
    let event = view.event(&id).unwrap();
    assert_eq!(view.button_for(&event).action, ButtonAction::Leave);

    let outcome = view.press(&id).await;

    let ButtonOutcome::Notice(notice) = &outcome else {
        panic!("expected a notice, got {outcome:?}");
    };
    assert_eq!(notice.description, "Désinscrit");
    let event = view.event(&id).unwrap();
    assert!(event.members.is_empty());
    assert_eq!(view.button_for(&event).action, ButtonAction::Join);
}

#[tokio::test]
async fn test_one_shot_fetch_errors_are_unified() {
    let base = serve(club_api()).await;
    let dir = tempfile::tempdir().unwrap();
    let client = ClubClient::builder().config(config(&base, &dir)).build().unwrap();

    let events = client.events().await.unwrap();
    assert_eq!(events.len(), 1);
    assert!(events[0].date.is_none());

    let err = client.gallery().await.unwrap_err();
    assert!(matches!(err, ClubhouseError::Fetch(_)));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_gallery_view_failure_uses_gallery_message() {
    let base = serve(club_api()).await;
    let dir = tempfile::tempdir().unwrap();
    let client = ClubClient::builder().config(config(&base, &dir)).build().unwrap();
    let view = client.gallery_view();

    view.mount();
    let state = view.settled().await;

    assert!(matches!(
        state,
        ViewState::Failed { ref message, .. }
            if message == "Impossible de charger la galerie. Veuillez réessayer plus tard."
    ));
}
