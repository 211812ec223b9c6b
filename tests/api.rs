//! Integration tests for the HTTP surface, driven through actix-web's test service.

use actix_web::{dev::ServiceResponse, http::StatusCode, test, web::Data, App};
use chrono::{Duration, TimeZone, Utc};
use std::path::PathBuf;
use tournament_bracket::api::{configure, BracketSettings};
use tournament_bracket::{Participant, RegistrationStatus};

fn settings(roster: &str) -> Data<BracketSettings> {
    Data::new(BracketSettings {
        roster_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(roster),
        refresh_secs: 5,
    })
}

/// Send `req` to a fresh app reading its roster from `roster` (relative to the crate root).
async fn send(roster: &str, req: test::TestRequest) -> ServiceResponse {
    let app = test::init_service(App::new().app_data(settings(roster)).configure(configure)).await;
    test::call_service(&app, req.to_request()).await
}

async fn body_text(resp: ServiceResponse) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).unwrap()
}

#[actix_web::test]
async fn health_reports_ok() {
    let resp = send("data/roster.csv", test::TestRequest::get().uri("/api/health")).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "tournament-bracket");
}

#[actix_web::test]
async fn bracket_from_sample_roster() {
    let resp = send("data/roster.csv", test::TestRequest::get().uri("/api/bracket")).await;
    let rounds: serde_json::Value = test::read_body_json(resp).await;
    let rounds = rounds.as_array().unwrap();
    // 5 approved participants
    assert_eq!(rounds.len(), 3);
    assert_eq!(rounds[0]["label"], "Quarter-final");
    assert_eq!(rounds[2]["label"], "Final");
    assert_eq!(rounds[0]["matches"][0]["first"]["name"], "Nadia");
    assert_eq!(rounds[0]["matches"][0]["second"]["name"], "Karim");
    assert!(rounds[0]["matches"][2]["second"].is_null());
}

#[actix_web::test]
async fn missing_roster_is_a_server_error() {
    let resp = send("data/missing.csv", test::TestRequest::get().uri("/api/bracket")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("Could not read roster"));
}

#[actix_web::test]
async fn posted_participants_are_used_as_given() {
    let t = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    let players = vec![
        Participant::new("B", t + Duration::minutes(5)),
        Participant::new("A", t).with_status(RegistrationStatus::Approved),
        Participant::new("C", t + Duration::minutes(9)),
    ];
    let req = test::TestRequest::post().uri("/api/bracket").set_json(&players);
    let rounds: serde_json::Value = test::read_body_json(send("data/roster.csv", req).await).await;
    assert_eq!(rounds[0]["label"], "Semi-final");
    assert_eq!(rounds[0]["matches"][0]["first"]["name"], "A");
    assert_eq!(rounds[1]["matches"][0]["winner"]["name"], "A");
}

#[actix_web::test]
async fn posted_participants_need_only_name_and_timestamp() {
    let players = serde_json::json!([
        { "name": "Late", "registered_at": "2024-03-01T10:00:00Z" },
        { "name": "Early", "avatar": "/static/e.png", "registered_at": "2024-03-01T09:00:00Z" },
    ]);
    let req = test::TestRequest::post().uri("/api/bracket").set_json(&players);
    let resp = send("data/roster.csv", req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let rounds: serde_json::Value = test::read_body_json(resp).await;
    let m = &rounds[0]["matches"][0];
    assert_eq!(m["first"]["name"], "Early");
    assert_eq!(m["first"]["avatar"], "/static/e.png");
    assert_eq!(m["second"]["name"], "Late");
    assert_ne!(m["first"]["id"], m["second"]["id"]);
}

#[actix_web::test]
async fn posting_nobody_gives_empty_bracket() {
    let req = test::TestRequest::post()
        .uri("/api/bracket")
        .set_json(Vec::<Participant>::new());
    let rounds: serde_json::Value = test::read_body_json(send("data/roster.csv", req).await).await;
    assert_eq!(rounds, serde_json::json!([]));
}

#[actix_web::test]
async fn page_renders_html_bracket() {
    let resp = send("data/roster.csv", test::TestRequest::get().uri("/")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(html.contains("Quarter-final"));
    assert!(html.contains(r#"content="5""#));
    assert!(!html.contains("Lea"));
}

#[actix_web::test]
async fn page_keeps_refreshing_when_roster_is_unreadable() {
    let resp = send("data/missing.csv", test::TestRequest::get().uri("/")).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap().to_owned();
    assert!(content_type.starts_with("text/html"));
    let html = body_text(resp).await;
    assert!(html.contains(r#"<meta http-equiv="refresh" content="5">"#));
    assert!(html.contains("Could not read roster"));
}

#[actix_web::test]
async fn favicon_is_no_content() {
    let resp = send("data/roster.csv", test::TestRequest::get().uri("/favicon.ico")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}
