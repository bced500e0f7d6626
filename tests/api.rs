//! Integration tests for the match endpoints over HTTP.

use actix_web::http::{header, StatusCode};
use actix_web::{test, web::Data, App};
use cs2_team_divider::api::{configure_matches, MatchService};
use cs2_team_divider::{CsvMatchStore, InMemoryMatchStore, MatchStore};

const SECRET: &str = "s3cret";

fn service(store: Box<dyn MatchStore>) -> Data<MatchService> {
    Data::new(MatchService {
        webhook_secret: SECRET.to_string(),
        store,
    })
}

fn large_body(kib: usize) -> String {
    format!(r#"{{"id":"big","filler":"{}"}}"#, "x".repeat(kib * 1024))
}

#[actix_web::test]
async fn large_match_end_body_is_accepted() {
    let app = test::init_service(
        App::new()
            .app_data(service(Box::new(InMemoryMatchStore::new())))
            .configure(configure_matches),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/dathost/match-end")
        .insert_header((header::AUTHORIZATION, SECRET))
        .set_payload(large_body(300))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/matches").to_request();
    let rows: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(rows[0]["id"], "big");
}

#[actix_web::test]
async fn large_unauthenticated_body_is_unauthorized() {
    let app = test::init_service(
        App::new()
            .app_data(service(Box::new(InMemoryMatchStore::new())))
            .configure(configure_matches),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/dathost/match-end")
        .set_payload(large_body(300))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn wrong_verb_and_missing_id_statuses() {
    let app = test::init_service(
        App::new()
            .app_data(service(Box::new(InMemoryMatchStore::new())))
            .configure(configure_matches),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/dathost/match-end").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::METHOD_NOT_ALLOWED);

    let req = test::TestRequest::post()
        .uri("/api/dathost/match-end")
        .insert_header((header::AUTHORIZATION, SECRET))
        .set_payload(r#"{"map":"de_overpass"}"#)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn store_failure_is_internal_error() {
    let dir = std::env::temp_dir().join(format!("matches-dir-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir(&dir).unwrap();
    let app = test::init_service(
        App::new()
            .app_data(service(Box::new(CsvMatchStore::new(&dir))))
            .configure(configure_matches),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/dathost/match-end")
        .insert_header((header::AUTHORIZATION, SECRET))
        .set_payload(r#"{"id":"m1"}"#)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let req = test::TestRequest::get().uri("/api/matches").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::INTERNAL_SERVER_ERROR);

    std::fs::remove_dir(&dir).unwrap();
}
