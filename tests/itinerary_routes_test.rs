mod common;

use actix_web::test;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

use voyageur_api::config::{AppConfig, GeminiConfig, ProviderKind};

use common::{BrokenProvider, SlowProvider, TestApp};

#[actix_rt::test]
async fn test_generate_paris_weekend() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=Weekend+getaway+to+Paris%2C+budget-friendly%2C+love+museums&session=s1")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["sessionId"], "s1");
    assert_eq!(body["requestId"], 1);
    assert_eq!(body["source"], "mock");
    assert!(body["generatedAt"].is_string());

    let itinerary = &body["itinerary"];
    assert_eq!(itinerary["destination"], "Paris");
    assert_eq!(itinerary["title"], "Cultural Immersion: 3 Days in Paris");
    assert_eq!(itinerary["pace"], "Balanced");
    assert_eq!(itinerary["tags"], json!(["Museum", "Budget"]));
    assert_eq!(itinerary["days"].as_array().unwrap().len(), 3);
    assert_eq!(itinerary["days"][0]["title"], "Arrival & City Introduction");
    assert_eq!(itinerary["days"][2]["title"], "Final Explorations");
    assert_eq!(itinerary["restaurants"].as_array().unwrap().len(), 5);
    assert_eq!(itinerary["attractions"].as_array().unwrap().len(), 6);
}

#[actix_rt::test]
async fn test_unknown_destination_falls_back_to_barcelona() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=Somewhere+warm+for+a+week")
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["itinerary"]["destination"], "Barcelona");
    assert_eq!(body["itinerary"]["days"].as_array().unwrap().len(), 3);
}

#[actix_rt::test]
async fn test_long_trips_are_clamped() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=A+45-day+trip+to+Paris")
        .to_request();

    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["itinerary"]["days"].as_array().unwrap().len(), 30);
    assert_eq!(body["itinerary"]["pace"], "Relaxed");
}

#[actix_rt::test]
async fn test_blank_query_is_empty_result() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for uri in ["/api/itineraries?q=+++", "/api/itineraries"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "empty", "itinerary": null }));
    }
}

#[actix_rt::test]
async fn test_missing_session_gets_fresh_id() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=Paris")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;

    let session = body["sessionId"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(session).is_ok());
    assert_eq!(body["requestId"], 1);
}

#[actix_rt::test]
async fn test_regenerate_same_session() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=5-day+food+trip+to+Barcelona&session=s2")
        .to_request();
    let first: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::post()
        .uri("/api/itineraries/regenerate")
        .set_json(json!({ "q": "5-day food trip to Barcelona", "session": "s2" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let second: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(second["sessionId"], "s2");
    assert_eq!(second["requestId"], 2);
    // The keyword path has no randomness to re-roll
    assert_eq!(first["itinerary"], second["itinerary"]);
}

#[actix_rt::test]
async fn test_session_state_follows_requests() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/session/s3")
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body, json!({ "state": "idle" }));

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=Paris+architecture&session=s3")
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries/session/s3")
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["state"], "populated");
    assert_eq!(body["envelope"]["requestId"], 1);
    assert_eq!(
        body["envelope"]["itinerary"]["title"],
        "Paris's Architectural Wonders: 3-Day Tour"
    );
}

#[actix_rt::test]
async fn test_stale_response_is_superseded() {
    let test_app = TestApp::with_provider(
        AppConfig::default(),
        Arc::new(SlowProvider::new(Duration::from_millis(200))),
    );
    let app = test::init_service(test_app.create_app()).await;

    let slow_req = test::TestRequest::get()
        .uri("/api/itineraries?q=Take+it+slowly+in+Paris&session=race")
        .to_request();
    let fast_req = test::TestRequest::get()
        .uri("/api/itineraries?q=Barcelona+beaches&session=race")
        .to_request();

    let (slow, fast) = tokio::join!(
        test::call_service(&app, slow_req),
        test::call_service(&app, fast_req)
    );

    assert_eq!(slow.status(), 409);
    let notice: serde_json::Value = test::read_body_json(slow).await;
    assert_eq!(notice["title"], "Request superseded");
    assert_eq!(notice["retryable"], false);

    assert!(fast.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/itineraries/session/race")
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["state"], "populated");
    assert_eq!(body["envelope"]["requestId"], 2);
    assert_eq!(body["envelope"]["itinerary"]["destination"], "Barcelona");
}

#[actix_rt::test]
async fn test_model_without_key_is_unavailable() {
    let config = AppConfig {
        provider: ProviderKind::Gemini,
        ..AppConfig::default()
    };
    let test_app = TestApp::from_config(config);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=3+days+in+Rome&session=nokey")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);

    let notice: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(notice["title"], "API Key Missing");
    assert_eq!(notice["retryable"], false);

    let req = test::TestRequest::get()
        .uri("/api/itineraries/session/nokey")
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["state"], "failed");
    assert_eq!(body["notice"]["title"], "API Key Missing");
}

#[actix_rt::test]
async fn test_parse_failure_is_bad_gateway() {
    let test_app = TestApp::with_provider(AppConfig::default(), Arc::new(BrokenProvider));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=Tokyo+in+spring")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let notice: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(notice["title"], "Error generating itinerary");
    assert_eq!(notice["retryable"], true);
    assert!(notice["description"]
        .as_str()
        .unwrap()
        .starts_with("Failed to get data from AI:"));
}

#[actix_rt::test]
async fn test_dropped_request_settles_slot() {
    let test_app = TestApp::with_provider(
        AppConfig::default(),
        Arc::new(SlowProvider::new(Duration::from_secs(5))),
    );
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=Paris&session=gone")
        .to_request();
    assert!(test::call_service(&app, req).await.status().is_success());

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=Take+it+slowly+in+Rome&session=gone")
        .to_request();
    let cut_short =
        tokio::time::timeout(Duration::from_millis(50), test::call_service(&app, req)).await;
    assert!(cut_short.is_err());

    let req = test::TestRequest::get()
        .uri("/api/itineraries/session/gone")
        .to_request();
    let body: serde_json::Value =
        test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["state"], "populated");
    assert_eq!(body["envelope"]["requestId"], 1);
    assert_eq!(body["envelope"]["itinerary"]["destination"], "Paris");
}

#[actix_rt::test]
async fn test_anonymous_sessions_are_bounded() {
    let config = AppConfig {
        session_capacity: 4,
        ..AppConfig::default()
    };
    let test_app = TestApp::from_config(config);
    let app = test::init_service(test_app.create_app()).await;

    for _ in 0..10 {
        let req = test::TestRequest::get()
            .uri("/api/itineraries?q=3+days+in+Paris")
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
    }

    assert_eq!(test_app.state.sessions.len(), 4);
}

#[actix_rt::test]
async fn test_unreachable_model_is_bad_gateway() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = AppConfig {
        provider: ProviderKind::Gemini,
        gemini: GeminiConfig {
            api_key: Some("test-key".to_string()),
            base_url: url::Url::parse(&format!("http://{}", addr)).unwrap(),
            timeout: Duration::from_secs(2),
            ..GeminiConfig::default()
        },
        ..AppConfig::default()
    };
    let test_app = TestApp::from_config(config);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/itineraries?q=Lisbon+by+tram")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let notice: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(notice["title"], "Error generating itinerary");
    assert_eq!(notice["retryable"], true);
    assert!(notice["description"]
        .as_str()
        .unwrap()
        .contains("Transport error"));
}
