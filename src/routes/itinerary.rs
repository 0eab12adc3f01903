use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::{error, info};
use uuid::Uuid;

use crate::error::ItineraryError;
use crate::models::envelope::{EmptyResult, ItineraryEnvelope, RegenerateRequest};
use crate::models::query::{ItineraryParams, TripQuery};
use crate::routes::AppState;

/*
    /api/itineraries?q=...&session=...
*/
pub async fn generate(
    params: web::Query<ItineraryParams>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ItineraryError> {
    let params = params.into_inner();
    plan(&state, params.q, params.session, false).await
}

/*
    /api/itineraries/regenerate
    { "q": "...", "session": "..." }
*/
pub async fn regenerate(
    body: web::Json<RegenerateRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ItineraryError> {
    let body = body.into_inner();
    plan(&state, body.q, body.session, true).await
}

/*
    /api/itineraries/session/{id}
*/
pub async fn session_state(path: web::Path<String>, state: web::Data<AppState>) -> HttpResponse {
    let session = path.into_inner();
    HttpResponse::Ok().json(state.sessions.state(&session))
}

async fn plan(
    state: &AppState,
    q: Option<String>,
    session: Option<String>,
    regenerate: bool,
) -> Result<HttpResponse, ItineraryError> {
    let query = match q.as_deref().and_then(TripQuery::parse) {
        Some(query) if regenerate => query.regenerated(),
        Some(query) => query,
        None => return Ok(HttpResponse::Ok().json(EmptyResult::new())),
    };

    let session = session
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // Dropped with this future if the client goes away, which settles the slot again
    let pending = state.sessions.begin(&session);
    let request_id = pending.request_id();
    info!(
        "Session {} request {}: generating itinerary for '{}'",
        session,
        request_id,
        query.raw()
    );

    let source = state.provider.source();
    let outcome = state
        .provider
        .generate(&query)
        .await
        .map(|itinerary| ItineraryEnvelope {
            session_id: session.clone(),
            request_id,
            source,
            generated_at: Utc::now(),
            itinerary,
        });

    if let Err(e) = &outcome {
        error!("Session {} request {} failed: {}", session, request_id, e);
    }

    let envelope = pending.complete(outcome)?;
    Ok(HttpResponse::Ok().json(envelope))
}
