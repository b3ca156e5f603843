use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::feed::FeedClient;
use crate::handlers::store_error_response;
use crate::models::common::ApiResponse;
use crate::models::matches::{Match, UpcomingMatchesQuery};
use crate::store::AppStore;

pub async fn get_match(
    path: web::Path<String>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    match store.match_by_id(&match_id).await {
        Some(m) => Ok(HttpResponse::Ok().json(ApiResponse::success("Match", m))),
        None => Ok(HttpResponse::NotFound().json(ApiResponse::<Match>::error("Match not found"))),
    }
}

pub async fn matches_by_round(
    path: web::Path<u32>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    let round = path.into_inner();
    let matches = store.matches_by_round(round).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(format!("Round {}", round), matches)))
}

pub async fn current_round(store: web::Data<AppStore>) -> Result<HttpResponse> {
    let round = store.current_round().await;
    let matches = store.matches_by_round(round).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Current round",
        json!({ "round": round, "matches": matches }),
    )))
}

pub async fn upcoming_matches(
    query: web::Query<UpcomingMatchesQuery>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    let matches = store.upcoming_matches(query.limit).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Upcoming matches", matches)))
}

pub async fn upcoming_by_round(store: web::Data<AppStore>) -> Result<HttpResponse> {
    let grouped = store.upcoming_by_round().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Upcoming matches by round", grouped)))
}

/// Rebuild the schedule from the feed, keeping seeded fixtures for rounds
/// the feed does not cover.
#[tracing::instrument(name = "Refresh schedule", skip(store, feed))]
pub async fn refresh_schedule(
    store: web::Data<AppStore>,
    feed: web::Data<FeedClient>,
) -> Result<HttpResponse> {
    match store.refresh_schedule(&feed).await {
        Ok(total) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Schedule refreshed, {} matches", total),
            total,
        ))),
        Err(e) => Ok(store_error_response(e)),
    }
}
