use actix_web::{web, HttpResponse, Result};

use crate::feed::FeedClient;
use crate::handlers::store_error_response;
use crate::models::common::ApiResponse;
use crate::models::matches::{Score, SetResultRequest};
use crate::store::AppStore;

/// Record a final score by hand. Overrides whatever the feed reported.
#[tracing::instrument(name = "Set match result", skip(request, store))]
pub async fn set_result(
    path: web::Path<String>,
    request: web::Json<SetResultRequest>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();
    let score = Score::new(request.home_score, request.away_score);
    match store.set_result(&match_id, score).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success("Result recorded", score))),
        Err(e) => Ok(store_error_response(e)),
    }
}

/// Trigger a feed sync outside the schedule.
#[tracing::instrument(name = "Sync results", skip(store, feed))]
pub async fn sync_results(
    store: web::Data<AppStore>,
    feed: web::Data<FeedClient>,
) -> Result<HttpResponse> {
    match store.sync_results_from_feed(&feed).await {
        Ok(changed) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("{} result(s) updated", changed),
            changed,
        ))),
        Err(e) => Ok(store_error_response(e)),
    }
}
