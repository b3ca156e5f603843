pub mod leaderboard_handler;
pub mod match_handler;
pub mod pools;
pub mod prediction_handler;
pub mod result_handler;

use actix_web::HttpResponse;

use crate::models::common::ApiResponse;
use crate::store::StoreError;

/// Map a store error onto an HTTP response. Validation rejections surface
/// with their own message; I/O failures get a generic 500 and a log line.
pub(crate) fn store_error_response(e: StoreError) -> HttpResponse {
    match e {
        StoreError::PoolNotFound | StoreError::MatchNotFound | StoreError::PredictionNotFound => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(e.to_string()))
        }
        StoreError::InvalidJoinCode
        | StoreError::NotOwner
        | StoreError::OwnerCannotLeave
        | StoreError::PredictionsPrivate => {
            HttpResponse::Forbidden().json(ApiResponse::<()>::error(e.to_string()))
        }
        StoreError::Storage(_) | StoreError::Feed(_) => {
            tracing::error!("Request failed: {}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal error"))
        }
    }
}
