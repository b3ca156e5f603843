use actix_web::{delete, post, put, web, HttpResponse, Result};

use crate::feed::FeedClient;
use crate::handlers::{match_handler, prediction_handler, result_handler};
use crate::models::matches::SetResultRequest;
use crate::store::AppStore;

#[put("/matches/{match_id}/result")]
async fn set_result(
    path: web::Path<String>,
    request: web::Json<SetResultRequest>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    result_handler::set_result(path, request, store).await
}

#[post("/results/sync")]
async fn sync_results(
    store: web::Data<AppStore>,
    feed: web::Data<FeedClient>,
) -> Result<HttpResponse> {
    result_handler::sync_results(store, feed).await
}

#[post("/schedule/refresh")]
async fn refresh_schedule(
    store: web::Data<AppStore>,
    feed: web::Data<FeedClient>,
) -> Result<HttpResponse> {
    match_handler::refresh_schedule(store, feed).await
}

#[delete("/predictions/{prediction_id}")]
async fn delete_prediction(
    path: web::Path<String>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    prediction_handler::delete_prediction(path, store).await
}
