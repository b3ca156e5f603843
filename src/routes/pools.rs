use actix_web::{delete, get, post, put, web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::pools::{member_handler, pool_handler};
use crate::handlers::prediction_handler;
use crate::middleware::Identity;
use crate::models::pool::{CreatePoolRequest, JoinPoolRequest, UpdatePoolRequest};
use crate::models::prediction::SavePredictionRequest;
use crate::store::AppStore;

#[post("")]
async fn create_pool(
    request: web::Json<CreatePoolRequest>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    pool_handler::create_pool(request, store, identity).await
}

/// Pools the caller owns or belongs to.
#[get("")]
async fn my_pools(
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    pool_handler::my_pools(store, identity).await
}

#[get("/public")]
async fn public_pools(store: web::Data<AppStore>) -> Result<HttpResponse> {
    pool_handler::public_pools(store).await
}

/// The caller's decided predictions across all pools.
#[get("/history")]
async fn prediction_history(
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    prediction_handler::prediction_history(store, identity).await
}

#[get("/{pool_id}")]
async fn get_pool(path: web::Path<Uuid>, store: web::Data<AppStore>) -> Result<HttpResponse> {
    pool_handler::get_pool(path, store).await
}

#[put("/{pool_id}")]
async fn update_pool(
    path: web::Path<Uuid>,
    request: web::Json<UpdatePoolRequest>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    pool_handler::update_pool(path, request, store, identity).await
}

#[delete("/{pool_id}")]
async fn delete_pool(
    path: web::Path<Uuid>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    pool_handler::delete_pool(path, store, identity).await
}

#[post("/{pool_id}/join")]
async fn join_pool(
    path: web::Path<Uuid>,
    request: web::Json<JoinPoolRequest>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    member_handler::join_pool(path, request, store, identity).await
}

#[post("/{pool_id}/leave")]
async fn leave_pool(
    path: web::Path<Uuid>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    member_handler::leave_pool(path, store, identity).await
}

#[get("/{pool_id}/standings")]
async fn pool_standings(
    path: web::Path<Uuid>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    pool_handler::pool_standings(path, store).await
}

#[post("/{pool_id}/predictions")]
async fn save_prediction(
    path: web::Path<Uuid>,
    request: web::Json<SavePredictionRequest>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    prediction_handler::save_prediction(path, request, store, identity).await
}

#[get("/{pool_id}/predictions")]
async fn pool_predictions(
    path: web::Path<Uuid>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    prediction_handler::pool_predictions(path, store, identity).await
}

#[get("/{pool_id}/predictions/{match_id}")]
async fn get_my_prediction(
    path: web::Path<(Uuid, String)>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    prediction_handler::get_my_prediction(path, store, identity).await
}
