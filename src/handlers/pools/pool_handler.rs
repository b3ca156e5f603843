use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::store_error_response;
use crate::middleware::Identity;
use crate::models::common::ApiResponse;
use crate::models::pool::{CreatePoolRequest, Pool, UpdatePoolRequest};
use crate::store::AppStore;

#[tracing::instrument(
    name = "Create pool",
    skip(request, store, identity),
    fields(pool_name = %request.name, owner = %identity.name)
)]
pub async fn create_pool(
    request: web::Json<CreatePoolRequest>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    match store
        .create_pool(identity.user_ref(), request.into_inner())
        .await
    {
        Ok(pool) => Ok(HttpResponse::Created().json(ApiResponse::success("Pool created", pool))),
        Err(e) => Ok(store_error_response(e)),
    }
}

pub async fn get_pool(
    path: web::Path<Uuid>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    let pool_id = path.into_inner();
    match store.get_pool(pool_id).await {
        Some(pool) => Ok(HttpResponse::Ok().json(ApiResponse::success("Pool", pool))),
        None => Ok(HttpResponse::NotFound().json(ApiResponse::<Pool>::error("Pool not found"))),
    }
}

/// Pools the caller owns or belongs to.
pub async fn my_pools(
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    let pools = store.user_pools(identity.user_id).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Your pools", pools)))
}

pub async fn public_pools(store: web::Data<AppStore>) -> Result<HttpResponse> {
    let pools = store.public_pools().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Public pools", pools)))
}

#[tracing::instrument(name = "Update pool", skip(request, store, identity))]
pub async fn update_pool(
    path: web::Path<Uuid>,
    request: web::Json<UpdatePoolRequest>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    let pool_id = path.into_inner();
    match store
        .update_pool(pool_id, identity.user_id, identity.is_admin, request.into_inner())
        .await
    {
        Ok(pool) => Ok(HttpResponse::Ok().json(ApiResponse::success("Pool updated", pool))),
        Err(e) => Ok(store_error_response(e)),
    }
}

#[tracing::instrument(name = "Delete pool", skip(store, identity))]
pub async fn delete_pool(
    path: web::Path<Uuid>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    let pool_id = path.into_inner();
    match store.delete_pool(pool_id, identity.user_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Pool deleted"))),
        Err(e) => Ok(store_error_response(e)),
    }
}

pub async fn pool_standings(
    path: web::Path<Uuid>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    let pool_id = path.into_inner();
    match store.pool_standings(pool_id).await {
        Ok(members) => Ok(HttpResponse::Ok().json(ApiResponse::success("Standings", members))),
        Err(e) => Ok(store_error_response(e)),
    }
}
