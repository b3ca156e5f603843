use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::store_error_response;
use crate::middleware::Identity;
use crate::models::common::ApiResponse;
use crate::models::pool::JoinPoolRequest;
use crate::store::AppStore;

#[tracing::instrument(
    name = "Join pool",
    skip(request, store, identity),
    fields(user = %identity.name)
)]
pub async fn join_pool(
    path: web::Path<Uuid>,
    request: web::Json<JoinPoolRequest>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    let pool_id = path.into_inner();
    match store
        .join_pool(pool_id, identity.user_ref(), request.code.as_deref())
        .await
    {
        Ok(pool) => Ok(HttpResponse::Ok().json(ApiResponse::success("Joined pool", pool))),
        Err(e) => Ok(store_error_response(e)),
    }
}

#[tracing::instrument(name = "Leave pool", skip(store, identity), fields(user = %identity.name))]
pub async fn leave_pool(
    path: web::Path<Uuid>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    let pool_id = path.into_inner();
    match store.leave_pool(pool_id, identity.user_id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Left pool"))),
        Err(e) => Ok(store_error_response(e)),
    }
}
