use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::match_handler;
use crate::models::matches::UpcomingMatchesQuery;
use crate::store::AppStore;

#[get("/current_round")]
async fn current_round(store: web::Data<AppStore>) -> Result<HttpResponse> {
    match_handler::current_round(store).await
}

#[get("/upcoming")]
async fn upcoming_matches(
    query: web::Query<UpcomingMatchesQuery>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    match_handler::upcoming_matches(query, store).await
}

#[get("/upcoming_by_round")]
async fn upcoming_by_round(store: web::Data<AppStore>) -> Result<HttpResponse> {
    match_handler::upcoming_by_round(store).await
}

#[get("/round/{round}")]
async fn matches_by_round(
    path: web::Path<u32>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    match_handler::matches_by_round(path, store).await
}

#[get("/{match_id}")]
async fn get_match(path: web::Path<String>, store: web::Data<AppStore>) -> Result<HttpResponse> {
    match_handler::get_match(path, store).await
}
