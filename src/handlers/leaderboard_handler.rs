use actix_web::{web, HttpResponse, Result};

use crate::models::common::ApiResponse;
use crate::models::leaderboard::LeaderboardQuery;
use crate::store::AppStore;

/// How many entries a leaderboard request gets when it does not ask.
const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Cross-pool leaderboard. Each user is counted once, at the pool where
/// they score best.
pub async fn global_leaderboard(
    query: web::Query<LeaderboardQuery>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
    let entries = store.global_leaderboard(Some(limit)).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Leaderboard", entries)))
}
