use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::leaderboard_handler;
use crate::models::leaderboard::LeaderboardQuery;
use crate::store::AppStore;

#[get("")]
async fn global_leaderboard(
    query: web::Query<LeaderboardQuery>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    leaderboard_handler::global_leaderboard(query, store).await
}
