use actix_web::web;

pub mod admin;
pub mod backend_health;
pub mod leaderboard;
pub mod matches;
pub mod pools;

use crate::middleware::{AdminMiddleware, IdentityMiddleware};

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    // Match schedule and leaderboard are public read surfaces.
    cfg.service(
        web::scope("/matches")
            .service(matches::current_round)
            .service(matches::upcoming_matches)
            .service(matches::upcoming_by_round)
            .service(matches::matches_by_round)
            .service(matches::get_match),
    );
    cfg.service(web::scope("/leaderboard").service(leaderboard::global_leaderboard));

    // Pool routes require an asserted identity. Literal paths are
    // registered before the `{pool_id}` routes so they are not captured.
    cfg.service(
        web::scope("/pools")
            .wrap(IdentityMiddleware)
            .service(pools::public_pools)
            .service(pools::prediction_history)
            .service(pools::create_pool)
            .service(pools::my_pools)
            .service(pools::join_pool)
            .service(pools::leave_pool)
            .service(pools::pool_standings)
            .service(pools::save_prediction)
            .service(pools::pool_predictions)
            .service(pools::get_my_prediction)
            .service(pools::update_pool)
            .service(pools::delete_pool)
            .service(pools::get_pool),
    );

    cfg.service(
        web::scope("/admin")
            .wrap(AdminMiddleware)
            .service(admin::set_result)
            .service(admin::sync_results)
            .service(admin::refresh_schedule)
            .service(admin::delete_prediction),
    );
}
