use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

pub mod config;
pub mod data;
pub mod feed;
mod handlers;
pub mod middleware;
pub mod models;
pub mod pool;
mod routes;
pub mod services;
pub mod storage;
pub mod store;
pub mod telemetry;

use crate::feed::FeedClient;
use crate::routes::init_routes;
use crate::store::AppStore;

pub fn run(
    listener: TcpListener,
    store: AppStore,
    feed_client: FeedClient,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let store_data = web::Data::new(store);
    let feed_data = web::Data::new(feed_client);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:5173")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(store_data.clone())
            .app_data(feed_data.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
