mod db;
mod models;
mod routes;
mod slots;
mod stats;

use actix_web::{web, App, HttpServer};
use dotenvy::dotenv;
use std::env;
use tracing_subscriber::FmtSubscriber;

use crate::db::Datasources;
use crate::stats::StatsService;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // tracing
    let subscriber = FmtSubscriber::builder().with_env_filter("info").finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let port = env::var("SERVICE_PORT").unwrap_or_else(|_| "3006".into()); // default 3006

    let datasources = web::Data::new(Datasources::from_env()?);
    let stats = web::Data::new(StatsService::from_env());

    tracing::info!("Dashboard service running on localhost:{}", port);

    HttpServer::new(move || {
        App::new()
            .app_data(datasources.clone())
            .app_data(stats.clone())
            .service(routes::overview_area_stats)
            .service(routes::overview_bar_stats)
            .service(routes::overview)
            .service(routes::ads_detail)
            .service(routes::article_new)
            .service(routes::news_new)
    })
    .bind(format!("0.0.0.0:{}", port))?
    .run()
    .await?;

    Ok(())
}
