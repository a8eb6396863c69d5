use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::repositories::yelp_repo::YelpApiRepo;

pub mod commands;
pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod errors;
pub mod helpers;
pub mod models;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    info!("Starting campus eats bot in {} environment", config.environment);

    let yelp_repo = YelpApiRepo::new(
        &config.yelp_api_url,
        &config.yelp_api_key,
        &config.search_location,
    )?;
    let dispatcher = Arc::new(Dispatcher::new(yelp_repo, &config));

    controller::serve(dispatcher, &config).await
}
