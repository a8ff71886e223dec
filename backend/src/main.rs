mod config;
mod services;

use std::io;
use std::thread;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info, warn};

use crate::config::UiHostConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = UiHostConfig::from_env().map_err(|err| {
        error!("invalid configuration: {err}");
        io::Error::new(io::ErrorKind::InvalidInput, err.to_string())
    })?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                warn!("could not open a browser at {url}: {err}");
            }
        });
    }

    info!("UI host running at {url}");

    HttpServer::new(|| {
        App::new()
            .service(services::health::configure_routes())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
