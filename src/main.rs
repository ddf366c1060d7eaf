//! # HTTP Client - Entry Point
//! src/main.rs
//!
//! Punto de entrada del cliente: pide la URL e imprime el body por stdout.
//! Los diagnósticos (línea de estado, fallback de URL, etapas) van a
//! stderr a través de `env_logger`.

use env_logger::Env;
use http_client::config::Config;
use http_client::http::Response;
use http_client::{Client, Url};
use serde::Serialize;
use std::io::{self, Write};

/// Documento que imprime `--json`
#[derive(Serialize)]
struct Output<'a> {
    url: &'a Url,
    #[serde(flatten)]
    response: &'a Response,
}

fn main() {
    let config = Config::new();

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_filter()))
        .format_timestamp(None)
        .init();

    if let Err(e) = config.validate() {
        log::error!("Invalid configuration: {}", e);
        std::process::exit(2);
    }

    let client = Client::new(config.client_config());
    let url = Url::new(&config.url);

    let response = match client.get(&url) {
        Ok(response) => response,
        Err(e) => {
            log::error!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if config.json {
        match serde_json::to_string_pretty(&Output {
            url: &url,
            response: &response,
        }) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to serialize response: {}", e);
                std::process::exit(1);
            }
        }
    } else if let Err(e) = io::stdout().write_all(response.body()) {
        log::error!("Failed to write body: {}", e);
        std::process::exit(1);
    }
}
