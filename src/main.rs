use crate::config::load_settings;
use crate::router::handle;
use crate::state::AppState;
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod domain;
mod errors;
mod mock;
mod responses;
mod router;
mod spreadsheets;
mod state;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Settings and logging
    let settings = load_settings();

    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {e}; falling back to info", settings.log_filter);
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 2️⃣ Seed the in-memory catalog
    let state = match AppState::seeded() {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!(error = %e, "seed data rejected");
            std::process::exit(1);
        }
    };
    if state.leads.is_empty() {
        warn!("catalog has no leads");
    }
    info!(leads = state.leads.len(), "catalog loaded");

    // 3️⃣ Start the server
    let addr: SocketAddr = match settings.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(bind_addr = %settings.bind_addr, error = %e, "invalid bind address");
            std::process::exit(1);
        }
    };
    info!(%addr, workers = settings.max_workers, "starting server");

    let server = Server::bind(&addr).max_workers(settings.max_workers.max(1));

    // 4️⃣ Serve requests, sharing the state across workers
    let result = server.serve(move |req: astra::Request, _info| {
        let started = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => {
                warn!(%method, %path, error = %err, "request failed");
                templates::html_error_response(err)
            }
        };

        info!(
            %method,
            %path,
            status = resp.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            "request"
        );
        resp
    });

    match result {
        Ok(()) => info!("server shut down cleanly"),
        Err(e) => error!(error = %e, "server ended with error"),
    }
}
