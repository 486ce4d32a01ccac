use std::net::SocketAddr;

use anyhow::Context;
use axum::{Router, http::StatusCode, routing::*};
use tokio::net;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::domain::ports::{geo_lookup::GeoLookup, reply_sink::ReplySink};

use super::{app_state::AppState, session, telegram_webhook::telegram_webhook_handler};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig<'a> {
    pub port: &'a str,
}

pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    pub async fn new<G: GeoLookup, S: ReplySink>(
        config: HttpServerConfig<'_>,
        state: AppState<G, S>,
    ) -> anyhow::Result<Self> {
        let router = build_router(state);

        let addr = SocketAddr::from((
            [0, 0, 0, 0, 0, 0, 0, 0],
            config.port.parse::<u16>().unwrap_or(3000),
        ));

        let listener = net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to listen on port {}", config.port))?;

        Ok(Self { router, listener })
    }

    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!("listening on {}", self.listener.local_addr()?);
        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .context("received error from running server")?;
        Ok(())
    }
}

pub fn build_router<G: GeoLookup, S: ReplySink>(state: AppState<G, S>) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request<_>| {
            let uri = request.uri().to_string();
            tracing::info_span!("http_request", method = ?request.method(), uri)
        });

    Router::new()
        .route("/", post(telegram_webhook_handler::<G, S>))
        .route("/health", get(health_route))
        .nest("/api", api_routes::<G, S>())
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes<G: GeoLookup, S: ReplySink>() -> Router<AppState<G, S>> {
    Router::new()
        .route("/sessions", post(session::open_session::<G, S>))
        .route(
            "/sessions/{id}",
            get(session::get_session::<G, S>).delete(session::close_session::<G, S>),
        )
        .route("/sessions/{id}/refresh", post(session::refresh::<G, S>))
        .route("/sessions/{id}/search", post(session::search::<G, S>))
        .route("/sessions/{id}/query", put(session::set_query::<G, S>))
        .route("/sessions/{id}/copy", post(session::copy::<G, S>))
        .route("/sessions/{id}/clipboard", get(session::clipboard::<G, S>))
        .route("/sessions/{id}/view", put(session::select_view::<G, S>))
        .route("/sessions/{id}/theme", put(session::set_theme::<G, S>))
}

async fn health_route() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
