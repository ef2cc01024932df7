use std::net::IpAddr;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use qpmc_core_career_contracts::CareerFeatureService;
use qpmc_core_contact_contracts::ContactFeatureService;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

mod middlewares;
mod models;
mod routes;

/// Request bodies above this size are rejected before validation runs.
const REQUEST_BODY_LIMIT: usize = 200 * 1024;

#[derive(Debug, Clone)]
pub struct RestServer<Contact, Career> {
    contact: Contact,
    motahida_contact: Contact,
    career: Career,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Origins allowed to call the API with credentials.
    pub allowed_origins: Vec<HeaderValue>,
}

impl RestServerConfig {
    pub fn new(allowed_origins: &[String]) -> anyhow::Result<Self> {
        let allowed_origins = allowed_origins
            .iter()
            .map(|origin| origin.parse().map_err(anyhow::Error::from))
            .collect::<anyhow::Result<_>>()?;

        Ok(Self { allowed_origins })
    }
}

impl<Contact, Career> RestServer<Contact, Career>
where
    Contact: ContactFeatureService,
    Career: CareerFeatureService,
{
    pub fn new(
        contact: Contact,
        motahida_contact: Contact,
        career: Career,
        config: RestServerConfig,
    ) -> Self {
        Self {
            contact,
            motahida_contact,
            career,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let cors = cors_layer(&self.config.allowed_origins);

        let router = Router::new()
            .merge(routes::health::router())
            .merge(routes::contact::router(
                self.contact.into(),
                self.motahida_contact.into(),
            ))
            .merge(routes::careers::router(self.career.into()))
            .layer(DefaultBodyLimit::max(REQUEST_BODY_LIMIT))
            .layer(cors);

        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        middlewares::request_id::add(router)
    }
}

fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins.iter().cloned()))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HeaderName::from_static("x-requested-with"),
        ])
}
