//! # recon-source
//!
//! HTTP client for the back-office data API.
//!
//! Each section is fetched with a single GET to
//! `{base_url}/api/data/section/{section}` and parsed from a
//! `{ "data": [...] }` envelope. There is no retry and no caching; any
//! failure is returned to the caller as a fatal [`FetchError`].

mod error;
mod http;

pub use error::FetchError;

use std::time::Duration;

use recon_config::SourceConfig;
use recon_core::{Datasets, Driver, Reservation, Section, Vehicle};
use serde::de::DeserializeOwned;

use crate::http::{check_response, parse_collection};

/// Client for the `/api/data/section/*` endpoints.
#[derive(Debug, Clone)]
pub struct SourceClient {
    http: reqwest::Client,
    base_url: String,
}

impl SourceClient {
    /// Build a client from validated source settings.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("recon/", env!("CARGO_PKG_VERSION")));
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }

        Ok(Self {
            http: builder.build().map_err(FetchError::Client)?,
            base_url: config.base().to_string(),
        })
    }

    /// Full URL for a section endpoint.
    #[must_use]
    pub fn section_url(&self, section: Section) -> String {
        format!("{}{}", self.base_url, section.path())
    }

    /// Fetch one section and parse its records.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] on connection or timeout failure,
    /// [`FetchError::Api`] on a non-success status, and [`FetchError::Parse`]
    /// if the body is not a valid `{ "data": [...] }` envelope.
    pub async fn fetch_collection<T: DeserializeOwned + Default>(
        &self,
        section: Section,
    ) -> Result<Vec<T>, FetchError> {
        let url = self.section_url(section);
        tracing::debug!(%section, %url, "fetching section");

        let transport = |source| FetchError::Transport { section, source };
        let resp = self.http.get(&url).send().await.map_err(transport)?;
        let body = check_response(section, resp)
            .await?
            .text()
            .await
            .map_err(transport)?;

        let records = parse_collection(section, &body)?;
        tracing::debug!(%section, records = records.len(), "fetched section");
        Ok(records)
    }

    /// Fetch drivers, vehicles, and reservations concurrently.
    ///
    /// All three must succeed; the first failure is returned.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch_collection`].
    pub async fn fetch_all(&self) -> Result<Datasets, FetchError> {
        let (drivers, vehicles, reservations) = tokio::try_join!(
            self.fetch_collection::<Driver>(Section::Drivers),
            self.fetch_collection::<Vehicle>(Section::Vehicles),
            self.fetch_collection::<Reservation>(Section::Reservations),
        )?;

        Ok(Datasets {
            drivers,
            vehicles,
            reservations,
        })
    }
}
