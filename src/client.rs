//! HTTP client for the price backend.
//!
//! One method per endpoint. Any non-2xx status is an error regardless of
//! the body; decoding failures surface as [`PricedeskError::Request`].

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::models::{FetchRequest, OperationOutcome, PriceSeriesResponse, TickerSymbol};
use crate::session::PriceApi;
use crate::{PricedeskError, Result};

/// [`PriceApi`] over reqwest. Cheap to clone; clones share a connection pool.
#[derive(Debug, Clone)]
pub struct HttpPriceApi {
    base_url: String,
    client: Client,
}

impl HttpPriceApi {
    /// Builds a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`PricedeskError::Request`] if the TLS backend cannot be
    /// initialized.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /api/fetch-and-save`
    pub async fn fetch_and_save(&self, ticker: &TickerSymbol) -> Result<OperationOutcome> {
        let url = format!("{}/api/fetch-and-save", self.base_url);
        debug!(%ticker, url = url.as_str(), "collect-and-persist request");

        let response = self
            .client
            .post(&url)
            .json(&FetchRequest {
                ticker: ticker.as_str(),
            })
            .send()
            .await?;
        decode(response).await
    }

    /// `GET /api/prices/{ticker}`
    pub async fn get_prices(&self, ticker: &TickerSymbol) -> Result<PriceSeriesResponse> {
        let url = format!("{}/api/prices/{}", self.base_url, ticker.url_encoded());
        debug!(%ticker, url = url.as_str(), "series-read request");

        let response = self.client.get(&url).send().await?;
        decode(response).await
    }
}

impl PriceApi for HttpPriceApi {
    async fn fetch_and_save(&self, ticker: &TickerSymbol) -> Result<OperationOutcome> {
        HttpPriceApi::fetch_and_save(self, ticker).await
    }

    async fn get_prices(&self, ticker: &TickerSymbol) -> Result<PriceSeriesResponse> {
        HttpPriceApi::get_prices(self, ticker).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), url = %response.url(), "backend returned error status");
        return Err(PricedeskError::HttpStatus {
            status: status.as_u16(),
        });
    }
    Ok(response.json::<T>().await?)
}
