pub mod method;
pub mod ticker;

use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

// Base URL for the Binance spot REST API
pub const BASE_URL: &str = "https://api.binance.com";

pub struct BinanceClient {
    base_url: String,
    reqwest: Client,
}

impl BinanceClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Points the client at a different host, e.g. a local stand-in
    /// server when testing the request/decode path.
    pub fn with_base_url(base_url: &str) -> Self {
        let reqwest = ClientBuilder::new()
            .build()
            .expect("Failed to build reqwest client");

        Self {
            base_url: base_url.to_string(),
            reqwest,
        }
    }

    pub(crate) async fn get<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        url: &str,
        params: &P,
    ) -> reqwest::Result<T> {
        let response = self
            .reqwest
            .get(url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(response)
    }

    pub async fn call<M: method::Method>(&self, params: M::Params) -> reqwest::Result<M::Response> {
        self.get(&format!("{}{}", self.base_url, M::PATH), &params)
            .await
    }
}
