use crate::method::Method;
use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Builder)]
#[builder(on(String, into))]
pub struct Ticker24hrParams {
    pub symbol: String,
}

// Binance serializes every numeric market field as a decimal string;
// they are kept as strings here and parsed where a number is needed.
#[derive(Serialize, Deserialize, Debug)]
pub struct Ticker24hrResponse {
    pub symbol: String,
    #[serde(rename = "priceChange")]
    pub price_change: String,
    #[serde(rename = "priceChangePercent")]
    pub price_change_percent: String,
    #[serde(rename = "weightedAvgPrice")]
    pub weighted_avg_price: String,
    #[serde(rename = "prevClosePrice")]
    pub prev_close_price: Option<String>,
    #[serde(rename = "lastPrice")]
    pub last_price: String,
    #[serde(rename = "lastQty")]
    pub last_qty: Option<String>,
    #[serde(rename = "bidPrice")]
    pub bid_price: Option<String>,
    #[serde(rename = "bidQty")]
    pub bid_qty: Option<String>,
    #[serde(rename = "askPrice")]
    pub ask_price: Option<String>,
    #[serde(rename = "askQty")]
    pub ask_qty: Option<String>,
    #[serde(rename = "openPrice")]
    pub open_price: String,
    #[serde(rename = "highPrice")]
    pub high_price: String,
    #[serde(rename = "lowPrice")]
    pub low_price: String,
    pub volume: String,
    #[serde(rename = "quoteVolume")]
    pub quote_volume: String,
    #[serde(rename = "openTime")]
    pub open_time: i64,
    #[serde(rename = "closeTime")]
    pub close_time: i64,
    #[serde(rename = "firstId")]
    pub first_id: i64,
    #[serde(rename = "lastId")]
    pub last_id: i64,
    pub count: i64,
}

pub struct Ticker24hr;

impl Method for Ticker24hr {
    const PATH: &'static str = "/api/v3/ticker/24hr";

    type Response = Ticker24hrResponse;
    type Params = Ticker24hrParams;
}
