use log::error;
use pairwatch_binance::BinanceClient;
use pairwatch_binance::ticker::{Ticker24hr, Ticker24hrParams};
use thiserror::Error;

/// The one user-facing failure string; every underlying cause collapses
/// into it, with the detail going to the operator log instead.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data.";

#[derive(Error, Debug)]
pub enum FetchRatioError {
    #[error("both symbols must be non-empty")]
    EmptySymbol,
    #[error("request for {symbol} failed: {source}")]
    Request {
        symbol: String,
        source: reqwest::Error,
    },
    #[error("quoteVolume for {symbol} is not numeric: {raw:?}")]
    BadVolume { symbol: String, raw: String },
}

/// Anything that can resolve a symbol to its rolling 24h quote volume.
/// The Binance client is the real source; tests substitute canned values.
pub trait VolumeSource {
    async fn quote_volume(&self, symbol: &str) -> Result<f64, FetchRatioError>;
}

impl VolumeSource for BinanceClient {
    async fn quote_volume(&self, symbol: &str) -> Result<f64, FetchRatioError> {
        let ticker = self
            .call::<Ticker24hr>(Ticker24hrParams::builder().symbol(symbol).build())
            .await
            .map_err(|source| FetchRatioError::Request {
                symbol: symbol.to_string(),
                source,
            })?;

        match ticker.quote_volume.parse::<f64>() {
            Ok(volume) => Ok(volume),
            Err(_) => Err(FetchRatioError::BadVolume {
                symbol: symbol.to_string(),
                raw: ticker.quote_volume,
            }),
        }
    }
}

/// Fetches both tickers and formats the volume ratio line.
///
/// The two fetches have no ordering dependency and run concurrently; the
/// first failure aborts the whole operation. A zero right-hand volume is
/// not handled and shows up as `inf`/`NaN` in the formatted output.
pub async fn fetch_ratio<S: VolumeSource>(
    source: &S,
    symbol_a: &str,
    symbol_b: &str,
) -> Result<String, FetchRatioError> {
    if symbol_a.is_empty() || symbol_b.is_empty() {
        return Err(FetchRatioError::EmptySymbol);
    }

    let (volume_a, volume_b) = tokio::try_join!(
        source.quote_volume(symbol_a),
        source.quote_volume(symbol_b)
    )?;

    let ratio = volume_a / volume_b;

    Ok(format!("1 {symbol_a} = {ratio:.2} {symbol_b}"))
}

/// Runs one ratio fetch against an injected output sink. The sink receives
/// either the formatted line or exactly [`FETCH_ERROR_MESSAGE`]; no partial
/// result is ever written.
pub async fn render_ratio<S: VolumeSource>(
    source: &S,
    symbol_a: &str,
    symbol_b: &str,
    mut sink: impl FnMut(&str),
) {
    match fetch_ratio(source, symbol_a, symbol_b).await {
        Ok(line) => sink(&line),
        Err(e) => {
            error!("ratio fetch for {symbol_a}/{symbol_b} failed: {e}");
            sink(FETCH_ERROR_MESSAGE);
        }
    }
}
