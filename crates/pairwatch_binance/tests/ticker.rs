use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use pairwatch_binance::BinanceClient;
use pairwatch_binance::ticker::{Ticker24hr, Ticker24hrParams};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::test;

async fn spawn_responder(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind responder");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Responder stopped unexpectedly");
    });

    addr
}

#[test]
pub async fn invalid_json_body_is_a_decode_error() {
    let app = Router::new().route(
        "/api/v3/ticker/24hr",
        get(|| async { "<html>service unavailable</html>" }),
    );
    let addr = spawn_responder(app).await;
    let client = BinanceClient::with_base_url(&format!("http://{addr}"));

    let err = client
        .call::<Ticker24hr>(Ticker24hrParams::builder().symbol("BTCUSDT").build())
        .await
        .expect_err("Non-JSON body must not decode");

    assert!(err.is_decode());
}

#[test]
pub async fn http_error_status_is_a_status_error() {
    let app = Router::new().route(
        "/api/v3/ticker/24hr",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream error") }),
    );
    let addr = spawn_responder(app).await;
    let client = BinanceClient::with_base_url(&format!("http://{addr}"));

    let err = client
        .call::<Ticker24hr>(Ticker24hrParams::builder().symbol("BTCUSDT").build())
        .await
        .expect_err("A 5xx must surface as an error");

    assert!(err.is_status());
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
}

#[test]
#[ignore = "hits the live Binance API"]
pub async fn fetch_ticker_24hr() {
    let client = BinanceClient::new();

    let response = client
        .call::<Ticker24hr>(Ticker24hrParams::builder().symbol("BTCUSDT").build())
        .await
        .expect("Failed to fetch 24hr ticker");

    assert_eq!(response.symbol, "BTCUSDT");
    println!("{response:?}");
}
