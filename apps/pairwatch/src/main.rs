use anyhow::Result;
use clap::Parser;
use pairwatch_binance::BinanceClient;

mod ratio;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Left-hand trading pair symbol (e.g. BTCUSDT)
    symbol_a: String,

    /// Right-hand trading pair symbol (e.g. ETHUSDT)
    symbol_b: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let client = BinanceClient::new();

    // A fetch failure is scoped to this one operation: the display line
    // carries the generic message and the process still exits cleanly.
    ratio::render_ratio(&client, &args.symbol_a, &args.symbol_b, |line| {
        println!("{line}");
    })
    .await;

    Ok(())
}
