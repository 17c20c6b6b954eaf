/*
[INPUT]:  Future and index names
[OUTPUT]: Futures listings, stats, funding rates and index candles
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use ftx_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Query futures market data (no authentication required)
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== FTX Market Data Example ===\n");

    let client = match FtxClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let future = "BTC-PERP";

    match client.get_future(future).await {
        Ok(info) => println!("✓ {}: mark {} last {}", info.name, info.mark, info.last),
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.get_future_stats(future).await {
        Ok(stats) => println!("✓ Next funding rate: {:?}", stats.next_funding_rate),
        Err(e) => println!("✗ Error: {}", e),
    }

    let params = GetFundingRatesParams {
        future: Some(future.to_string()),
        ..Default::default()
    };
    match client.get_funding_rates(&params).await {
        Ok(rates) => println!("✓ {} funding rate samples", rates.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    let mut candles = GetHistoricalIndexParams::new(Resolution::Hour);
    candles.limit = Some(24);
    match client.get_historical_index("BTC", &candles).await {
        Ok(rows) => println!("✓ {} hourly index candles", rows.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
