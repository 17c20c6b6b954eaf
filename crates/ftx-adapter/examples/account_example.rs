/*
[INPUT]:  FTX_API_KEY / FTX_API_SECRET / FTX_SUBACCOUNT environment variables
[OUTPUT]: Account summary, balances and open orders
[POS]:    Examples - authenticated account queries
[UPDATE]: When account or order APIs change
*/

use ftx_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: Authenticated queries
///
/// Requests are signed with HMAC-SHA256 over `ts + METHOD + path + body`.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== FTX Account Example ===\n");

    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Missing credentials: {}", e);
            return;
        }
    };
    let client = match FtxClient::with_credentials(ClientConfig::default(), credentials) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.get_account_information().await {
        Ok(account) => println!(
            "✓ {}: collateral {} free {} leverage {}",
            account.username, account.collateral, account.free_collateral, account.leverage
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.get_wallet_balances().await {
        Ok(balances) => {
            for balance in balances {
                println!("  {} free {} total {}", balance.coin, balance.free, balance.total);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    match client.get_open_orders(None).await {
        Ok(orders) => println!("✓ {} open orders", orders.len()),
        Err(e) if e.is_api_error() => println!("✗ Rejected by exchange: {}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Account example complete");
}
