mod binance;
mod config;
mod db;
mod models;
mod subgraph;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use binance::{BinanceClient, BinancePriceProvider};

const DEFAULT_TOKENS: [&str; 2] = ["UNI", "ZRX"];

fn init_logger() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

#[tokio::main]
async fn main() {
    init_logger();
    dotenv::dotenv().unwrap();

    let env_config = config::load_from_env(|key| std::env::var(key));
    let db_pool = db::db_connection(&env_config.database_url).await;

    let tokens = models::Token::of_interest_or_defaults(&db_pool, &DEFAULT_TOKENS)
        .await
        .expect("Failed to read tokens of interest");
    let symbols: Vec<&str> = tokens.iter().map(|token| token.symbol.as_str()).collect();
    info!(?symbols, "tokens of interest");

    let volumes = subgraph::fetch_swap_volumes()
        .await
        .expect("Failed to fetch swap volumes");
    let (vol0, vol1) = subgraph::total_volumes(&volumes);
    info!(n_swaps = volumes.swaps.len(), %vol0, %vol1, "[SwapQuery] window totals");

    let client = BinanceClient::new();
    let trades = binance::fetch_recent_trades(&client)
        .await
        .expect("Failed to fetch agg trades");
    info!(n_trades = trades.len(), "[TradeQuery] agg trades");

    let provider = BinancePriceProvider::new(Box::new(client));
    let prices = provider.prices().await.expect("Failed to fetch prices");
    info!(?prices, "[PriceProvider] average price");
}
