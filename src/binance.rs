use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

const BINANCE_API_URL: &str = "https://api.binance.com";

const TRADE_SYMBOL: &str = "ETHUSDC";
const TRADE_START_MS: i64 = 1733240400000;
const TRADE_END_MS: i64 = 1733240460000;

// Wire field names follow the exchange payload: p = price, q = quantity,
// T = trade time in ms, f/l = first/last trade id, a = aggregate trade id.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case, dead_code)]
pub struct AggTrade {
    pub a: i64,
    pub p: String,
    pub q: String,
    pub f: i64,
    pub l: i64,
    pub T: i64,
    pub m: bool,
    pub M: bool,
}

pub type AggTrades = Vec<AggTrade>;

#[async_trait]
pub trait BinanceApi {
    async fn agg_trades(
        &self,
        symbol: &str,
        from_id: Option<i64>,
        start_time: Option<i64>,
        end_time: Option<i64>,
        limit: Option<i64>,
    ) -> Result<String>;
}

pub struct BinanceClient {
    base_url: String,
}

impl BinanceClient {
    pub fn new() -> Self {
        Self {
            base_url: BINANCE_API_URL.to_string(),
        }
    }
}

#[async_trait]
impl BinanceApi for BinanceClient {
    async fn agg_trades(
        &self,
        symbol: &str,
        from_id: Option<i64>,
        start_time: Option<i64>,
        end_time: Option<i64>,
        limit: Option<i64>,
    ) -> Result<String> {
        let url = agg_trades_url(&self.base_url, symbol, from_id, start_time, end_time, limit);
        let now = Instant::now();

        let client = reqwest::Client::new();
        let res = client.get(&url).send().await?;

        let status = res.status().as_u16();
        let duration = format!("{:.3?}", now.elapsed());
        info!(duration, status, symbol, "[TradeQuery]");

        Ok(res.text().await?)
    }
}

fn agg_trades_url(
    base_url: &str,
    symbol: &str,
    from_id: Option<i64>,
    start_time: Option<i64>,
    end_time: Option<i64>,
    limit: Option<i64>,
) -> String {
    let mut url = format!("{base_url}/api/v3/aggTrades?symbol={symbol}");
    if let Some(from_id) = from_id {
        url.push_str(&format!("&fromId={from_id}"));
    }
    if let Some(start_time) = start_time {
        url.push_str(&format!("&startTime={start_time}"));
    }
    if let Some(end_time) = end_time {
        url.push_str(&format!("&endTime={end_time}"));
    }
    if let Some(limit) = limit {
        url.push_str(&format!("&limit={limit}"));
    }
    url
}

pub async fn fetch_recent_trades(api: &dyn BinanceApi) -> Result<AggTrades> {
    let body = api
        .agg_trades(
            TRADE_SYMBOL,
            None,
            Some(TRADE_START_MS),
            Some(TRADE_END_MS),
            None,
        )
        .await?;
    Ok(serde_json::from_str(&body)?)
}

pub struct BinancePriceProvider {
    api: Box<dyn BinanceApi>,
}

impl BinancePriceProvider {
    const SYMBOL: &'static str = "BTCUSDC";

    pub fn new(api: Box<dyn BinanceApi>) -> Self {
        Self { api }
    }

    pub async fn prices(&self) -> Result<Vec<f64>> {
        let body = self
            .api
            .agg_trades(Self::SYMBOL, None, None, None, None)
            .await?;
        let trades: AggTrades = serde_json::from_str(&body)?;

        if trades.is_empty() {
            return Ok(vec![]);
        }

        let mut sum = 0.0;
        for trade in &trades {
            sum += trade.p.parse::<f64>()?;
        }
        Ok(vec![sum / trades.len() as f64])
    }
}
