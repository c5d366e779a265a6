use std::time::Instant;

use bigdecimal::BigDecimal;
use graphql_client::{GraphQLQuery, Response};
use tracing::info;

use crate::models::swap_query::{swap_volumes, SwapVolumes};

const GATEWAY_URL: &str = "https://gateway.thegraph.com/api/da162f6f59fe4400bb44cfb2f36d1336/subgraphs/id/5zvR82QoaXYFyDEKLZ9t6v9adgnptxYpKpSbxtgVENFV";

pub async fn fetch_swap_volumes() -> Result<swap_volumes::ResponseData, reqwest::Error> {
    let res = query(swap_volumes::Variables).await?;
    Ok(swap_data(res))
}

pub fn total_volumes(data: &swap_volumes::ResponseData) -> (BigDecimal, BigDecimal) {
    let mut vol0 = BigDecimal::from(0);
    let mut vol1 = BigDecimal::from(0);

    for swap in &data.swaps {
        let amount0: BigDecimal = swap.amount0.parse().unwrap();
        let amount1: BigDecimal = swap.amount1.parse().unwrap();
        vol0 += amount0.abs();
        vol1 += amount1.abs();
    }

    (vol0, vol1)
}

fn swap_data(res: Response<swap_volumes::ResponseData>) -> swap_volumes::ResponseData {
    res.data.expect("no data in swap volume response")
}

async fn query(
    query_vars: swap_volumes::Variables,
) -> Result<Response<swap_volumes::ResponseData>, reqwest::Error> {
    let now = Instant::now();

    let client = reqwest::Client::new();
    let res = client
        .post(GATEWAY_URL)
        .json(&SwapVolumes::build_query(query_vars))
        .send()
        .await?;

    let status = res.status().as_u16();
    let duration = format!("{:.3?}", now.elapsed());
    info!(duration, status, "[SwapQuery]");

    res.json().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::swap_query::swap_volumes::SwapVolumesSwaps;

    const POOLS: [&str; 4] = [
        "0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640",
        "0x8ad599c3a0ff1de082011efddc58f1908eb6e6d8",
        "0xe0554a476a092703abdb3ef35c80e0d76d32939f",
        "0x7BeA39867e4169DBe237d55C8242a8f2fcDcc387",
    ];

    #[test]
    fn query_body_pins_pools_and_window() {
        let body = serde_json::to_value(SwapVolumes::build_query(swap_volumes::Variables))
            .expect("query body should serialize");
        let document = body["query"].as_str().expect("body should have a query key");

        for pool in POOLS {
            assert!(document.contains(pool), "missing pool {pool}");
        }
        assert!(document.contains("timestamp_gt: 1733080500"));
        assert!(document.contains("timestamp_lt: 1733080560"));
        assert!(document.contains("orderBy: timestamp"));
        assert!(document.contains("orderDirection: desc"));
    }

    #[test]
    fn data_envelope_passes_through_unchanged() {
        let res: Response<swap_volumes::ResponseData> = serde_json::from_str(
            r#"{"data": {"swaps": [{"amount0": "1.0", "amount1": "-2.0"}]}}"#,
        )
        .unwrap();

        let data = swap_data(res);
        assert_eq!(data.swaps.len(), 1);
        assert_eq!(data.swaps[0].amount0, "1.0");
        assert_eq!(data.swaps[0].amount1, "-2.0");
    }

    #[test]
    #[should_panic(expected = "no data in swap volume response")]
    fn error_envelope_panics() {
        let res: Response<swap_volumes::ResponseData> =
            serde_json::from_str(r#"{"errors": [{"message": "bad query"}]}"#).unwrap();
        swap_data(res);
    }

    #[test]
    fn total_volumes_sums_absolute_amounts() {
        let data = swap_volumes::ResponseData {
            swaps: vec![
                SwapVolumesSwaps {
                    amount0: "1.5".to_string(),
                    amount1: "-3.0".to_string(),
                },
                SwapVolumesSwaps {
                    amount0: "-2.5".to_string(),
                    amount1: "5.25".to_string(),
                },
            ],
        };

        let (vol0, vol1) = total_volumes(&data);
        assert_eq!(vol0, "4".parse::<BigDecimal>().unwrap());
        assert_eq!(vol1, "8.25".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn total_volumes_of_empty_window_is_zero() {
        let data = swap_volumes::ResponseData { swaps: vec![] };
        let (vol0, vol1) = total_volumes(&data);
        assert_eq!(vol0, BigDecimal::from(0));
        assert_eq!(vol1, BigDecimal::from(0));
    }
}
