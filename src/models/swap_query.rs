use graphql_client::GraphQLQuery;

type BigDecimal = String;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "uniswap-schema.graphql",
    query_path = "queries/swaps.graphql",
    response_derives = "Debug"
)]
pub struct SwapVolumes;
