use crate::models::*;
use crate::parser::ReadUtils;
use crate::ParserError;
use bytes::{Buf, Bytes};

/// <https://tools.ietf.org/html/rfc4456>
pub fn parse_clusters(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    let mut clusters = Vec::with_capacity(input.remaining() / 4);
    while input.remaining() > 0 {
        clusters.push(input.read_ipv4_address()?);
    }
    Ok(AttributeValue::ClusterList(clusters))
}

/// CLUSTER_ID (type 13), deprecated by [RFC6938](https://datatracker.ietf.org/doc/html/rfc6938).
pub fn parse_cluster_id(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    input.expect_remaining_eq(4, "CLUSTER_ID")?;
    Ok(AttributeValue::ClusterId(input.read_ipv4_address()?))
}
