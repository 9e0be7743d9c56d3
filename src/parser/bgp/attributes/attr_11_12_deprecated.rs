//! DPA (11) and ADVERTISER (12), both deprecated by
//! [RFC6938](https://datatracker.ietf.org/doc/html/rfc6938) but still present in archived dumps.

use crate::models::*;
use crate::parser::ReadUtils;
use crate::ParserError;
use bytes::Bytes;

/// DPA: a 2-byte AS number followed by a 4-byte preference value.
pub fn parse_dpa(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    input.expect_remaining_eq(6, "DPA")?;
    let asn = input.read_asn(AsnLength::Bits16)?;
    let value = input.read_u32()?;
    Ok(AttributeValue::Dpa { asn, value })
}

pub fn parse_advertiser(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    input.expect_remaining_eq(4, "ADVERTISER")?;
    Ok(AttributeValue::Advertiser(input.read_ipv4_address()?))
}
