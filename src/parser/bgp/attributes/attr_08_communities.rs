use crate::models::*;
use crate::parser::ReadUtils;
use crate::ParserError;
use bytes::{Buf, Bytes};

/// Parse COMMUNITIES as defined in [RFC1997](https://datatracker.ietf.org/doc/html/rfc1997).
pub fn parse_regular_communities(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    if input.remaining() % 4 != 0 {
        return Err(ParserError::ParseError(format!(
            "COMMUNITIES length {} is not a multiple of 4",
            input.remaining()
        )));
    }

    let mut communities = Vec::with_capacity(input.remaining() / 4);
    while input.remaining() > 0 {
        communities.push(Community::from(input.read_u32()?));
    }

    Ok(AttributeValue::Communities(communities))
}
