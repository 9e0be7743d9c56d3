use crate::models::*;
use crate::parser::ReadUtils;
use crate::ParserError;
use bytes::Bytes;

/// ```text
/// ORIGINATOR_ID is a new optional, non-transitive BGP attribute of Type
/// code 9.  This attribute is 4 bytes long and it will be created by an
/// RR in reflecting a route.
/// ```
pub fn parse_originator_id(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    input.expect_remaining_eq(4, "ORIGINATOR_ID")?;
    Ok(AttributeValue::OriginatorId(input.read_ipv4_address()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use std::str::FromStr;

    #[test]
    fn test_parse_originator_id() {
        let ipv4 = Ipv4Addr::from_str("10.0.0.1").unwrap();
        assert_eq!(
            parse_originator_id(Bytes::from(ipv4.octets().to_vec())).unwrap(),
            AttributeValue::OriginatorId(ipv4)
        );
        assert!(parse_originator_id(Bytes::from_static(&[10, 0, 0, 1, 0])).is_err());
    }
}
