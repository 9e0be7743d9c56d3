use crate::models::*;
use crate::parser::ReadUtils;
use crate::ParserError;
use bytes::{Buf, Bytes};

/// Parse the NEXT_HOP attribute.
///
/// The attribute is defined as an IPv4 address. A 16-byte value is accepted as an IPv6 address
/// since some collectors record it that way.
pub fn parse_next_hop(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    let len = input.remaining();
    let addr = input.read_address_by_len(len)?;
    Ok(AttributeValue::NextHop(NextHop::new(addr)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use std::str::FromStr;

    #[test]
    fn test_parse_next_hop() {
        let ipv4 = Ipv4Addr::from_str("10.0.0.1").unwrap();
        let ipv6 = Ipv6Addr::from_str("FC00::1").unwrap();
        let ipv4_bytes = Bytes::from(ipv4.octets().to_vec());
        let ipv6_bytes = Bytes::from(ipv6.octets().to_vec());

        let res = parse_next_hop(ipv4_bytes).unwrap();
        assert_eq!(res, AttributeValue::NextHop(NextHop::new(IpAddr::V4(ipv4))));
        assert_eq!(res.to_string(), "10.0.0.1");

        let res = parse_next_hop(ipv6_bytes).unwrap();
        assert_eq!(res, AttributeValue::NextHop(NextHop::new(IpAddr::V6(ipv6))));
        assert_eq!(res.to_string().to_ascii_uppercase(), "FC00::1");
    }

    #[test]
    fn test_parse_next_hop_bad_length() {
        assert!(parse_next_hop(Bytes::from_static(&[10, 0, 0])).is_err());
        assert!(parse_next_hop(Bytes::new()).is_err());
    }
}
