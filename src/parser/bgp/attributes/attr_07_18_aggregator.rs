use crate::models::*;
use crate::parser::ReadUtils;
use crate::ParserError;
use bytes::Bytes;
use std::net::Ipv4Addr;

/// Parse aggregator attribute.
///
/// https://www.rfc-editor.org/rfc/rfc4271.html#section-5.1.7
///
/// ```text
///    AGGREGATOR is an optional transitive attribute, which MAY be included
///    in updates that are formed by aggregation (see Section 9.2.2.2).  A
///    BGP speaker that performs route aggregation MAY add the AGGREGATOR
///    attribute, which SHALL contain its own AS number and IP address.  The
///    IP address SHOULD be the same as the BGP Identifier of the speaker.`
/// ```
///
/// The AS number has the width negotiated for the session; the value must be exactly that width
/// plus the 4-byte identifier.
pub fn parse_aggregator(
    input: Bytes,
    asn_len: &AsnLength,
) -> Result<(Asn, Ipv4Addr), ParserError> {
    read_aggregator(input, asn_len, "AGGREGATOR")
}

/// Parse AS4_AGGREGATOR: the AGGREGATOR layout with a 4-byte AS number regardless of the session.
///
/// <https://datatracker.ietf.org/doc/html/rfc6793#section-3>
pub fn parse_as4_aggregator(input: Bytes) -> Result<(Asn, Ipv4Addr), ParserError> {
    read_aggregator(input, &AsnLength::Bits32, "AS4_AGGREGATOR")
}

fn read_aggregator(
    mut input: Bytes,
    asn_len: &AsnLength,
    attr: &'static str,
) -> Result<(Asn, Ipv4Addr), ParserError> {
    input.expect_remaining_eq(asn_len.bytes() + 4, attr)?;
    let asn = input.read_asn(*asn_len)?;

    // the BGP identifier is always 4 bytes or IPv4 address
    let identifier = input.read_ipv4_address()?;
    Ok((asn, identifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_aggregator() {
        let identifier = Ipv4Addr::from_str("10.0.0.1").unwrap();
        let mut data = vec![];
        data.extend([1u8, 2]);
        data.extend(identifier.octets());
        let bytes = Bytes::from(data);

        let (asn, n) = parse_aggregator(bytes, &AsnLength::Bits16).unwrap();
        assert_eq!(n, identifier);
        assert_eq!(asn, Asn::new_16bit(258));

        let mut data = vec![];
        data.extend([0u8, 0, 1, 2]);
        data.extend(identifier.octets());
        let bytes = Bytes::from(data);

        let (asn, n) = parse_aggregator(bytes, &AsnLength::Bits32).unwrap();
        assert_eq!(n, identifier);
        assert_eq!(asn, Asn::new_16bit(258));
    }

    #[test]
    fn test_parse_aggregator_width_mismatch() {
        // 8 bytes although the session uses 2-byte AS numbers
        let bytes = Bytes::from_static(&[0, 3, 0x0d, 0x40, 192, 0, 2, 1]);
        assert!(matches!(
            parse_aggregator(bytes, &AsnLength::Bits16).unwrap_err(),
            ParserError::InvalidLength {
                attr: "AGGREGATOR",
                expected: 6,
                found: 8
            }
        ));

        // 6 bytes although the session uses 4-byte AS numbers
        let bytes = Bytes::from_static(&[0, 100, 192, 0, 2, 1]);
        assert!(matches!(
            parse_aggregator(bytes, &AsnLength::Bits32).unwrap_err(),
            ParserError::InvalidLength {
                attr: "AGGREGATOR",
                expected: 8,
                found: 6
            }
        ));
    }

    #[test]
    fn test_parse_as4_aggregator() {
        let bytes = Bytes::from_static(&[0, 3, 0x0d, 0x40, 192, 0, 2, 1]);
        let (asn, id) = parse_as4_aggregator(bytes).unwrap();
        assert_eq!(asn, 200_000);
        assert_eq!(asn.len, AsnLength::Bits32);
        assert_eq!(id, Ipv4Addr::new(192, 0, 2, 1));

        // a 2-byte AS number is not accepted
        let bytes = Bytes::from_static(&[0, 200, 10, 0, 0, 9]);
        assert!(matches!(
            parse_as4_aggregator(bytes).unwrap_err(),
            ParserError::InvalidLength {
                attr: "AS4_AGGREGATOR",
                expected: 8,
                found: 6
            }
        ));
    }

    #[test]
    fn test_parse_aggregator_bad_length() {
        let bytes = Bytes::from_static(&[0, 1, 10, 0, 0]);
        assert!(matches!(
            parse_aggregator(bytes, &AsnLength::Bits16).unwrap_err(),
            ParserError::InvalidLength { found: 5, .. }
        ));
    }
}
