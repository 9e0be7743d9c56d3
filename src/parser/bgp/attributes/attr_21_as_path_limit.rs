use crate::models::*;
use crate::parser::ReadUtils;
use crate::ParserError;
use bytes::Bytes;

/// AS_PATHLIMIT from the expired draft-ietf-idr-as-pathlimit.
///
/// ```text
///    0                   1                   2                   3
///    0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
///   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///   |  upper bound  |                    AS number                  |
///   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///   |               |
///   +-+-+-+-+-+-+-+-+
/// ```
pub fn parse_as_path_limit(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    input.expect_remaining_eq(5, "AS_PATHLIMIT")?;
    let upper_bound = input.read_u8()?;
    let asn = input.read_asn(AsnLength::Bits32)?;
    Ok(AttributeValue::AsPathLimit { upper_bound, asn })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_as_path_limit() {
        let res = parse_as_path_limit(Bytes::from_static(&[
            10, // upper bound
            0x00, 0x00, 0xfd, 0xe8, // AS65000
        ]))
        .unwrap();
        assert_eq!(
            res,
            AttributeValue::AsPathLimit {
                upper_bound: 10,
                asn: Asn::new_32bit(65000)
            }
        );
        assert_eq!(res.to_string(), "10:65000");

        assert!(matches!(
            parse_as_path_limit(Bytes::from_static(&[10, 0, 0, 0xfd])).unwrap_err(),
            ParserError::InvalidLength { expected: 5, found: 4, .. }
        ));
    }
}
