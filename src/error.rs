/*!
error module defines the error types used in mrt-path-attrs.
*/
use num_enum::{TryFromPrimitive, TryFromPrimitiveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    /// This error represents a [num_enum::TryFromPrimitiveError] error for any of a number of
    /// different types.
    ///
    /// ## Occurs during:
    ///  - Parsing of ORIGIN values and address family identifiers
    #[error("unrecognized value {value} for {type_name}")]
    UnrecognizedEnumVariant { type_name: &'static str, value: u64 },
    /// This error represents a [ipnet::PrefixLenError] error. It occurs if an address mask is
    /// larger than the length of the address it is being applied to.
    ///
    /// ## Occurs during:
    ///  - Reading NLRI prefixes inside MP_REACH/MP_UNREACH
    #[error("invalid network prefix mask")]
    InvalidPrefixLength(#[from] ipnet::PrefixLenError),
    /// The AS number width handed to the decoder is neither 2 nor 4 bytes.
    ///
    /// ## Occurs during:
    ///  - Construction of an [AttributeParser](crate::AttributeParser)
    #[error("unsupported AS number width: {0} bytes (expected 2 or 4)")]
    InvalidAsnWidth(u8),
    /// The same attribute type code was registered twice.
    ///
    /// ## Occurs during:
    ///  - Construction of an attribute registry
    #[error("attribute type {0} registered more than once")]
    DuplicateAttrType(u8),
    /// The attribute block described by the caller does not fit the record buffer.
    #[error("attribute block [{offset}, {offset}+{length}) exceeds buffer of {buffer_len} bytes")]
    BlockOutOfBounds {
        offset: usize,
        length: usize,
        buffer_len: usize,
    },
    /// A read would go past the end of the current buffer.
    #[error("not enough bytes to read {context}: {required} required, {remaining} remaining")]
    NotEnoughBytes {
        required: usize,
        remaining: usize,
        context: &'static str,
    },
    /// A fixed-size attribute value has the wrong length.
    #[error("invalid {attr} length: expected {expected}, found {found}")]
    InvalidLength {
        attr: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{0}")]
    ParseError(String),
    /// Wraps a failure while decoding the value of a single attribute with the position of that
    /// attribute in the record buffer.
    #[error("failed to decode attribute type {attr_type} at offset {offset}: {source}")]
    AttributeDecode {
        attr_type: u8,
        offset: usize,
        #[source]
        source: Box<ParserError>,
    },
}

impl<T> From<TryFromPrimitiveError<T>> for ParserError
where
    T: TryFromPrimitive,
    T::Primitive: Into<u64>,
{
    #[inline]
    fn from(value: TryFromPrimitiveError<T>) -> Self {
        ParserError::UnrecognizedEnumVariant {
            type_name: T::NAME,
            value: value.number.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Origin;

    #[test]
    fn test_enum_variant_conversion() {
        let err: ParserError = Origin::try_from(7u8).unwrap_err().into();
        assert!(matches!(
            err,
            ParserError::UnrecognizedEnumVariant { value: 7, .. }
        ));
    }

    #[test]
    fn test_attribute_error_display() {
        let err = ParserError::AttributeDecode {
            attr_type: 5,
            offset: 12,
            source: Box::new(ParserError::InvalidLength {
                attr: "LOCAL_PREFERENCE",
                expected: 4,
                found: 3,
            }),
        };
        assert_eq!(
            err.to_string(),
            "failed to decode attribute type 5 at offset 12: invalid LOCAL_PREFERENCE length: expected 4, found 3"
        );
    }
}
