use crate::error::ParserError;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// AS number length: 16 or 32 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsnLength {
    Bits16,
    Bits32,
}

impl AsnLength {
    /// Number of bytes one ASN occupies on the wire.
    pub const fn bytes(&self) -> usize {
        match self {
            AsnLength::Bits16 => 2,
            AsnLength::Bits32 => 4,
        }
    }
}

impl TryFrom<u8> for AsnLength {
    type Error = ParserError;

    /// Convert an AS number width given in bytes, as carried by MRT record framing.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(AsnLength::Bits16),
            4 => Ok(AsnLength::Bits32),
            v => Err(ParserError::InvalidAsnWidth(v)),
        }
    }
}

/// ASN -- Autonomous System Number
#[derive(Debug, Clone, Copy, Eq, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Asn {
    pub asn: u32,
    pub len: AsnLength,
}

impl Asn {
    /// Reserved 2-octet placeholder for ASNs that do not fit into 16 bits.
    ///
    /// <https://datatracker.ietf.org/doc/html/rfc6793#section-9>
    pub const AS_TRANS: Asn = Asn::new_16bit(23456);

    /// Constructs a new 2-octet `Asn` with `AsnLength::Bits16`.
    pub const fn new_16bit(asn: u16) -> Self {
        Asn {
            asn: asn as u32,
            len: AsnLength::Bits16,
        }
    }

    /// Constructs a new 4-octet `Asn` with `AsnLength::Bits32`.
    pub const fn new_32bit(asn: u32) -> Self {
        Asn {
            asn,
            len: AsnLength::Bits32,
        }
    }

    /// Checks if this is the AS_TRANS placeholder (AS23456).
    pub const fn is_trans(&self) -> bool {
        self.asn == 23456
    }
}

impl PartialEq for Asn {
    fn eq(&self, other: &Self) -> bool {
        self.asn == other.asn
    }
}

impl Hash for Asn {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.asn.hash(state);
    }
}

impl PartialEq<u32> for Asn {
    fn eq(&self, other: &u32) -> bool {
        self.asn == *other
    }
}

impl From<u32> for Asn {
    fn from(v: u32) -> Self {
        Asn::new_32bit(v)
    }
}

impl From<Asn> for u32 {
    fn from(value: Asn) -> Self {
        value.asn
    }
}

impl Display for Asn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.asn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asn_length_from_width() {
        assert_eq!(AsnLength::try_from(2).unwrap(), AsnLength::Bits16);
        assert_eq!(AsnLength::try_from(4).unwrap(), AsnLength::Bits32);
        assert!(matches!(
            AsnLength::try_from(3),
            Err(ParserError::InvalidAsnWidth(3))
        ));
        assert_eq!(AsnLength::Bits16.bytes(), 2);
        assert_eq!(AsnLength::Bits32.bytes(), 4);
    }

    #[test]
    fn test_asn_equality_ignores_width() {
        assert_eq!(Asn::new_16bit(65000), Asn::new_32bit(65000));
        assert_eq!(Asn::new_32bit(65000), 65000u32);
        assert!(Asn::AS_TRANS.is_trans());
        assert!(!Asn::new_32bit(196608).is_trans());
        assert_eq!(Asn::new_32bit(196608).to_string(), "196608");
    }
}
