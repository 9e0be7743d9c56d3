use num_enum::{FromPrimitive, IntoPrimitive, TryFromPrimitive};
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// AFI -- Address Family Identifier
///
/// Only the address families whose NLRI this crate can decode are listed.
///
/// <https://www.iana.org/assignments/address-family-numbers/address-family-numbers.xhtml>
#[derive(Debug, PartialEq, TryFromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Afi {
    Ipv4 = 1,
    Ipv6 = 2,
}

impl Afi {
    /// Highest address family identifier the decoder understands. MP_REACH and MP_UNREACH
    /// attributes carrying a larger value are treated as having no reachability information.
    pub const MAX: u16 = Afi::Ipv6 as u16;

    /// Width in bytes of a full address in this family.
    pub const fn address_len(&self) -> usize {
        match self {
            Afi::Ipv4 => 4,
            Afi::Ipv6 => 16,
        }
    }
}

impl From<IpAddr> for Afi {
    #[inline]
    fn from(value: IpAddr) -> Self {
        match value {
            IpAddr::V4(_) => Afi::Ipv4,
            IpAddr::V6(_) => Afi::Ipv6,
        }
    }
}

/// SAFI -- Subsequent Address Family Identifier
///
/// Values not listed here are kept as [Safi::Unknown] since the decoder does not act on them.
#[derive(Debug, PartialEq, FromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Safi {
    Unicast = 1,
    Multicast = 2,
    UnicastMulticast = 3,
    #[num_enum(catch_all)]
    Unknown(u8),
}

impl Display for Afi {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Afi::Ipv4 => write!(f, "IPv4"),
            Afi::Ipv6 => write!(f, "IPv6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_afi_from() {
        assert_eq!(
            Afi::from(IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))),
            Afi::Ipv4
        );
        assert_eq!(
            Afi::from(IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))),
            Afi::Ipv6
        );
    }

    #[test]
    fn test_afi_safi_repr() {
        assert_eq!(Afi::Ipv4 as u16, 1);
        assert_eq!(Afi::Ipv6 as u16, 2);
        assert_eq!(Afi::MAX, 2);
        assert!(Afi::try_from(3u16).is_err());

        assert_eq!(Safi::from(1u8), Safi::Unicast);
        assert_eq!(Safi::from(2u8), Safi::Multicast);
        assert_eq!(Safi::from(3u8), Safi::UnicastMulticast);
        assert_eq!(Safi::from(128u8), Safi::Unknown(128));
        assert_eq!(u8::from(Safi::Unknown(128)), 128);
    }
}
