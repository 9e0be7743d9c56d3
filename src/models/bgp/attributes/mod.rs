//! BGP attribute structs
mod atomic_aggregate;
mod nlri;
mod origin;
mod set;

use crate::models::*;
use bitflags::bitflags;
use itertools::Itertools;
use num_enum::{FromPrimitive, IntoPrimitive};
use std::fmt::{Display, Formatter};
use std::net::Ipv4Addr;

pub use atomic_aggregate::*;
pub use nlri::*;
pub use origin::*;
pub use set::*;

bitflags! {
    /// The high-order bit (bit 0) of the Attribute Flags octet is the
    /// Optional bit.  It defines whether the attribute is optional (if
    /// set to 1) or well-known (if set to 0).
    ///
    /// The second high-order bit (bit 1) of the Attribute Flags octet
    /// is the Transitive bit.  It defines whether an optional
    /// attribute is transitive (if set to 1) or non-transitive (if set
    /// to 0).
    ///
    /// The third high-order bit (bit 2) of the Attribute Flags octet
    /// is the Partial bit.  It defines whether the information
    /// contained in the optional transitive attribute is partial (if
    /// set to 1) or complete (if set to 0).
    ///
    /// The fourth high-order bit (bit 3) of the Attribute Flags octet
    /// is the Extended Length bit.  It defines whether the Attribute
    /// Length is one octet (if set to 0) or two octets (if set to 1).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AttrFlags: u8 {
        const OPTIONAL   = 0b10000000;
        const TRANSITIVE = 0b01000000;
        const PARTIAL    = 0b00100000;
        const EXTENDED   = 0b00010000;
    }
}

/// Attribute type codes understood by the decoder.
///
/// Anything else on the wire is carried as [AttrType::Unknown] and skipped. The full registry
/// lives at IANA:
/// <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-2>
#[allow(non_camel_case_types)]
#[derive(Debug, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AttrType {
    ORIGIN = 1,
    AS_PATH = 2,
    NEXT_HOP = 3,
    MULTI_EXIT_DISCRIMINATOR = 4,
    LOCAL_PREFERENCE = 5,
    ATOMIC_AGGREGATE = 6,
    AGGREGATOR = 7,
    COMMUNITIES = 8,
    /// <https://tools.ietf.org/html/rfc4456>
    ORIGINATOR_ID = 9,
    CLUSTER_LIST = 10,
    /// Deprecated, <https://datatracker.ietf.org/doc/html/rfc6938>
    DPA = 11,
    /// Deprecated, <https://datatracker.ietf.org/doc/html/rfc6938>
    ADVERTISER = 12,
    /// Deprecated (RCID_PATH / CLUSTER_ID), <https://datatracker.ietf.org/doc/html/rfc6938>
    CLUSTER_ID = 13,
    /// <https://tools.ietf.org/html/rfc4760>
    MP_REACHABLE_NLRI = 14,
    MP_UNREACHABLE_NLRI = 15,
    /// <https://datatracker.ietf.org/doc/html/rfc4360>
    EXTENDED_COMMUNITIES = 16,
    /// <https://datatracker.ietf.org/doc/html/rfc6793>
    AS4_PATH = 17,
    AS4_AGGREGATOR = 18,
    /// Expired draft-ietf-idr-as-pathlimit, still seen in archived dumps.
    AS_PATHLIMIT = 21,
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// Fixed storage position of each attribute kind inside an [Attributes] set.
///
/// The order is also the field order of the pipe-delimited rendering.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum AttrSlot {
    AsPath = 0,
    Origin,
    NextHop,
    LocalPreference,
    MultiExitDiscriminator,
    Communities,
    AtomicAggregate,
    Aggregator,
    OriginatorId,
    ClusterList,
    Dpa,
    Advertiser,
    ClusterId,
    MpReachNlri,
    MpUnreachNlri,
    ExtendedCommunities,
    AsPathLimit,
}

impl AttrSlot {
    /// Number of slots; one past the last slot index.
    pub const TOTAL: usize = AttrSlot::AsPathLimit as usize + 1;

    pub const ALL: [AttrSlot; AttrSlot::TOTAL] = [
        AttrSlot::AsPath,
        AttrSlot::Origin,
        AttrSlot::NextHop,
        AttrSlot::LocalPreference,
        AttrSlot::MultiExitDiscriminator,
        AttrSlot::Communities,
        AttrSlot::AtomicAggregate,
        AttrSlot::Aggregator,
        AttrSlot::OriginatorId,
        AttrSlot::ClusterList,
        AttrSlot::Dpa,
        AttrSlot::Advertiser,
        AttrSlot::ClusterId,
        AttrSlot::MpReachNlri,
        AttrSlot::MpUnreachNlri,
        AttrSlot::ExtendedCommunities,
        AttrSlot::AsPathLimit,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The `AttributeValue` enum represents the decoded value of one path attribute.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    AsPath(AsPath),
    Origin(Origin),
    NextHop(NextHop),
    LocalPreference(u32),
    MultiExitDiscriminator(u32),
    Communities(Vec<Community>),
    AtomicAggregate(AtomicAggregate),
    Aggregator { asn: Asn, id: Ipv4Addr },
    OriginatorId(Ipv4Addr),
    ClusterList(Vec<Ipv4Addr>),
    Dpa { asn: Asn, value: u32 },
    Advertiser(Ipv4Addr),
    ClusterId(Ipv4Addr),
    MpReachNlri(MpReach),
    MpUnreachNlri(MpUnreach),
    ExtendedCommunities(Vec<ExtendedCommunity>),
    AsPathLimit { upper_bound: u8, asn: Asn },
}

impl AttributeValue {
    /// The slot this value is stored in.
    pub const fn slot(&self) -> AttrSlot {
        match self {
            AttributeValue::AsPath(_) => AttrSlot::AsPath,
            AttributeValue::Origin(_) => AttrSlot::Origin,
            AttributeValue::NextHop(_) => AttrSlot::NextHop,
            AttributeValue::LocalPreference(_) => AttrSlot::LocalPreference,
            AttributeValue::MultiExitDiscriminator(_) => AttrSlot::MultiExitDiscriminator,
            AttributeValue::Communities(_) => AttrSlot::Communities,
            AttributeValue::AtomicAggregate(_) => AttrSlot::AtomicAggregate,
            AttributeValue::Aggregator { .. } => AttrSlot::Aggregator,
            AttributeValue::OriginatorId(_) => AttrSlot::OriginatorId,
            AttributeValue::ClusterList(_) => AttrSlot::ClusterList,
            AttributeValue::Dpa { .. } => AttrSlot::Dpa,
            AttributeValue::Advertiser(_) => AttrSlot::Advertiser,
            AttributeValue::ClusterId(_) => AttrSlot::ClusterId,
            AttributeValue::MpReachNlri(_) => AttrSlot::MpReachNlri,
            AttributeValue::MpUnreachNlri(_) => AttrSlot::MpUnreachNlri,
            AttributeValue::ExtendedCommunities(_) => AttrSlot::ExtendedCommunities,
            AttributeValue::AsPathLimit { .. } => AttrSlot::AsPathLimit,
        }
    }
}

impl Display for AttributeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttributeValue::AsPath(path) => write!(f, "{}", path),
            AttributeValue::Origin(origin) => write!(f, "{}", origin),
            AttributeValue::NextHop(next_hop) => write!(f, "{}", next_hop),
            AttributeValue::LocalPreference(v) | AttributeValue::MultiExitDiscriminator(v) => {
                write!(f, "{}", v)
            }
            AttributeValue::Communities(c) => write!(f, "{}", c.iter().join(" ")),
            AttributeValue::AtomicAggregate(ag) => write!(f, "{}", ag),
            AttributeValue::Aggregator { asn, id } => write!(f, "{} {}", asn, id),
            AttributeValue::OriginatorId(id)
            | AttributeValue::Advertiser(id)
            | AttributeValue::ClusterId(id) => write!(f, "{}", id),
            AttributeValue::ClusterList(ids) => write!(f, "{}", ids.iter().join(" ")),
            AttributeValue::Dpa { asn, value } => write!(f, "{}:{}", asn, value),
            AttributeValue::MpReachNlri(reach) => write!(f, "{}", reach),
            AttributeValue::MpUnreachNlri(unreach) => write!(f, "{}", unreach),
            AttributeValue::ExtendedCommunities(c) => write!(f, "{}", c.iter().join(" ")),
            AttributeValue::AsPathLimit { upper_bound, asn } => {
                write!(f, "{}:{}", upper_bound, asn)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_type_codes() {
        assert_eq!(AttrType::from(2u8), AttrType::AS_PATH);
        assert_eq!(AttrType::from(21u8), AttrType::AS_PATHLIMIT);
        assert_eq!(AttrType::from(32u8), AttrType::Unknown(32));
        assert_eq!(u8::from(AttrType::MP_REACHABLE_NLRI), 14);
        assert_eq!(u8::from(AttrType::Unknown(99)), 99);
    }

    #[test]
    fn test_attr_flags() {
        let flags = AttrFlags::from_bits_retain(0x90);
        assert!(flags.contains(AttrFlags::OPTIONAL));
        assert!(flags.contains(AttrFlags::EXTENDED));
        assert!(!flags.contains(AttrFlags::PARTIAL));
        assert!(!AttrFlags::from_bits_retain(0x40).contains(AttrFlags::EXTENDED));
    }

    #[test]
    fn test_slot_layout() {
        assert_eq!(AttrSlot::TOTAL, 17);
        for (idx, slot) in AttrSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), idx);
        }
    }

    #[test]
    fn test_value_slot_and_display() {
        let v = AttributeValue::Aggregator {
            asn: Asn::new_16bit(65000),
            id: Ipv4Addr::new(10, 0, 0, 1),
        };
        assert_eq!(v.slot(), AttrSlot::Aggregator);
        assert_eq!(v.to_string(), "65000 10.0.0.1");

        let v = AttributeValue::Communities(vec![
            Community::Custom(Asn::new_16bit(3356), 100),
            Community::NoExport,
        ]);
        assert_eq!(v.slot(), AttrSlot::Communities);
        assert_eq!(v.to_string(), "3356:100 no-export");

        let v = AttributeValue::AsPathLimit {
            upper_bound: 5,
            asn: Asn::new_32bit(13030),
        };
        assert_eq!(v.slot(), AttrSlot::AsPathLimit);
        assert_eq!(v.to_string(), "5:13030");

        let v = AttributeValue::ClusterList(vec![
            Ipv4Addr::new(192, 0, 2, 1),
            Ipv4Addr::new(192, 0, 2, 2),
        ]);
        assert_eq!(v.to_string(), "192.0.2.1 192.0.2.2");
    }
}
