use crate::models::*;
use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// Decoded MP_REACH_NLRI attribute.
///
/// `afi` keeps the wire value so that attributes for address families beyond [Afi::MAX] can be
/// represented; those carry no next hops and no prefixes.
///
/// <https://datatracker.ietf.org/doc/html/rfc4760#section-3>
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MpReach {
    pub afi: u16,
    pub safi: Safi,
    /// Global next hop, optionally followed by the IPv6 link-local next hop.
    pub next_hops: Vec<IpAddr>,
    pub prefixes: Vec<NetworkPrefix>,
}

impl MpReach {
    /// Result for an attribute that carries no usable reachability information.
    pub fn empty(afi: u16, safi: Safi) -> MpReach {
        MpReach {
            afi,
            safi,
            next_hops: vec![],
            prefixes: vec![],
        }
    }

    /// The address family, if it is one the decoder supports.
    pub fn address_family(&self) -> Option<Afi> {
        Afi::try_from(self.afi).ok()
    }

    pub fn first_next_hop(&self) -> Option<IpAddr> {
        self.next_hops.first().copied()
    }

    /// The IPv6 link-local next hop, present when the next hop field was 32 bytes long.
    pub fn link_local_next_hop(&self) -> Option<IpAddr> {
        self.next_hops.get(1).copied()
    }
}

/// Decoded MP_UNREACH_NLRI attribute.
///
/// <https://datatracker.ietf.org/doc/html/rfc4760#section-4>
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MpUnreach {
    pub afi: u16,
    pub safi: Safi,
    pub prefixes: Vec<NetworkPrefix>,
}

impl MpUnreach {
    pub fn empty(afi: u16, safi: Safi) -> MpUnreach {
        MpUnreach {
            afi,
            safi,
            prefixes: vec![],
        }
    }

    pub fn address_family(&self) -> Option<Afi> {
        Afi::try_from(self.afi).ok()
    }
}

impl Display for MpReach {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let items = self
            .next_hops
            .iter()
            .map(|nh| format!("NEXT_HOP:{}", nh))
            .chain(self.prefixes.iter().map(|p| format!("NLRI:{}", p)));
        for (idx, item) in items.enumerate() {
            if idx != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl Display for MpUnreach {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, prefix) in self.prefixes.iter().enumerate() {
            if idx != 0 {
                write!(f, " ")?;
            }
            write!(f, "WITHDRAWN:{}", prefix)?;
        }
        Ok(())
    }
}
