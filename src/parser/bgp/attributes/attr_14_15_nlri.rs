use crate::models::*;
use crate::parser::{parse_nlri_list, ReadUtils};
use crate::ParserError;
use bytes::Bytes;
use log::debug;

/// Wire length of the next-hop field carrying an IPv6 global and a link-local address.
const IPV6_LINK_LOCAL_NEXT_HOP_LEN: usize = 32;

/// Parse MP_REACH_NLRI.
///
/// <https://datatracker.ietf.org/doc/html/rfc4760#section-3>
/// The attribute is encoded as shown below:
/// +---------------------------------------------------------+
/// | Address Family Identifier (2 octets)                    |
/// +---------------------------------------------------------+
/// | Subsequent Address Family Identifier (1 octet)          |
/// +---------------------------------------------------------+
/// | Length of Next Hop Network Address (1 octet)            |
/// +---------------------------------------------------------+
/// | Network Address of Next Hop (variable)                  |
/// +---------------------------------------------------------+
/// | Number of SNPAs (1 octet)                               |
/// +---------------------------------------------------------+
/// | SNPAs, each a 1-octet length and that many octets       |
/// +---------------------------------------------------------+
/// | Network Layer Reachability Information (variable)       |
/// +---------------------------------------------------------+
///
/// The SNPA field is the one of [RFC2858](https://datatracker.ietf.org/doc/html/rfc2858); RFC4760
/// turned it into a reserved octet, which decodes identically when it is 0. SNPAs are skipped.
///
/// An address family above [Afi::MAX] or a zero next-hop length yields an [MpReach] without next
/// hops and prefixes.
pub fn parse_mp_reach(mut input: Bytes, add_path: bool) -> Result<MpReach, ParserError> {
    let afi = input.read_u16()?;
    let safi = Safi::from(input.read_u8()?);
    let next_hop_len = input.read_u8()? as usize;

    if afi > Afi::MAX {
        debug!("MP_REACH with unsupported AFI {}, ignoring content", afi);
        return Ok(MpReach::empty(afi, safi));
    }
    if next_hop_len == 0 {
        debug!("MP_REACH without next hop, ignoring content");
        return Ok(MpReach::empty(afi, safi));
    }
    let family = Afi::try_from(afi)?;

    // IPv6 global address followed by a link-local address
    let address_len = match (family, next_hop_len) {
        (Afi::Ipv6, IPV6_LINK_LOCAL_NEXT_HOP_LEN) => 16,
        (_, len) => len,
    };
    let mut next_hops = Vec::with_capacity(2);
    next_hops.push(input.read_address_by_len(address_len)?);
    if next_hop_len == IPV6_LINK_LOCAL_NEXT_HOP_LEN {
        next_hops.push(input.read_address_by_len(address_len)?);
    }

    let snpa_count = input.read_u8()?;
    for _ in 0..snpa_count {
        let snpa_len = input.read_u8()? as usize;
        input.skip_n_bytes(snpa_len, "SNPA")?;
    }

    let prefixes = parse_nlri_list(input, add_path, &family)?;

    Ok(MpReach {
        afi,
        safi,
        next_hops,
        prefixes,
    })
}

/// Parse MP_UNREACH_NLRI.
///
/// <https://datatracker.ietf.org/doc/html/rfc4760#section-4>
/// +---------------------------------------------------------+
/// | Address Family Identifier (2 octets)                    |
/// +---------------------------------------------------------+
/// | Subsequent Address Family Identifier (1 octet)          |
/// +---------------------------------------------------------+
/// | Withdrawn Routes (variable)                             |
/// +---------------------------------------------------------+
pub fn parse_mp_unreach(mut input: Bytes, add_path: bool) -> Result<MpUnreach, ParserError> {
    let afi = input.read_u16()?;
    let safi = Safi::from(input.read_u8()?);

    if afi > Afi::MAX {
        debug!("MP_UNREACH with unsupported AFI {}, ignoring content", afi);
        return Ok(MpUnreach::empty(afi, safi));
    }
    let family = Afi::try_from(afi)?;
    let prefixes = parse_nlri_list(input, add_path, &family)?;

    Ok(MpUnreach {
        afi,
        safi,
        prefixes,
    })
}
