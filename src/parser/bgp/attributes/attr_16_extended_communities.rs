//! BGP Extended Communities Attribute
//!
//! RFC4360: <https://datatracker.ietf.org/doc/html/rfc4360#section-4.5>
//! IANA Codes: <https://www.iana.org/assignments/bgp-extended-communities/bgp-extended-communities.xhtml>

use crate::models::*;
use crate::parser::ReadUtils;
use crate::ParserError;
use bytes::{Buf, Bytes};
use std::net::Ipv4Addr;

pub fn parse_extended_community(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    if input.remaining() % 8 != 0 {
        return Err(ParserError::ParseError(format!(
            "EXTENDED_COMMUNITIES length {} is not a multiple of 8",
            input.remaining()
        )));
    }

    let mut communities = Vec::with_capacity(input.remaining() / 8);

    while input.remaining() > 0 {
        let ec_type_u8 = input.read_u8()?;
        let ec: ExtendedCommunity = match ExtendedCommunityType::from(ec_type_u8) {
            ExtendedCommunityType::TransitiveTwoOctetAs => {
                ExtendedCommunity::TransitiveTwoOctetAs(read_two_octet_as(&mut input)?)
            }
            ExtendedCommunityType::NonTransitiveTwoOctetAs => {
                ExtendedCommunity::NonTransitiveTwoOctetAs(read_two_octet_as(&mut input)?)
            }
            ExtendedCommunityType::TransitiveIpv4Addr => {
                ExtendedCommunity::TransitiveIpv4Addr(read_ipv4_addr(&mut input)?)
            }
            ExtendedCommunityType::NonTransitiveIpv4Addr => {
                ExtendedCommunity::NonTransitiveIpv4Addr(read_ipv4_addr(&mut input)?)
            }
            ExtendedCommunityType::TransitiveFourOctetAs => {
                ExtendedCommunity::TransitiveFourOctetAs(read_four_octet_as(&mut input)?)
            }
            ExtendedCommunityType::NonTransitiveFourOctetAs => {
                ExtendedCommunity::NonTransitiveFourOctetAs(read_four_octet_as(&mut input)?)
            }
            ExtendedCommunityType::TransitiveOpaque => {
                ExtendedCommunity::TransitiveOpaque(read_opaque(&mut input)?)
            }
            ExtendedCommunityType::NonTransitiveOpaque => {
                ExtendedCommunity::NonTransitiveOpaque(read_opaque(&mut input)?)
            }
            ExtendedCommunityType::Unknown(_) => {
                let mut buffer: [u8; 8] = [0; 8];
                buffer[0] = ec_type_u8;
                buffer[1..].copy_from_slice(&input.read_array::<7>()?);
                ExtendedCommunity::Raw(buffer)
            }
        };

        communities.push(ec);
    }
    Ok(AttributeValue::ExtendedCommunities(communities))
}

fn read_two_octet_as(input: &mut Bytes) -> Result<TwoOctetAsExtCommunity, ParserError> {
    Ok(TwoOctetAsExtCommunity {
        subtype: input.read_u8()?,
        global_admin: Asn::new_16bit(input.read_u16()?),
        local_admin: input.read_array()?,
    })
}

fn read_ipv4_addr(input: &mut Bytes) -> Result<Ipv4AddrExtCommunity, ParserError> {
    Ok(Ipv4AddrExtCommunity {
        subtype: input.read_u8()?,
        global_admin: Ipv4Addr::from(input.read_u32()?),
        local_admin: input.read_array()?,
    })
}

fn read_four_octet_as(input: &mut Bytes) -> Result<FourOctetAsExtCommunity, ParserError> {
    Ok(FourOctetAsExtCommunity {
        subtype: input.read_u8()?,
        global_admin: Asn::new_32bit(input.read_u32()?),
        local_admin: input.read_array()?,
    })
}

fn read_opaque(input: &mut Bytes) -> Result<OpaqueExtCommunity, ParserError> {
    Ok(OpaqueExtCommunity {
        subtype: input.read_u8()?,
        value: input.read_array()?,
    })
}
