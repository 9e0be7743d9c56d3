mod attr_01_origin;
mod attr_02_17_as_path;
mod attr_03_next_hop;
mod attr_04_med;
mod attr_05_local_pref;
mod attr_07_18_aggregator;
mod attr_08_communities;
mod attr_09_originator;
mod attr_10_13_cluster;
mod attr_11_12_deprecated;
mod attr_14_15_nlri;
mod attr_16_extended_communities;
mod attr_21_as_path_limit;
mod registry;

use bytes::{Buf, Bytes};
use log::{debug, warn};

use crate::models::*;

use crate::error::ParserError;
use crate::parser::ReadUtils;

pub use registry::{AttrDecoder, AttrRegistry, DecodeContext, RegistryEntry};

/// Decoder for the path-attribute block of one route.
///
/// An instance is configured once for the AS number width and ADD-PATH mode of the session the
/// routes were recorded from, and can then decode any number of attribute blocks.
#[derive(Debug, Clone)]
pub struct AttributeParser {
    context: DecodeContext,
    registry: AttrRegistry,
}

impl AttributeParser {
    /// Create a decoder for AS numbers of `asn_bytes` bytes (2 or 4).
    pub fn new(asn_bytes: u8, add_path: bool) -> Result<AttributeParser, ParserError> {
        AttributeParser::with_asn_len(AsnLength::try_from(asn_bytes)?, add_path)
    }

    pub fn with_asn_len(asn_len: AsnLength, add_path: bool) -> Result<AttributeParser, ParserError> {
        Ok(AttributeParser {
            context: DecodeContext { asn_len, add_path },
            registry: AttrRegistry::new()?,
        })
    }

    pub fn asn_len(&self) -> AsnLength {
        self.context.asn_len
    }

    pub fn add_path(&self) -> bool {
        self.context.add_path
    }

    /// Parse the attributes stored in `record[offset..offset + length]`.
    ///
    /// Error offsets reported through [ParserError::AttributeDecode] are positions in `record`.
    pub fn parse_attributes(
        &self,
        record: &Bytes,
        offset: usize,
        length: usize,
    ) -> Result<Attributes, ParserError> {
        let end = offset
            .checked_add(length)
            .filter(|end| *end <= record.len())
            .ok_or(ParserError::BlockOutOfBounds {
                offset,
                length,
                buffer_len: record.len(),
            })?;
        self.parse_block(record.slice(offset..end), offset)
    }

    /// Parse BGP attributes given the bytes of the whole attribute block.
    pub fn parse_attribute_block(&self, data: Bytes) -> Result<Attributes, ParserError> {
        self.parse_block(data, 0)
    }

    fn parse_block(&self, mut data: Bytes, base_offset: usize) -> Result<Attributes, ParserError> {
        let block_len = data.remaining();
        let mut attributes = Attributes::new();

        while data.has_remaining() {
            let attr_offset = base_offset + block_len - data.remaining();

            // flag(1) + type(1), the length octets depend on the flag
            data.require_n_remaining(2, "attribute header")?;
            let flag = AttrFlags::from_bits_retain(data.read_u8()?);
            let attr_type = data.read_u8()?;

            self.parse_attribute(&mut data, flag, attr_type, &mut attributes)
                .map_err(|e| wrap_attr_error(attr_type, attr_offset, e))?;
        }

        Ok(attributes)
    }

    /// Parse one attribute after its flag and type octets, leaving `data` at the next header.
    fn parse_attribute(
        &self,
        data: &mut Bytes,
        flag: AttrFlags,
        attr_type: u8,
        attributes: &mut Attributes,
    ) -> Result<(), ParserError> {
        let attr_length = match flag.contains(AttrFlags::EXTENDED) {
            false => {
                data.require_n_remaining(1, "attribute length")?;
                data.read_u8()? as usize
            }
            true => {
                data.require_n_remaining(2, "extended attribute length")?;
                data.read_u16()? as usize
            }
        };

        debug!(
            "reading attribute: type -- {:?}, length -- {}",
            AttrType::from(attr_type),
            attr_length
        );

        // we know data has enough bytes to read, so we can split the bytes into a new Bytes object
        data.require_n_remaining(attr_length, "attribute value")?;
        let attr_data = data.split_to(attr_length);

        let Some(entry) = self.registry.get(attr_type) else {
            debug!("unknown attribute type: {}, skipped", attr_type);
            attributes.count_unknown_attr();
            return Ok(());
        };

        if entry.attr_type == AttrType::AS4_PATH && attr_data.is_empty() {
            debug!("zero-length AS4_PATH, not merged");
            attributes.set_as4_path_omitted();
            return Ok(());
        }

        let value = (entry.decode)(attr_data, &self.context)?;
        debug_assert_eq!(entry.slot, value.slot());

        match (entry.attr_type, value) {
            (AttrType::AS4_PATH, AttributeValue::AsPath(as4_path)) => {
                let path = match attributes.as_path() {
                    Some(as_path) => AsPath::merge_aspath_as4path(as_path, &as4_path),
                    None => {
                        warn!("AS4_PATH without AS_PATH, using AS4_PATH as the AS path");
                        as4_path
                    }
                };
                attributes.insert(AttributeValue::AsPath(path));
            }
            (AttrType::MP_REACHABLE_NLRI, AttributeValue::MpReachNlri(reach)) => {
                if let Some(next_hop) = reach.first_next_hop() {
                    attributes.insert(AttributeValue::NextHop(NextHop::new(next_hop)));
                }
                attributes.insert(AttributeValue::MpReachNlri(reach));
            }
            (AttrType::AS_PATHLIMIT, value) => {
                attributes.set_has_as_path_limit();
                attributes.insert(value);
            }
            // AS4_AGGREGATOR lands here as well and replaces AGGREGATOR
            (_, value) => {
                attributes.insert(value);
            }
        }

        Ok(())
    }
}

fn wrap_attr_error(attr_type: u8, offset: usize, error: ParserError) -> ParserError {
    warn!(
        "failed to parse attribute type {} at offset {}: {}",
        attr_type, offset, error
    );
    ParserError::AttributeDecode {
        attr_type,
        offset,
        source: Box::new(error),
    }
}
