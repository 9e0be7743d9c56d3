use bytes::Bytes;

use crate::models::*;
use crate::ParserError;

use super::attr_01_origin::parse_origin;
use super::attr_02_17_as_path::parse_as_path;
use super::attr_03_next_hop::parse_next_hop;
use super::attr_04_med::parse_med;
use super::attr_05_local_pref::parse_local_pref;
use super::attr_07_18_aggregator::{parse_aggregator, parse_as4_aggregator};
use super::attr_08_communities::parse_regular_communities;
use super::attr_09_originator::parse_originator_id;
use super::attr_10_13_cluster::{parse_cluster_id, parse_clusters};
use super::attr_11_12_deprecated::{parse_advertiser, parse_dpa};
use super::attr_14_15_nlri::{parse_mp_reach, parse_mp_unreach};
use super::attr_16_extended_communities::parse_extended_community;
use super::attr_21_as_path_limit::parse_as_path_limit;

/// Session parameters a decoder may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeContext {
    pub asn_len: AsnLength,
    pub add_path: bool,
}

/// Decodes the value bytes of one attribute.
pub type AttrDecoder = fn(Bytes, &DecodeContext) -> Result<AttributeValue, ParserError>;

/// What the decode loop does with one attribute type code.
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    pub attr_type: AttrType,
    pub slot: AttrSlot,
    pub decode: AttrDecoder,
}

impl RegistryEntry {
    pub fn new(attr_type: AttrType, slot: AttrSlot, decode: AttrDecoder) -> RegistryEntry {
        RegistryEntry {
            attr_type,
            slot,
            decode,
        }
    }
}

impl std::fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("attr_type", &self.attr_type)
            .field("slot", &self.slot)
            .finish()
    }
}

/// Immutable mapping from wire type code to slot and decoder.
///
/// Lookups index a table of all 256 codes directly. Codes without an entry are unknown to the
/// decoder.
#[derive(Debug, Clone)]
pub struct AttrRegistry {
    entries: [Option<RegistryEntry>; 256],
}

impl AttrRegistry {
    /// Registry of every attribute type this crate decodes.
    pub fn new() -> Result<AttrRegistry, ParserError> {
        AttrRegistry::from_entries(default_entries())
    }

    /// Build a registry from explicit entries. Fails with [ParserError::DuplicateAttrType] when a
    /// type code appears twice.
    pub fn from_entries<I>(entries: I) -> Result<AttrRegistry, ParserError>
    where
        I: IntoIterator<Item = RegistryEntry>,
    {
        let mut table = [None; 256];
        for entry in entries {
            let code = u8::from(entry.attr_type);
            let cell = &mut table[code as usize];
            if cell.is_some() {
                return Err(ParserError::DuplicateAttrType(code));
            }
            *cell = Some(entry);
        }
        Ok(AttrRegistry { entries: table })
    }

    #[inline]
    pub fn get(&self, attr_type: u8) -> Option<&RegistryEntry> {
        self.entries[attr_type as usize].as_ref()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn default_entries() -> Vec<RegistryEntry> {
    use AttrSlot as S;
    use AttrType as T;

    vec![
        RegistryEntry::new(T::ORIGIN, S::Origin, |input, _| parse_origin(input)),
        RegistryEntry::new(T::AS_PATH, S::AsPath, |input, ctx| {
            parse_as_path(input, &ctx.asn_len).map(AttributeValue::AsPath)
        }),
        RegistryEntry::new(T::NEXT_HOP, S::NextHop, |input, _| parse_next_hop(input)),
        RegistryEntry::new(T::MULTI_EXIT_DISCRIMINATOR, S::MultiExitDiscriminator, |input, _| {
            parse_med(input)
        }),
        RegistryEntry::new(T::LOCAL_PREFERENCE, S::LocalPreference, |input, _| {
            parse_local_pref(input)
        }),
        // presence is the signal, content is ignored
        RegistryEntry::new(T::ATOMIC_AGGREGATE, S::AtomicAggregate, |_, _| {
            Ok(AttributeValue::AtomicAggregate(AtomicAggregate))
        }),
        RegistryEntry::new(T::AGGREGATOR, S::Aggregator, |input, ctx| {
            parse_aggregator(input, &ctx.asn_len)
                .map(|(asn, id)| AttributeValue::Aggregator { asn, id })
        }),
        RegistryEntry::new(T::COMMUNITIES, S::Communities, |input, _| {
            parse_regular_communities(input)
        }),
        RegistryEntry::new(T::ORIGINATOR_ID, S::OriginatorId, |input, _| {
            parse_originator_id(input)
        }),
        RegistryEntry::new(T::CLUSTER_LIST, S::ClusterList, |input, _| parse_clusters(input)),
        RegistryEntry::new(T::DPA, S::Dpa, |input, _| parse_dpa(input)),
        RegistryEntry::new(T::ADVERTISER, S::Advertiser, |input, _| parse_advertiser(input)),
        RegistryEntry::new(T::CLUSTER_ID, S::ClusterId, |input, _| parse_cluster_id(input)),
        RegistryEntry::new(T::MP_REACHABLE_NLRI, S::MpReachNlri, |input, ctx| {
            parse_mp_reach(input, ctx.add_path).map(AttributeValue::MpReachNlri)
        }),
        RegistryEntry::new(T::MP_UNREACHABLE_NLRI, S::MpUnreachNlri, |input, ctx| {
            parse_mp_unreach(input, ctx.add_path).map(AttributeValue::MpUnreachNlri)
        }),
        RegistryEntry::new(T::EXTENDED_COMMUNITIES, S::ExtendedCommunities, |input, _| {
            parse_extended_community(input)
        }),
        RegistryEntry::new(T::AS4_PATH, S::AsPath, |input, _| {
            parse_as_path(input, &AsnLength::Bits32).map(AttributeValue::AsPath)
        }),
        RegistryEntry::new(T::AS4_AGGREGATOR, S::Aggregator, |input, _| {
            parse_as4_aggregator(input).map(|(asn, id)| AttributeValue::Aggregator { asn, id })
        }),
        RegistryEntry::new(T::AS_PATHLIMIT, S::AsPathLimit, |input, _| {
            parse_as_path_limit(input)
        }),
    ]
}
