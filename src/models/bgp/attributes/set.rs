use crate::models::*;
use std::fmt::{Display, Formatter};
use std::net::Ipv4Addr;
use std::sync::OnceLock;

/// The decoded path attributes of one route.
///
/// Holds at most one value per [AttrSlot]. The next-hop slot always holds a value: it starts as
/// [NextHop::empty] and is replaced by a NEXT_HOP attribute or by the first MP_REACH next hop.
///
/// Two sets are equal when every slot is either absent on both sides or holds equal values on
/// both sides. The decode flags and the unknown-attribute count do not take part in equality.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    slots: [Option<AttributeValue>; AttrSlot::TOTAL],
    as4_path_omitted: bool,
    has_as_path_limit: bool,
    unknown_attr_count: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    rendered: OnceLock<String>,
}

impl Default for Attributes {
    fn default() -> Self {
        Attributes::new()
    }
}

impl Attributes {
    pub(crate) fn new() -> Attributes {
        let mut slots: [Option<AttributeValue>; AttrSlot::TOTAL] = Default::default();
        slots[AttrSlot::NextHop.index()] = Some(AttributeValue::NextHop(NextHop::empty()));
        Attributes {
            slots,
            as4_path_omitted: false,
            has_as_path_limit: false,
            unknown_attr_count: 0,
            rendered: OnceLock::new(),
        }
    }

    /// Store a value in its slot, replacing and returning whatever was there before.
    pub(crate) fn insert(&mut self, value: AttributeValue) -> Option<AttributeValue> {
        self.rendered = OnceLock::new();
        let idx = value.slot().index();
        self.slots[idx].replace(value)
    }

    pub(crate) fn set_as4_path_omitted(&mut self) {
        self.as4_path_omitted = true;
    }

    pub(crate) fn set_has_as_path_limit(&mut self) {
        self.has_as_path_limit = true;
    }

    pub(crate) fn count_unknown_attr(&mut self) {
        self.unknown_attr_count += 1;
    }

    /// Indexed lookup by slot.
    pub fn get(&self, slot: AttrSlot) -> Option<&AttributeValue> {
        self.slots[slot.index()].as_ref()
    }

    pub fn contains(&self, slot: AttrSlot) -> bool {
        self.slots[slot.index()].is_some()
    }

    /// Iterate over the present attributes in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (AttrSlot, &AttributeValue)> {
        AttrSlot::ALL
            .iter()
            .zip(self.slots.iter())
            .filter_map(|(slot, value)| value.as_ref().map(|v| (*slot, v)))
    }

    pub fn as_path(&self) -> Option<&AsPath> {
        match self.get(AttrSlot::AsPath) {
            Some(AttributeValue::AsPath(path)) => Some(path),
            _ => None,
        }
    }

    pub fn origin(&self) -> Option<Origin> {
        match self.get(AttrSlot::Origin) {
            Some(AttributeValue::Origin(origin)) => Some(*origin),
            _ => None,
        }
    }

    /// The unicast next hop. Empty when neither NEXT_HOP nor MP_REACH supplied one.
    pub fn next_hop(&self) -> NextHop {
        match self.get(AttrSlot::NextHop) {
            Some(AttributeValue::NextHop(next_hop)) => *next_hop,
            _ => NextHop::empty(),
        }
    }

    /// LOCAL_PREF, or 0 when absent.
    pub fn local_pref(&self) -> u32 {
        match self.get(AttrSlot::LocalPreference) {
            Some(AttributeValue::LocalPreference(v)) => *v,
            _ => 0,
        }
    }

    /// MULTI_EXIT_DISC, or 0 when absent.
    pub fn med(&self) -> u32 {
        match self.get(AttrSlot::MultiExitDiscriminator) {
            Some(AttributeValue::MultiExitDiscriminator(v)) => *v,
            _ => 0,
        }
    }

    /// COMMUNITIES, or an empty slice when absent.
    pub fn communities(&self) -> &[Community] {
        match self.get(AttrSlot::Communities) {
            Some(AttributeValue::Communities(c)) => c.as_slice(),
            _ => &[],
        }
    }

    pub fn atomic_aggregate(&self) -> bool {
        self.contains(AttrSlot::AtomicAggregate)
    }

    pub fn aggregator(&self) -> Option<(Asn, Ipv4Addr)> {
        match self.get(AttrSlot::Aggregator) {
            Some(AttributeValue::Aggregator { asn, id }) => Some((*asn, *id)),
            _ => None,
        }
    }

    pub fn mp_reach(&self) -> Option<&MpReach> {
        match self.get(AttrSlot::MpReachNlri) {
            Some(AttributeValue::MpReachNlri(reach)) => Some(reach),
            _ => None,
        }
    }

    pub fn mp_unreach(&self) -> Option<&MpUnreach> {
        match self.get(AttrSlot::MpUnreachNlri) {
            Some(AttributeValue::MpUnreachNlri(unreach)) => Some(unreach),
            _ => None,
        }
    }

    pub fn extended_communities(&self) -> &[ExtendedCommunity] {
        match self.get(AttrSlot::ExtendedCommunities) {
            Some(AttributeValue::ExtendedCommunities(c)) => c.as_slice(),
            _ => &[],
        }
    }

    /// Set when an AS4_PATH attribute with an empty value was seen. Such an attribute is not
    /// merged into the AS path.
    pub fn as4_path_omitted(&self) -> bool {
        self.as4_path_omitted
    }

    /// Set when the route carried the obsolete AS_PATHLIMIT attribute.
    pub fn has_as_path_limit(&self) -> bool {
        self.has_as_path_limit
    }

    /// Number of attributes skipped because their type code is not known to the decoder.
    pub fn unknown_attr_count(&self) -> usize {
        self.unknown_attr_count
    }

    /// Pipe-delimited rendering, computed on first use and cached.
    pub fn as_str(&self) -> &str {
        self.rendered
            .get_or_init(|| SlotFields(&self.slots).to_string())
    }
}

/// One field per slot, each followed by `|`. Absent LOCAL_PREF and MED render as `0`, an
/// absent ATOMIC_AGGREGATE as `NAG`, other absent slots as an empty field.
struct SlotFields<'a>(&'a [Option<AttributeValue>; AttrSlot::TOTAL]);

impl Display for SlotFields<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (slot, value) in AttrSlot::ALL.iter().zip(self.0.iter()) {
            match (slot, value) {
                (_, Some(v)) => write!(f, "{}", v)?,
                (AttrSlot::LocalPreference | AttrSlot::MultiExitDiscriminator, None) => {
                    write!(f, "0")?
                }
                (AttrSlot::AtomicAggregate, None) => write!(f, "NAG")?,
                (_, None) => {}
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}

impl Display for Attributes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.slots
            .iter()
            .zip(other.slots.iter())
            .all(|(a, b)| match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => a == b,
                _ => false,
            })
    }
}

impl Eq for Attributes {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    #[test]
    fn test_new_set_has_empty_next_hop() {
        let attrs = Attributes::new();
        assert!(attrs.contains(AttrSlot::NextHop));
        assert!(attrs.next_hop().is_empty());
        assert_eq!(attrs.iter().count(), 1);
        assert_eq!(attrs.as_path(), None);
        assert_eq!(attrs.med(), 0);
        assert_eq!(attrs.local_pref(), 0);
        assert!(attrs.communities().is_empty());
    }

    #[test]
    fn test_render_defaults() {
        let attrs = Attributes::new();
        assert_eq!(attrs.to_string(), "|||0|0||NAG|||||||||||");
        assert_eq!(attrs.as_str().matches('|').count(), AttrSlot::TOTAL);
    }

    #[test]
    fn test_render_present_values() {
        let mut attrs = Attributes::new();
        attrs.insert(AttributeValue::AsPath(AsPath::from_sequence([3356, 1299])));
        attrs.insert(AttributeValue::Origin(Origin::IGP));
        attrs.insert(AttributeValue::NextHop(NextHop::new(IpAddr::V4(
            Ipv4Addr::new(192, 0, 2, 1),
        ))));
        attrs.insert(AttributeValue::LocalPreference(100));
        attrs.insert(AttributeValue::AtomicAggregate(AtomicAggregate));
        assert_eq!(
            attrs.as_str(),
            "3356 1299|IGP|192.0.2.1|100|0||AG|||||||||||"
        );
    }

    #[test]
    fn test_insert_overwrites_and_resets_cache() {
        let mut attrs = Attributes::new();
        attrs.insert(AttributeValue::MultiExitDiscriminator(10));
        assert_eq!(attrs.as_str(), "|||0|10||NAG|||||||||||");

        let old = attrs.insert(AttributeValue::MultiExitDiscriminator(20));
        assert_eq!(old, Some(AttributeValue::MultiExitDiscriminator(10)));
        assert_eq!(attrs.med(), 20);
        assert_eq!(attrs.as_str(), "|||0|20||NAG|||||||||||");
    }

    #[test]
    fn test_equality() {
        let mut a = Attributes::new();
        let mut b = Attributes::new();
        assert_eq!(a, b);

        a.insert(AttributeValue::Origin(Origin::EGP));
        assert_ne!(a, b);
        b.insert(AttributeValue::Origin(Origin::EGP));
        assert_eq!(a, b);

        b.insert(AttributeValue::Origin(Origin::IGP));
        assert_ne!(a, b);

        // flags are not part of equality
        let mut c = a.clone();
        c.set_as4_path_omitted();
        c.count_unknown_attr();
        assert_eq!(a, c);
    }
}
