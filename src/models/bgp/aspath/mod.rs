use crate::models::*;
use itertools::Itertools;
use std::fmt::{Display, Formatter};


/// Enum of AS path segment.
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsPathSegment {
    AsSequence(Vec<Asn>),
    AsSet(Vec<Asn>),
    ConfedSequence(Vec<Asn>),
    ConfedSet(Vec<Asn>),
}

impl AsPathSegment {
    /// Shorthand for creating an `AsSequence` segment.
    pub fn sequence<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPathSegment::AsSequence(seq.as_ref().iter().copied().map_into().collect())
    }

    /// Shorthand for creating an `AsSet` segment.
    pub fn set<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPathSegment::AsSet(seq.as_ref().iter().copied().map_into().collect())
    }

    /// Get the number of ASNs this segment adds to the route. For the number of ASNs within the
    /// segment use [AsPathSegment::len] instead.
    pub fn route_len(&self) -> usize {
        match self {
            AsPathSegment::AsSequence(v) => v.len(),
            AsPathSegment::AsSet(_) => 1,
            AsPathSegment::ConfedSequence(_) | AsPathSegment::ConfedSet(_) => 0,
        }
    }

    /// Number of ASNs held by this segment.
    pub fn len(&self) -> usize {
        self.as_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    /// Gets if a segment represents the local members of an autonomous system confederation.
    ///
    /// <https://datatracker.ietf.org/doc/html/rfc5065#section-3>
    pub fn is_confed(&self) -> bool {
        matches!(
            self,
            AsPathSegment::ConfedSequence(_) | AsPathSegment::ConfedSet(_)
        )
    }

    /// Append the contents of `other` onto `self` when both are sequences of the same kind.
    /// Returns `false` and leaves both untouched otherwise.
    fn merge_in_place(&mut self, other: &Self) -> bool {
        match (self, other) {
            (AsPathSegment::AsSequence(x), AsPathSegment::AsSequence(y))
            | (AsPathSegment::ConfedSequence(x), AsPathSegment::ConfedSequence(y)) => {
                x.extend_from_slice(y);
                true
            }
            _ => false,
        }
    }
}

impl AsRef<[Asn]> for AsPathSegment {
    fn as_ref(&self) -> &[Asn] {
        match self {
            AsPathSegment::AsSequence(x)
            | AsPathSegment::AsSet(x)
            | AsPathSegment::ConfedSequence(x)
            | AsPathSegment::ConfedSet(x) => x,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsPath {
    pub segments: Vec<AsPathSegment>,
}

impl AsPath {
    pub fn new() -> AsPath {
        AsPath { segments: vec![] }
    }

    /// Shorthand for creating an `AsPath` consisting of a single `AsSequence` segment.
    pub fn from_sequence<S: AsRef<[u32]>>(seq: S) -> Self {
        AsPath {
            segments: vec![AsPathSegment::sequence(seq)],
        }
    }

    pub fn from_segments(segments: Vec<AsPathSegment>) -> AsPath {
        AsPath { segments }
    }

    /// Adds a new segment to the end of the path. No validation or merging is performed.
    pub fn append_segment(&mut self, segment: AsPathSegment) {
        self.segments.push(segment);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Get the total length of the routes this path represents. A set counts as a single hop and
    /// confederation segments do not count at all.
    pub fn route_len(&self) -> usize {
        self.segments.iter().map(AsPathSegment::route_len).sum()
    }

    /// Get the number of segments that make up this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Checks if any segments of this [AsPath] contain the following ASN.
    pub fn contains_asn(&self, x: Asn) -> bool {
        self.segments
            .iter()
            .flat_map(|s| s.as_ref().iter())
            .contains(&x)
    }

    /// Iterate over every ASN of the path in wire order, regardless of segment type.
    pub fn iter_asns(&self) -> impl Iterator<Item = &Asn> {
        self.segments.iter().flat_map(|s| s.as_ref().iter())
    }

    /// Merge adjacent AS_SEQUENCE (and AS_CONFED_SEQUENCE) segments and drop empty sequences.
    /// Sets are left alone.
    pub fn coalesce(&mut self) {
        let mut merged: Vec<AsPathSegment> = Vec::with_capacity(self.segments.len());
        for segment in std::mem::take(&mut self.segments) {
            if matches!(&segment, AsPathSegment::AsSequence(v) if v.is_empty()) {
                continue;
            }
            if let Some(last) = merged.last_mut() {
                if last.merge_in_place(&segment) {
                    continue;
                }
            }
            merged.push(segment);
        }
        self.segments = merged;
    }

    /// Construct AsPath from AS_PATH and AS4_PATH
    ///
    /// <https://datatracker.ietf.org/doc/html/rfc6793#section-4.2.3>
    ///
    /// ```text
    ///    If the number of AS numbers in the AS_PATH attribute is less than the
    ///    number of AS numbers in the AS4_PATH attribute, then the AS4_PATH
    ///    attribute SHALL be ignored, and the AS_PATH attribute SHALL be taken
    ///    as the AS path information.
    ///
    ///    If the number of AS numbers in the AS_PATH attribute is larger than
    ///    or equal to the number of AS numbers in the AS4_PATH attribute, then
    ///    the AS path information SHALL be constructed by taking as many AS
    ///    numbers and path segments as necessary from the leading part of the
    ///    AS_PATH attribute, and then prepending them to the AS4_PATH attribute
    ///    so that the AS path information has a number of AS numbers identical
    ///    to that of the AS_PATH attribute.  Note that a valid
    ///    AS_CONFED_SEQUENCE or AS_CONFED_SET path segment SHALL be prepended
    ///    if it is either the leading path segment or is adjacent to a path
    ///    segment that is prepended.
    /// ```
    ///
    /// The net effect is that every AS_TRANS (AS23456) placeholder in the trailing part of the
    /// 2-byte path is replaced by the real 4-byte ASN.
    pub fn merge_aspath_as4path(aspath: &AsPath, as4path: &AsPath) -> AsPath {
        let route_len = aspath.route_len();
        let route_len4 = as4path.route_len();
        if route_len < route_len4 {
            return aspath.clone();
        }

        let mut leading = route_len - route_len4;
        let mut segments = Vec::with_capacity(aspath.len() + as4path.len());
        for segment in &aspath.segments {
            match segment {
                AsPathSegment::ConfedSequence(_) | AsPathSegment::ConfedSet(_) => {
                    segments.push(segment.clone())
                }
                _ if leading == 0 => break,
                AsPathSegment::AsSequence(asns) => {
                    let take = leading.min(asns.len());
                    segments.push(AsPathSegment::AsSequence(asns[..take].to_vec()));
                    leading -= take;
                }
                AsPathSegment::AsSet(_) => {
                    segments.push(segment.clone());
                    leading -= 1;
                }
            }
        }
        segments.extend(as4path.segments.iter().cloned());

        let mut merged = AsPath { segments };
        merged.coalesce();
        merged
    }

    /// Returns the origin ASN if the path ends in a sequence or a set of exactly one ASN.
    pub fn get_singular_origin(&self) -> Option<Asn> {
        match self.segments.last() {
            Some(AsPathSegment::AsSequence(v)) => v.last().copied(),
            Some(AsPathSegment::AsSet(v)) if v.len() == 1 => Some(v[0]),
            _ => None,
        }
    }
}

impl Display for AsPathSegment {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            AsPathSegment::AsSequence(v) | AsPathSegment::ConfedSequence(v) => {
                write!(f, "{}", v.iter().join(" "))
            }
            AsPathSegment::AsSet(v) | AsPathSegment::ConfedSet(v) => {
                write!(f, "{{{}}}", v.iter().join(","))
            }
        }
    }
}

impl Display for AsPath {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.segments.iter().join(" "))
    }
}
