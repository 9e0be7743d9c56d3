/*!
mrt-path-attrs decodes the BGP path-attribute block of routes recorded in MRT routing-table dumps
into a fixed-slot [Attributes] set.

# Example

```
use bytes::Bytes;
use mrt_path_attrs::{AttributeParser, Origin};

// ORIGIN: IGP, AS_PATH: 3356 1299 (2-byte AS numbers)
let block = Bytes::from_static(&[
    0x40, 0x01, 0x01, 0x00,
    0x40, 0x02, 0x06, 0x02, 0x02, 0x0d, 0x1c, 0x05, 0x13,
]);
let parser = AttributeParser::new(2, false).unwrap();
let attributes = parser.parse_attribute_block(block).unwrap();

assert_eq!(attributes.origin(), Some(Origin::IGP));
assert_eq!(attributes.to_string(), "3356 1299|IGP||0|0||NAG|||||||||||");
```

# Decoding

An [AttributeParser] is built for the AS number width (2 or 4 bytes) and the ADD-PATH mode of the
session the route was recorded from:

- [AttributeParser::parse_attributes] decodes `length` bytes starting at `offset` of a record
  buffer;
- [AttributeParser::parse_attribute_block] decodes an already sliced block.

Attribute types the decoder does not know are skipped and counted
([Attributes::unknown_attr_count]). Any malformed attribute fails the whole block with a
[ParserError] that carries the attribute type and its offset.

A few attributes interact:

- a non-empty AS4_PATH is merged into AS_PATH, an empty one only sets
  [Attributes::as4_path_omitted];
- AS4_AGGREGATOR replaces AGGREGATOR;
- the first MP_REACH_NLRI next hop replaces NEXT_HOP;
- AS_PATHLIMIT sets [Attributes::has_as_path_limit].

# Logging

The crate logs through the [log] facade and never installs a logger.
*/

pub mod error;
pub mod models;
pub mod parser;

pub use error::ParserError;
pub use models::*;
pub use parser::{AttrRegistry, AttributeParser, DecodeContext};
