/*!
Wire decoders for BGP path attributes.
*/
pub mod bgp;
pub mod utils;

pub use self::utils::*;
pub use bgp::attributes::{AttrRegistry, AttributeParser, DecodeContext, RegistryEntry};
