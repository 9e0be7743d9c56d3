/*!
Provides parsing of BGP path attributes.
*/
pub mod attributes;

pub use attributes::AttributeParser;
