//! BGP path attributes and the structs they are built from.

pub mod aspath;
pub mod attributes;
pub mod community;

pub use aspath::*;
pub use attributes::*;
pub use community::*;
