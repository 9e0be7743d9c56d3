/*!
Data structures for decoded BGP path attributes.
*/
pub mod bgp;
pub mod network;

pub use bgp::*;
pub use network::*;
