use std::fmt::{Display, Formatter};
use std::net::IpAddr;

/// Value of the unicast NEXT_HOP slot.
///
/// Every attribute set starts with an empty next hop so that consumers can tell "no next hop
/// seen" apart from a missing slot without unwrapping. The address is either taken from a
/// NEXT_HOP attribute or synthesized from the first MP_REACH next hop.
#[derive(Debug, PartialEq, Copy, Clone, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NextHop {
    addr: Option<IpAddr>,
}

impl NextHop {
    pub const fn empty() -> NextHop {
        NextHop { addr: None }
    }

    pub const fn new(addr: IpAddr) -> NextHop {
        NextHop { addr: Some(addr) }
    }

    pub const fn addr(&self) -> Option<IpAddr> {
        self.addr
    }

    pub const fn is_empty(&self) -> bool {
        self.addr.is_none()
    }
}

impl From<IpAddr> for NextHop {
    fn from(addr: IpAddr) -> Self {
        NextHop::new(addr)
    }
}

impl Display for NextHop {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.addr {
            Some(addr) => write!(f, "{}", addr),
            None => Ok(()),
        }
    }
}
