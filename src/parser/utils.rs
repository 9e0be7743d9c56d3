/*!
Provides IO utility functions for read bytes of different length and converting to corresponding structs.
*/
use ipnet::IpNet;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::models::*;
use bytes::{Buf, Bytes};

use crate::error::ParserError;

impl ReadUtils for Bytes {}

// Allow reading IPs from Reads
pub trait ReadUtils: Buf {
    /// Fail with [ParserError::NotEnoughBytes] unless at least `n` bytes remain.
    #[inline]
    fn require_n_remaining(&self, n: usize, context: &'static str) -> Result<(), ParserError> {
        if self.remaining() < n {
            Err(ParserError::NotEnoughBytes {
                required: n,
                remaining: self.remaining(),
                context,
            })
        } else {
            Ok(())
        }
    }

    /// Fail with [ParserError::InvalidLength] unless exactly `n` bytes remain. Used by decoders of
    /// fixed-size attributes.
    #[inline]
    fn expect_remaining_eq(&self, n: usize, attr: &'static str) -> Result<(), ParserError> {
        if self.remaining() != n {
            return Err(ParserError::InvalidLength {
                attr,
                expected: n,
                found: self.remaining(),
            });
        }
        Ok(())
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8, ParserError> {
        self.require_n_remaining(1, "1-byte field")?;
        Ok(self.get_u8())
    }

    #[inline]
    fn read_u16(&mut self) -> Result<u16, ParserError> {
        self.require_n_remaining(2, "2-byte field")?;
        Ok(self.get_u16())
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32, ParserError> {
        self.require_n_remaining(4, "4-byte field")?;
        Ok(self.get_u32())
    }

    fn read_ipv4_address(&mut self) -> Result<Ipv4Addr, ParserError> {
        self.require_n_remaining(4, "IPv4 address")?;
        Ok(Ipv4Addr::from(self.get_u32()))
    }

    fn read_ipv6_address(&mut self) -> Result<Ipv6Addr, ParserError> {
        self.require_n_remaining(16, "IPv6 address")?;
        Ok(Ipv6Addr::from(self.get_u128()))
    }

    /// Read an address whose family is given only by its encoded width: 4 bytes for IPv4, 16
    /// bytes for IPv6.
    fn read_address_by_len(&mut self, len: usize) -> Result<IpAddr, ParserError> {
        match len {
            4 => self.read_ipv4_address().map(IpAddr::V4),
            16 => self.read_ipv6_address().map(IpAddr::V6),
            _ => Err(ParserError::ParseError(format!(
                "invalid address length: {} (expected 4 or 16)",
                len
            ))),
        }
    }

    #[inline]
    fn read_asn(&mut self, as_length: AsnLength) -> Result<Asn, ParserError> {
        match as_length {
            AsnLength::Bits16 => self.read_u16().map(Asn::new_16bit),
            AsnLength::Bits32 => self.read_u32().map(Asn::new_32bit),
        }
    }

    fn read_asns(&mut self, as_length: &AsnLength, count: usize) -> Result<Vec<Asn>, ParserError> {
        self.require_n_remaining(count * as_length.bytes(), "AS path segment")?;
        let mut path = Vec::with_capacity(count);
        for _ in 0..count {
            path.push(self.read_asn(*as_length)?);
        }
        Ok(path)
    }

    /// Read announced/withdrawn prefix.
    ///
    /// The length in bits is 1 byte, and then based on the IP version it reads different number of bytes.
    /// If the `add_path` is true, it will also first read a 4-byte path id first.
    fn read_nlri_prefix(
        &mut self,
        afi: &Afi,
        add_path: bool,
    ) -> Result<NetworkPrefix, ParserError> {
        let path_id = match add_path {
            true => Some(self.read_u32()?),
            false => None,
        };

        // Length in bits
        let bit_len = self.read_u8()?;

        // Convert to bytes
        let byte_len: usize = (bit_len as usize + 7) / 8;
        if byte_len > afi.address_len() {
            return Err(ParserError::ParseError(format!(
                "Invalid byte length for {} prefix. byte_len: {}, bit_len: {}",
                afi, byte_len, bit_len
            )));
        }
        self.require_n_remaining(byte_len, "NLRI prefix")?;

        let addr: IpAddr = match afi {
            Afi::Ipv4 => {
                let mut buff = [0u8; 4];
                self.copy_to_slice(&mut buff[..byte_len]);
                IpAddr::V4(Ipv4Addr::from(buff))
            }
            Afi::Ipv6 => {
                let mut buff = [0u8; 16];
                self.copy_to_slice(&mut buff[..byte_len]);
                IpAddr::V6(Ipv6Addr::from(buff))
            }
        };
        let prefix = IpNet::new(addr, bit_len)?;

        Ok(NetworkPrefix::new(prefix, path_id))
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ParserError> {
        self.require_n_remaining(N, "fixed-size field")?;
        let mut buffer = [0u8; N];
        self.copy_to_slice(&mut buffer);
        Ok(buffer)
    }

    /// Skip `n_bytes` without decoding them.
    fn skip_n_bytes(&mut self, n_bytes: usize, context: &'static str) -> Result<(), ParserError> {
        self.require_n_remaining(n_bytes, context)?;
        self.advance(n_bytes);
        Ok(())
    }
}

/// Read NLRI prefixes until the input is exhausted.
pub fn parse_nlri_list(
    mut input: Bytes,
    add_path: bool,
    afi: &Afi,
) -> Result<Vec<NetworkPrefix>, ParserError> {
    let mut prefixes = vec![];
    while input.has_remaining() {
        prefixes.push(input.read_nlri_prefix(afi, add_path)?);
    }
    Ok(prefixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_read_u8() {
        let mut buf = Bytes::from_static(&[0x12]);
        assert_eq!(buf.read_u8().unwrap(), 0x12);
        assert!(matches!(
            buf.read_u8().unwrap_err(),
            ParserError::NotEnoughBytes {
                required: 1,
                remaining: 0,
                context: "1-byte field"
            }
        ));
    }

    #[test]
    fn test_read_u16_u32() {
        let mut buf = Bytes::from_static(&[0x12, 0x34, 0x00, 0x00, 0x01, 0x00]);
        assert_eq!(buf.read_u16().unwrap(), 0x1234);
        assert_eq!(buf.read_u32().unwrap(), 256);
        assert_eq!(
            buf.read_u16().unwrap_err().to_string(),
            "not enough bytes to read 2-byte field: 2 required, 0 remaining"
        );
    }

    #[test]
    fn test_expect_remaining_eq() {
        let buf = Bytes::from_static(&[1, 2, 3]);
        assert!(buf.expect_remaining_eq(3, "TEST").is_ok());
        assert!(matches!(
            buf.expect_remaining_eq(4, "TEST").unwrap_err(),
            ParserError::InvalidLength {
                attr: "TEST",
                expected: 4,
                found: 3
            }
        ));
    }

    #[test]
    fn test_read_address_by_len() {
        let mut buf = Bytes::from_static(&[192, 168, 1, 1]);
        assert_eq!(
            buf.read_address_by_len(4).unwrap(),
            IpAddr::from_str("192.168.1.1").unwrap()
        );

        let mut buf = Bytes::from(Ipv6Addr::from_str("2001:db8::1").unwrap().octets().to_vec());
        assert_eq!(
            buf.read_address_by_len(16).unwrap(),
            IpAddr::from_str("2001:db8::1").unwrap()
        );

        let mut buf = Bytes::from_static(&[0; 8]);
        assert!(matches!(
            buf.read_address_by_len(8).unwrap_err(),
            ParserError::ParseError(_)
        ));

        // truncated
        let mut buf = Bytes::from_static(&[10, 0]);
        assert!(matches!(
            buf.read_address_by_len(4).unwrap_err(),
            ParserError::NotEnoughBytes { .. }
        ));
    }

    #[test]
    fn test_read_asns() {
        let mut buf = Bytes::from_static(&[0, 1, 0, 2]);
        assert_eq!(
            buf.read_asns(&AsnLength::Bits16, 2).unwrap(),
            vec![Asn::new_16bit(1), Asn::new_16bit(2)]
        );

        let mut buf = Bytes::from_static(&[0, 0, 0, 1, 0, 0]);
        assert!(buf.read_asns(&AsnLength::Bits32, 2).is_err());
    }

    #[test]
    fn test_read_nlri_prefix() {
        let mut buf = Bytes::from_static(&[24, 192, 168, 1]);
        let prefix = buf.read_nlri_prefix(&Afi::Ipv4, false).unwrap();
        assert_eq!(prefix, NetworkPrefix::from_str("192.168.1.0/24").unwrap());
        assert_eq!(prefix.path_id, None);

        // with path id
        let mut buf = Bytes::from_static(&[0, 0, 0, 7, 16, 10, 1]);
        let prefix = buf.read_nlri_prefix(&Afi::Ipv4, true).unwrap();
        assert_eq!(prefix.prefix, IpNet::from_str("10.1.0.0/16").unwrap());
        assert_eq!(prefix.path_id, Some(7));

        // default route
        let mut buf = Bytes::from_static(&[0]);
        let prefix = buf.read_nlri_prefix(&Afi::Ipv6, false).unwrap();
        assert_eq!(prefix.prefix, IpNet::from_str("::/0").unwrap());

        // IPv4 prefix longer than 32 bits
        let mut buf = Bytes::from_static(&[33, 1, 2, 3, 4, 5]);
        assert!(matches!(
            buf.read_nlri_prefix(&Afi::Ipv4, false).unwrap_err(),
            ParserError::ParseError(_)
        ));

        // truncated prefix bytes
        let mut buf = Bytes::from_static(&[24, 10, 0]);
        assert!(matches!(
            buf.read_nlri_prefix(&Afi::Ipv4, false).unwrap_err(),
            ParserError::NotEnoughBytes { .. }
        ));
    }

    #[test]
    fn test_parse_nlri_list() {
        let input = Bytes::from_static(&[24, 192, 0, 2, 8, 10, 32, 1, 1, 1, 1]);
        let prefixes = parse_nlri_list(input, false, &Afi::Ipv4).unwrap();
        assert_eq!(
            prefixes,
            vec![
                NetworkPrefix::from_str("192.0.2.0/24").unwrap(),
                NetworkPrefix::from_str("10.0.0.0/8").unwrap(),
                NetworkPrefix::from_str("1.1.1.1/32").unwrap(),
            ]
        );

        assert!(parse_nlri_list(Bytes::new(), false, &Afi::Ipv6)
            .unwrap()
            .is_empty());
    }
}
