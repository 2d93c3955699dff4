use std::fmt;
use std::str::FromStr;

pub type PacketData = Vec<u8>;

pub const ARP_ETHER_TYPE: u16 = 0x0806;
pub const IPV4_ETHER_TYPE: u16 = 0x0800;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MacAddr {
    pub bytes: [u8; 6],
}

impl MacAddr {
    pub const BROADCAST: MacAddr = MacAddr { bytes: [0xff; 6] };

    pub fn new(bytes: [u8; 6]) -> MacAddr {
        MacAddr { bytes }
    }

    pub fn is_broadcast(&self) -> bool {
        *self == MacAddr::BROADCAST
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(bytes: [u8; 6]) -> Self {
        MacAddr::new(bytes)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let b = &self.bytes;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl FromStr for MacAddr {
    type Err = &'static str;

    /// Parses the colon separated form, e.g. `ff:ff:ff:ff:ff:ff`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 6];
        let mut octets = s.split(':');
        for byte in bytes.iter_mut() {
            let octet = octets.next().ok_or("MAC address has fewer than 6 octets")?;
            if octet.is_empty() || octet.len() > 2 {
                return Err("MAC address octet must be 1 or 2 hex digits");
            }
            *byte = u8::from_str_radix(octet, 16).map_err(|_| "MAC address octet is not hex")?;
        }
        if octets.next().is_some() {
            return Err("MAC address has more than 6 octets");
        }
        Ok(MacAddr { bytes })
    }
}
