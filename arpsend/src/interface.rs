use arpsend_packets::MacAddr;
use std::io;
use std::net::Ipv4Addr;

/// A network interface that frames can be written to at the link layer.
pub trait Interface {
    /// The name the interface was opened with.
    fn name(&self) -> &str;

    fn hardware_addr(&self) -> io::Result<MacAddr>;

    /// `Ok(None)` when the interface has no IPv4 address configured.
    fn ipv4_addr(&self) -> io::Result<Option<Ipv4Addr>>;

    /// Writes one complete frame, link-layer header included. Returns the bytes sent.
    fn send(&mut self, frame: &[u8]) -> io::Result<usize>;
}

#[cfg(target_os = "linux")]
pub use self::packet::PacketInterface;

#[cfg(target_os = "linux")]
mod packet {
    use super::Interface;
    use crate::Error;
    use arpsend_packets::{MacAddr, ARP_ETHER_TYPE};
    use log::debug;
    use std::ffi::CString;
    use std::io;
    use std::net::Ipv4Addr;

    /// An interface backed by an `AF_PACKET` socket.
    pub struct PacketInterface {
        name: String,
        socket: afpacket::BoundSocket,
    }

    impl PacketInterface {
        pub fn open(name: &str) -> Result<Self, Error> {
            let c_name = CString::new(name).map_err(|_| Error::InvalidInterface {
                iface: name.to_string(),
                reason: "contains a NUL byte".to_string(),
            })?;

            let socket = afpacket::Socket::with_protocol(ARP_ETHER_TYPE)
                .and_then(|socket| socket.bind(&c_name))
                .map_err(|source| {
                    if source.kind() == io::ErrorKind::InvalidInput {
                        Error::InvalidInterface {
                            iface: name.to_string(),
                            reason: source.to_string(),
                        }
                    } else {
                        Error::Open {
                            iface: name.to_string(),
                            source,
                        }
                    }
                })?;
            debug!("bound to {} (index {})", name, socket.index());

            Ok(PacketInterface {
                name: name.to_string(),
                socket,
            })
        }
    }

    impl Interface for PacketInterface {
        fn name(&self) -> &str {
            &self.name
        }

        fn hardware_addr(&self) -> io::Result<MacAddr> {
            self.socket.hardware_addr().map(MacAddr::new)
        }

        fn ipv4_addr(&self) -> io::Result<Option<Ipv4Addr>> {
            self.socket.ipv4_addr()
        }

        fn send(&mut self, frame: &[u8]) -> io::Result<usize> {
            self.socket.send(frame)
        }
    }

}
