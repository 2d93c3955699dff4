use crate::Error;
use log::debug;
use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};

/// Turns the destination argument into an IPv4 address. Dotted-decimal input is taken as is;
/// anything else goes through the system resolver and the first IPv4 answer wins.
pub fn resolve(target: &str) -> Result<Ipv4Addr, Error> {
    if let Ok(addr) = target.parse::<Ipv4Addr>() {
        return Ok(addr);
    }

    let addrs = (target, 0)
        .to_socket_addrs()
        .map_err(|source| Error::Resolve {
            target: target.to_string(),
            source,
        })?;
    let addr = addrs
        .filter_map(|addr| match addr {
            SocketAddr::V4(v4) => Some(*v4.ip()),
            SocketAddr::V6(_) => None,
        })
        .next()
        .ok_or_else(|| Error::UnresolvableTarget {
            target: target.to_string(),
        })?;

    debug!("resolved {} to {}", target, addr);
    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dotted_decimal() {
        assert_eq!(
            resolve("192.168.1.1").unwrap(),
            Ipv4Addr::new(192, 168, 1, 1)
        );
        assert_eq!(resolve("0.0.0.0").unwrap(), Ipv4Addr::UNSPECIFIED);
    }

    #[test]
    fn interior_nul_is_a_resolve_error() {
        match resolve("10.0.0\0.5") {
            Err(Error::Resolve { target, .. }) => assert_eq!(target, "10.0.0\0.5"),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
