use crate::{ArpRequest, Error, Interface};
use log::debug;
use std::net::Ipv4Addr;

/// Builds a who-has request for `target` from the interface's own addresses and writes it to
/// the interface exactly once. Returns the number of bytes sent.
///
/// An interface without an IPv4 address sends `0.0.0.0` as the sender protocol address (RFC
/// 5227).
pub fn send_request<I: Interface>(iface: &mut I, target: Ipv4Addr) -> Result<usize, Error> {
    let mut request = ArpRequest::who_has(target);
    request.sender_hardware_addr = iface.hardware_addr().map_err(|source| Error::Query {
        iface: iface.name().to_string(),
        what: "hardware address",
        source,
    })?;
    request.sender_protocol_addr = iface
        .ipv4_addr()
        .map_err(|source| Error::Query {
            iface: iface.name().to_string(),
            what: "IPv4 address",
            source,
        })?
        .unwrap_or(Ipv4Addr::UNSPECIFIED);
    debug!(
        "who-has {} tell {} ({}) on {}",
        request.target_protocol_addr,
        request.sender_protocol_addr,
        request.sender_hardware_addr,
        iface.name()
    );

    let frame = request.to_frame();
    let bytes = iface.send(frame.as_bytes()).map_err(|source| Error::Send {
        iface: iface.name().to_string(),
        source,
    })?;
    debug!("sent {} of {} bytes", bytes, frame.as_bytes().len());
    Ok(bytes)
}
