use failure::Fail;
use std::io;

/// Everything that can keep a request from reaching the wire.
#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "failed to resolve {:?}: {}", target, source)]
    Resolve {
        target: String,
        #[fail(cause)]
        source: io::Error,
    },

    #[fail(display = "{:?} does not resolve to an IPv4 address", target)]
    UnresolvableTarget { target: String },

    #[fail(display = "invalid interface name {:?}: {}", iface, reason)]
    InvalidInterface { iface: String, reason: String },

    #[fail(display = "failed to open interface {}: {}", iface, source)]
    Open {
        iface: String,
        #[fail(cause)]
        source: io::Error,
    },

    #[fail(display = "failed to read the {} of interface {}: {}", what, iface, source)]
    Query {
        iface: String,
        what: &'static str,
        #[fail(cause)]
        source: io::Error,
    },

    #[fail(display = "failed to send on interface {}: {}", iface, source)]
    Send {
        iface: String,
        #[fail(cause)]
        source: io::Error,
    },
}
