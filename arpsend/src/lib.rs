//! Sends one broadcast ARP who-has request on a named interface and exits.
//!
//! The binary is a thin wrapper around [`run`], which takes the parsed command line and a way of
//! opening an [`Interface`], so the whole path from arguments to the bytes on the wire can be
//! driven without a raw socket.

pub mod cli;
mod error;
mod interface;
mod request;
mod sender;
pub mod target;

pub use cli::{Command, Invocation, USAGE_MESSAGE};
pub use error::Error;
pub use interface::Interface;
#[cfg(target_os = "linux")]
pub use interface::PacketInterface;
pub use request::ArpRequest;
pub use sender::send_request;

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The arguments were wrong; no interface was opened.
    Usage,
    /// The request went out once.
    Sent { bytes: usize },
}

/// Carries out `command`. `open` is called at most once, with the interface name exactly as
/// given on the command line.
pub fn run<I, F>(command: Command, open: F) -> Result<Outcome, Error>
where
    I: Interface,
    F: FnOnce(&str) -> Result<I, Error>,
{
    let invocation = match command {
        Command::Usage => return Ok(Outcome::Usage),
        Command::Send(invocation) => invocation,
    };

    let target = target::resolve(&invocation.target)?;
    let mut iface = open(&invocation.iface)?;
    let bytes = send_request(&mut iface, target)?;
    Ok(Outcome::Sent { bytes })
}
