//! Blocking `AF_PACKET` sockets for sending complete link-layer frames on Linux.
#![cfg(target_os = "linux")]
mod linux;
mod sockets;

pub use sockets::{BoundSocket, Socket};
