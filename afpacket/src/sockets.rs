#![deny(missing_docs)]

use crate::linux;
use libc;
use std::{
    ffi::CStr,
    io,
    mem::{self, MaybeUninit},
    net::Ipv4Addr,
};

/// Represents an unbound `AF_PACKET` socket.  At this phase of a socket's lifecycle, it can be
/// configured.
pub struct Socket {
    fd: libc::c_int,
    protocol: u16,
}

/// Represents a bound `AF_PACKET` socket. At this phase of a socket's lifecycle, it can be
/// written to, and the interface it is bound to can be queried.
pub struct BoundSocket {
    fd: libc::c_int,
    send_addr: libc::sockaddr_ll,
    iface: linux::ifreq,
}

impl Socket {
    /// Creates a new unbound socket for a single EtherType, given in host byte order.
    pub fn with_protocol(protocol: u16) -> io::Result<Self> {
        // This block must be marked as unsafe because it uses FFI with C code. We believe the code
        // in this block to be safe because it does not interact with any memory owned by Rust
        // code, nor does it violate the invariant of the Socket type -- namely, that it return an
        // Err if it fails to initialize.
        let fd = unsafe {
            // Resources:
            // https://beej.us/guide/bgnet/html/multi/syscalls.html#socket
            // man 7 packet
            let fd = libc::socket(
                libc::AF_PACKET,
                libc::SOCK_RAW,
                libc::c_int::from(protocol.to_be()),
            );
            if fd < 0 {
                return Err(io::Error::last_os_error());
            }
            fd
        };
        Ok(Self { fd, protocol })
    }

    /// Binds the socket to a network interface. This function consumes the `Socket` instance, as
    /// no more configuration options may be safely changed.
    pub fn bind(self, iface: impl AsRef<CStr>) -> io::Result<BoundSocket> {
        let mut ifr = linux::ifreq::with_name(iface.as_ref())?;

        // This block is marked as unsafe because it uses FFI, however, we believe it to be safe
        // because it handles FFI failures in accordance with the bound API's conventions, and the
        // ifreq it passes is owned by this frame and sized as the kernel expects.
        let send_addr = unsafe {
            // ioctl(SIOCGIFINDEX) fills in the index field of the ifreq object
            // Resources:
            // man 7 netdevice
            let err = libc::ioctl(self.fd, linux::SIOCGIFINDEX, &mut ifr as *mut linux::ifreq);
            if err < 0 {
                return Err(io::Error::last_os_error());
            }

            // bind the socket
            // Resources:
            // https://beej.us/guide/bgnet/html/multi/syscalls.html#bind
            // man 7 packet regarding sockaddr_ll
            let mut ll: libc::sockaddr_ll = MaybeUninit::zeroed().assume_init();
            ll.sll_family = libc::AF_PACKET as libc::c_ushort;
            ll.sll_protocol = self.protocol.to_be();
            ll.sll_ifindex = ifr.index();
            let err = libc::bind(
                self.fd,
                &ll as *const _ as *const libc::sockaddr,
                mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t,
            );
            if err < 0 {
                return Err(io::Error::last_os_error());
            }
            ll
        };
        let fd = self.fd;
        // This ensures that `self` does not attempt to close the file descriptor, as the file
        // descriptor is transferred to the BoundSocket we're returning. This doesn't cause any
        // resource leaks since the stack-bound `self` is consumed and deallocated in
        // `mem::forget`.
        mem::forget(self);
        Ok(BoundSocket {
            fd,
            send_addr,
            iface: ifr,
        })
    }
}

impl BoundSocket {
    /// Sends a frame to the NIC. The frame must start with its link-layer header.
    pub fn send(&mut self, frame: &[u8]) -> io::Result<usize> {
        // This block is marked as unsafe because it uses FFI. We believe this code to be safe,
        // because it safely borrows the Rust-owned frame and passes the length of the frame to the
        // libc function, so it should not exhibit any C-side undefined behaviour.
        unsafe {
            // Resources:
            // https://beej.us/guide/bgnet/html/multi/syscalls.html#sendtorecv
            let bytes = libc::sendto(
                self.fd,
                frame.as_ptr() as *const _,
                frame.len(),
                0,
                &self.send_addr as *const _ as *const libc::sockaddr,
                mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t,
            );
            if bytes < 0 {
                Err(io::Error::last_os_error())
            } else {
                Ok(bytes as usize)
            }
        }
    }

    /// Returns the index of the interface this socket is bound to.
    pub fn index(&self) -> i32 {
        self.send_addr.sll_ifindex
    }

    /// Returns the hardware (MAC) address of the bound interface.
    pub fn hardware_addr(&self) -> io::Result<[u8; 6]> {
        let ifr = self.query(linux::SIOCGIFHWADDR)?;
        Ok(ifr.hardware_addr())
    }

    /// Returns the primary IPv4 address of the bound interface, or `None` if it has none.
    pub fn ipv4_addr(&self) -> io::Result<Option<Ipv4Addr>> {
        match self.query(linux::SIOCGIFADDR) {
            Ok(ifr) => Ok(ifr.ipv4_addr()),
            Err(ref e) if e.raw_os_error() == Some(libc::EADDRNOTAVAIL) => Ok(None),
            Err(e) => Err(e),
        }
    }

    // Issues a read-only interface ioctl against a fresh copy of the bound interface's ifreq.
    fn query(&self, request: libc::c_ulong) -> io::Result<linux::ifreq> {
        let mut ifr = unsafe { MaybeUninit::<linux::ifreq>::zeroed().assume_init() };
        ifr.ifr_ifrn.ifrn_name = *self.iface.name();
        // The kernel writes at most `size_of::<ifreq>()` bytes into the object we own.
        let err = unsafe { libc::ioctl(self.fd, request, &mut ifr as *mut linux::ifreq) };
        if err < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(ifr)
    }
}

impl Drop for Socket {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}

impl Drop for BoundSocket {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}
