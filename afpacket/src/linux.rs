#![allow(non_camel_case_types)]

use libc;
use std::{
    ffi::CStr,
    io,
    mem::MaybeUninit,
    net::Ipv4Addr,
};

pub(crate) const SIOCGIFADDR: libc::c_ulong = 0x8915;
pub(crate) const SIOCGIFHWADDR: libc::c_ulong = 0x8927;
pub(crate) const SIOCGIFINDEX: libc::c_ulong = 0x8933;

// Only here so `ifru` has the kernel's size and alignment.
#[allow(dead_code)]
#[repr(C)]
#[derive(Clone, Copy)]
pub(crate) struct ifmap {
    pub(crate) mem_start: libc::c_ulong,
    pub(crate) mem_end: libc::c_ulong,
    pub(crate) base_addr: libc::c_ushort,
    pub(crate) irq: libc::c_uchar,
    pub(crate) dma: libc::c_uchar,
    pub(crate) port: libc::c_uchar,
}

#[repr(C)]
pub(crate) union ifru {
    pub(crate) ifru_addr: libc::sockaddr,
    pub(crate) ifru_hwaddr: libc::sockaddr,
    pub(crate) ifru_ivalue: libc::c_int,
    pub(crate) ifru_map: ifmap,
}

#[repr(C)]
pub(crate) union ifrn {
    pub(crate) ifrn_name: [libc::c_char; libc::IFNAMSIZ],
}

#[repr(C)]
pub(crate) struct ifreq {
    pub(crate) ifr_ifrn: ifrn,
    pub(crate) ifr_ifru: ifru,
}

impl ifreq {
    /// Builds a zeroed request naming `iface`. The name, including its terminating NUL, must fit
    /// in `IFNAMSIZ` bytes.
    pub(crate) fn with_name(iface: &CStr) -> io::Result<Self> {
        let name = iface.to_bytes_with_nul();
        if name.len() > libc::IFNAMSIZ {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "interface name {:?} is longer than {} bytes",
                    iface,
                    libc::IFNAMSIZ - 1
                ),
            ));
        }

        // An all-zero ifreq is a valid value for every field of the unions above.
        let mut ifr: ifreq = unsafe { MaybeUninit::zeroed().assume_init() };
        let dest = unsafe { &mut ifr.ifr_ifrn.ifrn_name };
        for (d, s) in dest.iter_mut().zip(name) {
            *d = *s as libc::c_char;
        }
        Ok(ifr)
    }

    pub(crate) fn name(&self) -> &[libc::c_char; libc::IFNAMSIZ] {
        unsafe { &self.ifr_ifrn.ifrn_name }
    }

    /// Reads the result of `SIOCGIFINDEX`.
    pub(crate) fn index(&self) -> libc::c_int {
        // expanded from `ifr_ifindex` in kernel headers
        unsafe { self.ifr_ifru.ifru_ivalue }
    }

    /// Reads the result of `SIOCGIFHWADDR`.
    pub(crate) fn hardware_addr(&self) -> [u8; 6] {
        let sa_data = unsafe { self.ifr_ifru.ifru_hwaddr.sa_data };
        let mut mac = [0u8; 6];
        for (m, b) in mac.iter_mut().zip(sa_data.iter()) {
            *m = *b as u8;
        }
        mac
    }

    /// Reads the result of `SIOCGIFADDR`, which the kernel fills in as a `sockaddr_in`.
    pub(crate) fn ipv4_addr(&self) -> Option<Ipv4Addr> {
        let addr = unsafe { &self.ifr_ifru.ifru_addr };
        if addr.sa_family != libc::AF_INET as libc::sa_family_t {
            return None;
        }
        let sin = unsafe { &*(addr as *const libc::sockaddr as *const libc::sockaddr_in) };
        Some(Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr)))
    }
}
