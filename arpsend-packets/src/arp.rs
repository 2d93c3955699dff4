use crate::{EthernetFrame, MacAddr, ARP_ETHER_TYPE, IPV4_ETHER_TYPE};
use std::convert::{TryFrom, TryInto};
use std::net::{IpAddr, Ipv4Addr};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArpOp {
    Request = 1,
    Reply = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArpHardwareType {
    Ethernet = 1,
}

/// Length of an Ethernet/IPv4 ARP payload.
pub const ARP_IPV4_PAYLOAD_LEN: usize = 28;

const HARDWARE_TYPE_RANGE: (usize, usize) = (0, 2);
const PROTOCOL_TYPE_RANGE: (usize, usize) = (2, 4);
const HARDWARE_ADDR_LEN_RANGE: (usize, usize) = (4, 5);
const PROTOCOL_ADDR_LEN_RANGE: (usize, usize) = (5, 6);
const OPCODE_RANGE: (usize, usize) = (6, 8);

///
/// EthernetFrame wrapper with getters/setters for the packet structure described in RFC 826
/// https://tools.ietf.org/html/rfc826
///
#[derive(Clone, Debug)]
pub struct ArpFrame {
    frame: EthernetFrame,
}

impl ArpFrame {
    ///
    /// Constructs a new, empty packet with a payload big enough for all ARP fields,
    /// given some hardware/protocol address lengths. The underlying frame carries the ARP
    /// ether type.
    ///
    pub fn new(hardware_addr_len: u8, protocol_addr_len: u8) -> Self {
        let payload_len = 8 + (2 * hardware_addr_len as usize) + (2 * protocol_addr_len as usize);
        let payload: Vec<u8> = vec![0; payload_len];

        let mut frame = EthernetFrame::empty();
        frame.set_ether_type(ARP_ETHER_TYPE);
        frame.set_payload(payload.as_slice());

        let mut arp_frame = ArpFrame { frame };
        arp_frame.set_hardware_addr_len(hardware_addr_len);
        arp_frame.set_protocol_addr_len(protocol_addr_len);
        arp_frame
    }

    pub fn hardware_type(&self) -> u16 {
        let (start, end) = HARDWARE_TYPE_RANGE;
        u16::from_be_bytes(self.arp_data(start, end).try_into().unwrap())
    }

    pub fn protocol_type(&self) -> u16 {
        let (start, end) = PROTOCOL_TYPE_RANGE;
        u16::from_be_bytes(self.arp_data(start, end).try_into().unwrap())
    }

    pub fn hardware_addr_len(&self) -> u8 {
        let (start, _) = HARDWARE_ADDR_LEN_RANGE;
        self.arp_data(start, start + 1)[0]
    }

    pub fn protocol_addr_len(&self) -> u8 {
        let (start, _) = PROTOCOL_ADDR_LEN_RANGE;
        self.arp_data(start, start + 1)[0]
    }

    pub fn opcode(&self) -> u16 {
        let (start, end) = OPCODE_RANGE;
        u16::from_be_bytes(self.arp_data(start, end).try_into().unwrap())
    }

    pub fn sender_hardware_addr(&self) -> &[u8] {
        let (start, end) = self.sender_hardware_addr_range();
        self.arp_data(start, end)
    }

    pub fn sender_protocol_addr(&self) -> &[u8] {
        let (start, end) = self.sender_protocol_addr_range();
        self.arp_data(start, end)
    }

    pub fn target_hardware_addr(&self) -> &[u8] {
        let (start, end) = self.target_hardware_addr_range();
        self.arp_data(start, end)
    }

    pub fn target_protocol_addr(&self) -> &[u8] {
        let (start, end) = self.target_protocol_addr_range();
        self.arp_data(start, end)
    }

    /// The sender hardware address, if this is an Ethernet ARP frame.
    pub fn sender_mac_addr(&self) -> Option<MacAddr> {
        <[u8; 6]>::try_from(self.sender_hardware_addr())
            .ok()
            .map(MacAddr::new)
    }

    /// The target hardware address, if this is an Ethernet ARP frame.
    pub fn target_mac_addr(&self) -> Option<MacAddr> {
        <[u8; 6]>::try_from(self.target_hardware_addr())
            .ok()
            .map(MacAddr::new)
    }

    /// The sender protocol address, if this frame resolves IPv4.
    pub fn sender_ipv4_addr(&self) -> Option<Ipv4Addr> {
        if self.protocol_type() != IPV4_ETHER_TYPE {
            return None;
        }
        <[u8; 4]>::try_from(self.sender_protocol_addr())
            .ok()
            .map(Ipv4Addr::from)
    }

    /// The target protocol address, if this frame resolves IPv4.
    pub fn target_ipv4_addr(&self) -> Option<Ipv4Addr> {
        if self.protocol_type() != IPV4_ETHER_TYPE {
            return None;
        }
        <[u8; 4]>::try_from(self.target_protocol_addr())
            .ok()
            .map(Ipv4Addr::from)
    }

    pub fn set_hardware_type(&mut self, htype: u16) {
        let (start, end) = HARDWARE_TYPE_RANGE;
        self.set_arp_data(&htype.to_be_bytes(), start, end);
    }

    pub fn set_protocol_type(&mut self, ptype: u16) {
        let (start, end) = PROTOCOL_TYPE_RANGE;
        self.set_arp_data(&ptype.to_be_bytes(), start, end);
    }

    pub fn set_hardware_addr_len(&mut self, len: u8) {
        let (start, end) = HARDWARE_ADDR_LEN_RANGE;
        self.set_arp_data(&[len], start, end);
    }

    pub fn set_protocol_addr_len(&mut self, len: u8) {
        let (start, end) = PROTOCOL_ADDR_LEN_RANGE;
        self.set_arp_data(&[len], start, end);
    }

    pub fn set_opcode(&mut self, code: u16) {
        let (start, end) = OPCODE_RANGE;
        self.set_arp_data(&code.to_be_bytes(), start, end);
    }

    // The address setters write at the offsets implied by the length fields, so those must be
    // set first. `new` takes care of that.

    pub fn set_sender_hardware_addr(&mut self, addr: MacAddr) {
        let (start, end) = self.sender_hardware_addr_range();
        self.set_arp_data(&addr.bytes, start, end);
    }

    pub fn set_sender_protocol_addr(&mut self, ip_addr: IpAddr) {
        let (start, end) = self.sender_protocol_addr_range();
        self.set_ip_addr(ip_addr, start, end);
    }

    pub fn set_target_hardware_addr(&mut self, addr: MacAddr) {
        let (start, end) = self.target_hardware_addr_range();
        self.set_arp_data(&addr.bytes, start, end);
    }

    pub fn set_target_protocol_addr(&mut self, ip_addr: IpAddr) {
        let (start, end) = self.target_protocol_addr_range();
        self.set_ip_addr(ip_addr, start, end);
    }

    /// Borrow the wrapped frame.
    pub fn ethernet(&self) -> &EthernetFrame {
        &self.frame
    }

    // Move ownership of the frame back to the caller
    pub fn frame(self) -> EthernetFrame {
        self.frame
    }

    // Returns the bytes in the ethernet frame between start and end, exclusive
    fn arp_data(&self, start: usize, end: usize) -> &[u8] {
        let frame_offset_start = self.frame.payload_offset + start;
        let frame_offset_end = self.frame.payload_offset + end;

        &self.frame.data[frame_offset_start..frame_offset_end]
    }

    fn set_arp_data(&mut self, bytes: &[u8], start: usize, end: usize) {
        let frame_offset_start = self.frame.payload_offset + start;
        let frame_offset_end = self.frame.payload_offset + end;

        self.frame.data[frame_offset_start..frame_offset_end].copy_from_slice(bytes);
    }

    // Panics if the address family doesn't match the protocol address length.
    fn set_ip_addr(&mut self, addr: IpAddr, start: usize, end: usize) {
        match addr {
            IpAddr::V4(ipv4) => self.set_arp_data(&ipv4.octets(), start, end),
            IpAddr::V6(ipv6) => self.set_arp_data(&ipv6.octets(), start, end),
        };
    }

    fn sender_hardware_addr_range(&self) -> (usize, usize) {
        let hlen = self.hardware_addr_len() as usize;

        let start = 8;
        let end = start + hlen;
        (start, end)
    }

    fn sender_protocol_addr_range(&self) -> (usize, usize) {
        let hlen = self.hardware_addr_len() as usize;
        let plen = self.protocol_addr_len() as usize;

        let start = 8 + hlen;
        let end = start + plen;
        (start, end)
    }

    fn target_hardware_addr_range(&self) -> (usize, usize) {
        let hlen = self.hardware_addr_len() as usize;
        let plen = self.protocol_addr_len() as usize;

        let start = 8 + hlen + plen;
        let end = start + hlen;
        (start, end)
    }

    fn target_protocol_addr_range(&self) -> (usize, usize) {
        let hlen = self.hardware_addr_len() as usize;
        let plen = self.protocol_addr_len() as usize;

        let start = 8 + (2 * hlen) + plen;
        let end = start + plen;
        (start, end)
    }
}

impl TryFrom<EthernetFrame> for ArpFrame {
    type Error = &'static str;

    ///
    /// Decorates the given EthernetFrame with ArpFrame getters/setters.
    /// Validates
    /// - The frame has an ARP ether type
    /// - The frame has a reasonable payload size given the hardware/protocol address lengths
    ///
    /// Trailing bytes past the ARP fields (Ethernet padding) are tolerated.
    ///
    fn try_from(frame: EthernetFrame) -> Result<Self, Self::Error> {
        if frame.ether_type() != ARP_ETHER_TYPE {
            return Err("Frame does not have ARP ether type.");
        };

        let arp_frame = ArpFrame { frame };
        let payload_len = arp_frame.frame.payload().len();

        if payload_len < 8 {
            return Err("Frame payload is too small");
        }

        let hlen = arp_frame.hardware_addr_len() as usize;
        let plen = arp_frame.protocol_addr_len() as usize;

        if payload_len < (8 + (2 * hlen) + (2 * plen)) {
            return Err("Frame payload doesn't match address length fields");
        }

        Ok(arp_frame)
    }
}
