use arpsend_packets::{
    ArpFrame, ArpHardwareType, ArpOp, EthernetFrame, MacAddr, IPV4_ETHER_TYPE,
};
use std::net::{IpAddr, Ipv4Addr};

///
/// An Ethernet/IPv4 ARP request, field by field (RFC 826). Every field is written to the wire as
/// stored here, nothing is filled in later.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArpRequest {
    pub hardware_type: u16,
    pub protocol_type: u16,
    pub hardware_addr_len: u8,
    pub protocol_addr_len: u8,
    pub opcode: u16,
    pub sender_hardware_addr: MacAddr,
    pub sender_protocol_addr: Ipv4Addr,
    pub target_hardware_addr: MacAddr,
    pub target_protocol_addr: Ipv4Addr,
}

impl ArpRequest {
    /// A "who-has `target`" request. The sender fields start out zeroed; set them to the sending
    /// interface's addresses before building the frame.
    pub fn who_has(target: Ipv4Addr) -> Self {
        ArpRequest {
            hardware_type: ArpHardwareType::Ethernet as u16,
            protocol_type: IPV4_ETHER_TYPE,
            hardware_addr_len: 6,
            protocol_addr_len: 4,
            opcode: ArpOp::Request as u16,
            sender_hardware_addr: MacAddr::default(),
            sender_protocol_addr: Ipv4Addr::UNSPECIFIED,
            target_hardware_addr: MacAddr::BROADCAST,
            target_protocol_addr: target,
        }
    }

    /// Wraps the request in a broadcast Ethernet frame sourced from the sender hardware address.
    ///
    /// The addresses are always laid out as a 6 byte MAC and a 4 byte IPv4 address, so the frame
    /// is 42 bytes whatever the length fields hold.
    pub fn to_frame(&self) -> EthernetFrame {
        let mut arp = ArpFrame::new(6, 4);
        arp.set_hardware_type(self.hardware_type);
        arp.set_protocol_type(self.protocol_type);
        arp.set_opcode(self.opcode);
        arp.set_sender_hardware_addr(self.sender_hardware_addr);
        arp.set_sender_protocol_addr(IpAddr::V4(self.sender_protocol_addr));
        arp.set_target_hardware_addr(self.target_hardware_addr);
        arp.set_target_protocol_addr(IpAddr::V4(self.target_protocol_addr));
        // The address setters locate fields through the length fields, so these go last.
        arp.set_hardware_addr_len(self.hardware_addr_len);
        arp.set_protocol_addr_len(self.protocol_addr_len);

        let mut frame = EthernetFrame::encap_arp(arp);
        frame.set_dest_mac(MacAddr::BROADCAST);
        frame.set_src_mac(self.sender_hardware_addr);
        frame
    }
}
