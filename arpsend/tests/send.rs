use arpsend::{run, send_request, Command, Error, Interface, Invocation, Outcome};
use arpsend_packets::{ArpFrame, ArpOp, EthernetFrame, MacAddr, ARP_ETHER_TYPE};
use std::cell::RefCell;
use std::convert::TryFrom;
use std::io;
use std::net::Ipv4Addr;
use std::rc::Rc;

const LOCAL_MAC: MacAddr = MacAddr {
    bytes: [0x52, 0x54, 0x00, 0xab, 0xcd, 0xef],
};

/// Records every frame written to it instead of touching the network.
struct RecordingInterface {
    name: String,
    ipv4: Option<Ipv4Addr>,
    fail_send: bool,
    sent: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl RecordingInterface {
    fn new(name: &str, sent: Rc<RefCell<Vec<Vec<u8>>>>) -> Self {
        RecordingInterface {
            name: name.to_string(),
            ipv4: Some(Ipv4Addr::new(192, 168, 1, 20)),
            fail_send: false,
            sent,
        }
    }
}

impl Interface for RecordingInterface {
    fn name(&self) -> &str {
        &self.name
    }

    fn hardware_addr(&self) -> io::Result<MacAddr> {
        Ok(LOCAL_MAC)
    }

    fn ipv4_addr(&self) -> io::Result<Option<Ipv4Addr>> {
        Ok(self.ipv4)
    }

    fn send(&mut self, frame: &[u8]) -> io::Result<usize> {
        if self.fail_send {
            return Err(io::Error::new(io::ErrorKind::Other, "network is down"));
        }
        self.sent.borrow_mut().push(frame.to_vec());
        Ok(frame.len())
    }
}

struct Harness {
    opened: Rc<RefCell<Vec<String>>>,
    sent: Rc<RefCell<Vec<Vec<u8>>>>,
}

impl Harness {
    fn new() -> Self {
        Harness {
            opened: Rc::new(RefCell::new(vec![])),
            sent: Rc::new(RefCell::new(vec![])),
        }
    }

    fn run(&self, args: &[&str]) -> Result<Outcome, Error> {
        let command = arpsend::cli::parse_from(args).unwrap();
        let opened = self.opened.clone();
        let sent = self.sent.clone();
        run(command, move |name: &str| {
            opened.borrow_mut().push(name.to_string());
            Ok(RecordingInterface::new(name, sent))
        })
    }

    fn sent_arp(&self, index: usize) -> ArpFrame {
        let data = self.sent.borrow()[index].clone();
        let frame = EthernetFrame::from_buffer(data, 0).unwrap();
        ArpFrame::try_from(frame).unwrap()
    }
}

#[test]
fn sends_one_request() {
    let harness = Harness::new();
    let outcome = harness.run(&["arpsend", "192.168.1.1", "eth0"]).unwrap();

    assert_eq!(outcome, Outcome::Sent { bytes: 42 });
    assert_eq!(*harness.opened.borrow(), vec!["eth0".to_string()]);
    assert_eq!(harness.sent.borrow().len(), 1);

    let arp = harness.sent_arp(0);
    assert_eq!(arp.ethernet().dest_mac(), MacAddr::BROADCAST);
    assert_eq!(arp.ethernet().src_mac(), LOCAL_MAC);
    assert_eq!(arp.ethernet().ether_type(), ARP_ETHER_TYPE);
    assert_eq!(arp.hardware_type(), 1);
    assert_eq!(arp.protocol_type(), 0x0800);
    assert_eq!(arp.hardware_addr_len(), 6);
    assert_eq!(arp.protocol_addr_len(), 4);
    assert_eq!(arp.opcode(), ArpOp::Request as u16);
    assert_eq!(arp.sender_mac_addr(), Some(LOCAL_MAC));
    assert_eq!(arp.sender_ipv4_addr(), Some(Ipv4Addr::new(192, 168, 1, 20)));
    assert_eq!(arp.target_mac_addr(), Some(MacAddr::BROADCAST));
    assert_eq!(arp.target_ipv4_addr(), Some(Ipv4Addr::new(192, 168, 1, 1)));
}

#[test]
fn wrong_argument_count_sends_nothing() {
    for args in &[
        vec!["arpsend"],
        vec!["arpsend", "10.0.0.5"],
        vec!["arpsend", "10.0.0.5", "wlan0", "extra"],
        vec!["arpsend", "--", "10.0.0.5", "eth0"],
        vec!["arpsend", "10.0.0.5", "wlan0", "--extra"],
        vec!["arpsend", "-x"],
        vec!["arpsend", "-h"],
        vec!["arpsend", "--help"],
        vec!["arpsend", "-V"],
        vec!["arpsend", "--version"],
    ] {
        let harness = Harness::new();
        assert_eq!(harness.run(args).unwrap(), Outcome::Usage);
        assert!(harness.opened.borrow().is_empty());
        assert!(harness.sent.borrow().is_empty());
    }
}

#[test]
fn dashed_interface_name_is_opened() {
    for iface in &["--help", "-V", "--", "-x"] {
        let harness = Harness::new();
        let outcome = harness.run(&["arpsend", "10.0.0.5", *iface]).unwrap();
        assert_eq!(outcome, Outcome::Sent { bytes: 42 });
        assert_eq!(*harness.opened.borrow(), vec![iface.to_string()]);
        assert_eq!(harness.sent.borrow().len(), 1);
    }
}

#[test]
fn interface_name_is_passed_through() {
    let harness = Harness::new();
    harness
        .run(&["arpsend", "10.0.0.5", "enp0s31f6.100"])
        .unwrap();
    assert_eq!(*harness.opened.borrow(), vec!["enp0s31f6.100".to_string()]);
}

#[test]
fn target_matches_argument() {
    for target in &["10.0.0.5", "255.255.255.255", "0.0.0.0", "172.16.254.3"] {
        let harness = Harness::new();
        harness.run(&["arpsend", *target, "eth0"]).unwrap();
        let expected: Ipv4Addr = target.parse().unwrap();
        assert_eq!(harness.sent_arp(0).target_protocol_addr(), expected.octets());
    }
}

#[test]
fn repeated_runs_send_independent_frames() {
    let harness = Harness::new();
    harness.run(&["arpsend", "10.0.0.5", "eth0"]).unwrap();
    harness.run(&["arpsend", "10.0.0.5", "eth0"]).unwrap();
    assert_eq!(harness.opened.borrow().len(), 2);
    assert_eq!(harness.sent.borrow().len(), 2);
    assert_eq!(harness.sent.borrow()[0], harness.sent.borrow()[1]);
}

#[test]
fn interface_without_ipv4_sends_unspecified_sender() {
    let sent = Rc::new(RefCell::new(vec![]));
    let mut iface = RecordingInterface::new("eth0", sent.clone());
    iface.ipv4 = None;

    let bytes = send_request(&mut iface, Ipv4Addr::new(10, 0, 0, 5)).unwrap();
    assert_eq!(bytes, 42);

    let frame = EthernetFrame::from_buffer(sent.borrow()[0].clone(), 0).unwrap();
    let arp = ArpFrame::try_from(frame).unwrap();
    assert_eq!(arp.sender_ipv4_addr(), Some(Ipv4Addr::UNSPECIFIED));
}

#[test]
fn open_failure_is_reported() {
    let command = Command::Send(Invocation {
        target: "10.0.0.5".to_string(),
        iface: "nosuchif0".to_string(),
    });
    let result = run(command, |name: &str| -> Result<RecordingInterface, Error> {
        Err(Error::Open {
            iface: name.to_string(),
            source: io::Error::from_raw_os_error(19),
        })
    });

    match result {
        Err(Error::Open { iface, .. }) => assert_eq!(iface, "nosuchif0"),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn send_failure_is_reported() {
    let sent = Rc::new(RefCell::new(vec![]));
    let mut iface = RecordingInterface::new("eth0", sent.clone());
    iface.fail_send = true;

    match send_request(&mut iface, Ipv4Addr::new(10, 0, 0, 5)) {
        Err(e @ Error::Send { .. }) => {
            assert_eq!(e.to_string(), "failed to send on interface eth0: network is down")
        }
        other => panic!("unexpected result {:?}", other),
    }
    assert!(sent.borrow().is_empty());
}
