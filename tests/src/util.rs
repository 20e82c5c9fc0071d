use std::net::{Ipv4Addr, Ipv6Addr};

use macsniff_common::config::CaptureSettings;
use macsniff_common::error::{Result, SniffError};
use macsniff_core::capture::CaptureBackend;
use macsniff_core::network::channel::FrameStream;
use pnet::datalink::{MacAddr, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network, Ipv6Network};
use pnet::packet::arp::{ArpHardwareTypes, ArpOperations, MutableArpPacket};
use pnet::packet::ethernet::{EtherType, EtherTypes, MutableEthernetPacket};
use pnet::packet::ipv4::MutableIpv4Packet;
use tokio::sync::mpsc::{self, UnboundedSender};

/*************************************************************
                    Interface fixtures
**************************************************************/

pub const IFF_UP: u32 = 1;
pub const IFF_BROADCAST: u32 = 1 << 1;
pub const IFF_LOOPBACK: u32 = 1 << 3;

pub fn ni(name: &str, index: u32, mac: Option<MacAddr>, ips: &[IpNetwork], flags: u32) -> NetworkInterface {
    NetworkInterface {
        name: name.into(),
        description: "".into(),
        index,
        mac,
        ips: ips.to_vec(),
        flags,
    }
}

pub fn v4(a: u8, b: u8, c: u8, d: u8, p: u8) -> IpNetwork {
    IpNetwork::V4(Ipv4Network::new(Ipv4Addr::new(a, b, c, d), p).unwrap())
}

pub fn v6(s: &str, p: u8) -> IpNetwork {
    IpNetwork::V6(Ipv6Network::new(s.parse::<Ipv6Addr>().unwrap(), p).unwrap())
}

/*************************************************************
                      Frame builders
**************************************************************/

const ETH_HDR_LEN: usize = 14;

pub const SRC_MAC: MacAddr = MacAddr(0x52, 0x54, 0x00, 0x12, 0x34, 0x56);
pub const DST_MAC: MacAddr = MacAddr(0xff, 0xff, 0xff, 0xff, 0xff, 0xff);

fn ethernet_frame(et: EtherType, payload_len: usize) -> Vec<u8> {
    let mut buffer = vec![0u8; ETH_HDR_LEN + payload_len];
    let mut eth = MutableEthernetPacket::new(&mut buffer).unwrap();
    eth.set_source(SRC_MAC);
    eth.set_destination(DST_MAC);
    eth.set_ethertype(et);
    buffer
}

pub fn link_frame() -> Vec<u8> {
    ethernet_frame(EtherType::new(0x88cc), 32)
}

pub fn ipv4_frame(src: Ipv4Addr, dst: Ipv4Addr) -> Vec<u8> {
    let mut buffer = ethernet_frame(EtherTypes::Ipv4, 20);
    let mut ip = MutableIpv4Packet::new(&mut buffer[ETH_HDR_LEN..]).unwrap();
    ip.set_version(4);
    ip.set_header_length(5);
    ip.set_total_length(20);
    ip.set_source(src);
    ip.set_destination(dst);
    buffer
}

pub fn arp_frame(sender: Ipv4Addr, target: Ipv4Addr) -> Vec<u8> {
    let mut buffer = ethernet_frame(EtherTypes::Arp, 28);
    let mut arp = MutableArpPacket::new(&mut buffer[ETH_HDR_LEN..]).unwrap();
    arp.set_hardware_type(ArpHardwareTypes::Ethernet);
    arp.set_protocol_type(EtherTypes::Ipv4);
    arp.set_hw_addr_len(6);
    arp.set_proto_addr_len(4);
    arp.set_operation(ArpOperations::Request);
    arp.set_sender_hw_addr(SRC_MAC);
    arp.set_target_hw_addr(MacAddr::zero());
    arp.set_sender_proto_addr(sender);
    arp.set_target_proto_addr(target);
    buffer
}

/*************************************************************
                     Capture backends
**************************************************************/

/// Records every open request and replays a fixed list of frames.
///
/// With `keep_open` the stream never ends on its own.
#[derive(Default)]
pub struct ScriptedBackend {
    pub frames: Vec<Vec<u8>>,
    pub keep_open: bool,
    pub fail_with: Option<std::io::ErrorKind>,
    pub opened: Vec<String>,
    held: Vec<UnboundedSender<Vec<u8>>>,
}

impl ScriptedBackend {
    pub fn with_frames(frames: Vec<Vec<u8>>) -> Self {
        Self {
            frames,
            ..Default::default()
        }
    }

    pub fn never_closing() -> Self {
        Self {
            keep_open: true,
            ..Default::default()
        }
    }

    pub fn failing(kind: std::io::ErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Default::default()
        }
    }
}

impl CaptureBackend for ScriptedBackend {
    fn open(&mut self, interface: &str, _settings: &CaptureSettings) -> Result<FrameStream> {
        self.opened.push(interface.to_string());
        if let Some(kind) = self.fail_with {
            return Err(SniffError::capture_open(
                interface,
                std::io::Error::new(kind, "scripted failure"),
            ));
        }

        let (tx, rx) = mpsc::unbounded_channel();
        for frame in self.frames.drain(..) {
            let _ = tx.send(frame);
        }
        if self.keep_open {
            self.held.push(tx);
        }
        Ok(FrameStream::new(rx))
    }
}

/// Interface enumeration that must never run.
pub fn no_enumeration() -> Vec<NetworkInterface> {
    panic!("interfaces were enumerated")
}
