//! Per-frame decoding.
//!
//! A [`CaptureEvent`] borrows the raw bytes of one captured frame and exposes
//! the Ethernet header plus the ARP or IPv4 layer carried inside it, if any.

use std::fmt;
use std::net::Ipv4Addr;

use pnet::packet::arp::ArpPacket;
use pnet::packet::ethernet::{EtherType, EtherTypes, EthernetPacket};
use pnet::packet::ipv4::Ipv4Packet;
use pnet::packet::vlan::VlanPacket;
use pnet::util::MacAddr;

const ETH_HDR_LEN: usize = 14;
const VLAN_TAG_LEN: usize = 4;

pub struct CaptureEvent<'a> {
    ethernet: EthernetPacket<'a>,
    /// Ethertype and payload after any 802.1Q/802.1ad tags.
    ethertype: EtherType,
    payload: &'a [u8],
}

impl<'a> CaptureEvent<'a> {
    /// Returns `None` when the bytes are too short for an Ethernet header.
    pub fn decode(bytes: &'a [u8]) -> Option<Self> {
        let ethernet = EthernetPacket::new(bytes)?;
        let (ethertype, payload) = untag(ethernet.get_ethertype(), &bytes[ETH_HDR_LEN..]);
        Some(Self {
            ethernet,
            ethertype,
            payload,
        })
    }

    pub fn source_mac(&self) -> MacAddr {
        self.ethernet.get_source()
    }

    pub fn destination_mac(&self) -> MacAddr {
        self.ethernet.get_destination()
    }

    /// The ethertype of the innermost layer, VLAN tags skipped.
    pub fn ethertype(&self) -> EtherType {
        self.ethertype
    }

    pub fn arp(&self) -> Option<ArpPacket<'a>> {
        match self.ethertype {
            EtherTypes::Arp => ArpPacket::new(self.payload),
            _ => None,
        }
    }

    pub fn ipv4(&self) -> Option<Ipv4Packet<'a>> {
        match self.ethertype {
            EtherTypes::Ipv4 => Ipv4Packet::new(self.payload)
                .filter(|ip| ip.get_version() == 4 && ip.get_header_length() >= 5),
            _ => None,
        }
    }

    /// Picks the richest view: ARP first, then IPv4, else link addresses only.
    pub fn summarize(&self) -> FrameSummary {
        let src_mac = self.source_mac();
        let dst_mac = self.destination_mac();

        if let Some(arp) = self.arp() {
            return FrameSummary::Arp {
                src_mac,
                src_ip: arp.get_sender_proto_addr(),
                dst_mac,
                dst_ip: arp.get_target_proto_addr(),
            };
        }
        if let Some(ipv4) = self.ipv4() {
            return FrameSummary::Ipv4 {
                src_mac,
                src_ip: ipv4.get_source(),
                dst_mac,
                dst_ip: ipv4.get_destination(),
            };
        }
        FrameSummary::Link { src_mac, dst_mac }
    }
}

/// The printable addressing information of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSummary {
    Arp {
        src_mac: MacAddr,
        src_ip: Ipv4Addr,
        dst_mac: MacAddr,
        dst_ip: Ipv4Addr,
    },
    Ipv4 {
        src_mac: MacAddr,
        src_ip: Ipv4Addr,
        dst_mac: MacAddr,
        dst_ip: Ipv4Addr,
    },
    Link {
        src_mac: MacAddr,
        dst_mac: MacAddr,
    },
}

impl fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameSummary::Arp { src_mac, src_ip, dst_mac, dst_ip }
            | FrameSummary::Ipv4 { src_mac, src_ip, dst_mac, dst_ip } => write!(
                f,
                "Src MAC: {src_mac} IP: {src_ip}, Dst MAC: {dst_mac} IP: {dst_ip}"
            ),
            FrameSummary::Link { src_mac, dst_mac } => {
                write!(f, "Src MAC: {src_mac}, Dst MAC: {dst_mac}")
            }
        }
    }
}

fn is_vlan_tag(ethertype: EtherType) -> bool {
    matches!(ethertype, EtherTypes::Vlan | EtherTypes::PBridge | EtherTypes::QinQ)
}

/// Peels stacked VLAN tags. A truncated tag leaves the tag ethertype in place.
fn untag(mut ethertype: EtherType, mut payload: &[u8]) -> (EtherType, &[u8]) {
    while is_vlan_tag(ethertype) {
        let Some(tag) = VlanPacket::new(payload) else {
            break;
        };
        ethertype = tag.get_ethertype();
        payload = &payload[VLAN_TAG_LEN..];
    }
    (ethertype, payload)
}

/// Decodes raw bytes straight into a summary line, skipping non-Ethernet data.
pub fn summarize(bytes: &[u8]) -> Option<FrameSummary> {
    CaptureEvent::decode(bytes).map(|event| event.summarize())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
