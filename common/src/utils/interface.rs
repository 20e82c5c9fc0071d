use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

pub trait NetworkInterfaceExtension {
    /// Every address on the interface that has a 4-byte form, in assignment order.
    fn get_ipv4_addrs(&self) -> Vec<Ipv4Addr>;
    fn has_ipv4(&self) -> bool;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn get_ipv4_addrs(&self) -> Vec<Ipv4Addr> {
        self.ips.iter().filter_map(as_ipv4).collect()
    }

    fn has_ipv4(&self) -> bool {
        self.ips.iter().any(|net| as_ipv4(net).is_some())
    }
}

// IPv4-mapped IPv6 (::ffff:a.b.c.d) counts as IPv4
fn as_ipv4(net: &IpNetwork) -> Option<Ipv4Addr> {
    match net {
        IpNetwork::V4(v4) => Some(v4.ip()),
        IpNetwork::V6(v6) => v6.ip().to_ipv4_mapped(),
    }
}
