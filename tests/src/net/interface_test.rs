use macsniff_common::error::SniffError;
use macsniff_common::network::interface;
use pnet::datalink::{MacAddr, NetworkInterface};

use crate::util::{ni, v4, v6, IFF_BROADCAST, IFF_UP};

/*************************************************************
                  Tests for default selection
**************************************************************/

#[test]
fn default_selects_enp9s0() {
    let interfaces: Vec<NetworkInterface> = iface_all();
    let selected = interface::select_default_interface(&interfaces).unwrap();
    assert_eq!(enp9s0(), *selected);
}

#[test]
fn default_selects_the_only_qualifying_interface() {
    let interfaces: Vec<NetworkInterface> = vec![lo(), enp9s0_down(), ipv6leakintrf0(), wlan0()];
    let selected = interface::select_default_interface(&interfaces).unwrap();
    assert_eq!(selected.name, "wlan0");
}

#[test]
fn default_accepts_point_to_point_with_ipv4() {
    let interfaces: Vec<NetworkInterface> = vec![lo(), ipv6leakintrf0(), veth1234(), tun0()];
    let selected = interface::select_default_interface(&interfaces).unwrap();
    assert_eq!(selected.name, "tun0");
}

#[test]
fn default_selects_nothing_without_ipv4() {
    let interfaces: Vec<NetworkInterface> = vec![lo(), veth1234(), ipv6leakintrf0(), enp9s0_down()];
    let selected = interface::select_default_interface(&interfaces);
    assert!(
        matches!(selected, Err(SniffError::NoInterfaceFound)),
        "Expected no interface, received: {selected:?}"
    );
}

#[test]
fn resolve_uses_given_enumeration() {
    let name = interface::resolve_default_interface(|| vec![lo(), eth1()]).unwrap();
    assert_eq!(name, "eth1");
}

/*************************************************************
                  Mock interfaces for testing
**************************************************************/

fn iface_all() -> Vec<NetworkInterface> {
    vec![lo(), enp9s0(), tun0(), ipv6leakintrf0(), wlan0(), eth1(), veth1234()]
}

fn lo() -> NetworkInterface {
    ni(
        "lo",
        1,
        Some(MacAddr::new(0, 0, 0, 0, 0, 0)),
        &[v4(127, 0, 0, 1, 8), v6("::1", 128)],
        65609,
    )
}

fn enp9s0() -> NetworkInterface {
    ni(
        "enp9s0",
        2,
        Some(MacAddr::new(0xa8, 0xa1, 0x59, 0x13, 0x41, 0x46)),
        &[
            v4(192, 168, 0, 32, 24),
            v6("2a02:908:8c1:b880::b054", 128),
            v6("fe80::b3dd:5c39:7c29:48b6", 64),
        ],
        69699,
    )
}

fn enp9s0_down() -> NetworkInterface {
    NetworkInterface {
        flags: IFF_BROADCAST,
        ..enp9s0()
    }
}

fn tun0() -> NetworkInterface {
    ni(
        "tun0",
        5,
        None,
        &[v4(10, 96, 0, 57, 16), v6("fe80::c137:8964:5a63:efde", 64)],
        69841,
    )
}

fn ipv6leakintrf0() -> NetworkInterface {
    ni(
        "ipv6leakintrf0",
        6,
        Some(MacAddr::new(0xd2, 0x25, 0xd4, 0x9f, 0x18, 0xfd)),
        &[v6("fdeb:446c:912d:8da::", 64), v6("fe80::7f87:ff4a:9ad8:d2f0", 64)],
        65731,
    )
}

fn wlan0() -> NetworkInterface {
    ni(
        "wlan0",
        3,
        Some(MacAddr::new(0x34, 0xcf, 0xf6, 0x9a, 0x11, 0x22)),
        &[v4(192, 168, 1, 42, 24), v6("fe80::36cf:f6ff:fe9a:1122", 64)],
        IFF_UP | IFF_BROADCAST,
    )
}

fn eth1() -> NetworkInterface {
    ni(
        "eth1",
        4,
        Some(MacAddr::new(0x52, 0x54, 0x00, 0x12, 0x34, 0x56)),
        &[v4(10, 0, 0, 15, 24)],
        69699,
    )
}

fn veth1234() -> NetworkInterface {
    ni(
        "veth1234",
        8,
        Some(MacAddr::new(0x1a, 0x2b, 0x3c, 0x4d, 0x5e, 0x6f)),
        &[v6("fe80::1a2b:3cff:fe4d:5e6f", 64)],
        69699,
    )
}
