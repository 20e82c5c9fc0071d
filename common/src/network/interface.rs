//! Picks the interface to sniff on when the user left it at `"default"`.

use pnet::datalink::NetworkInterface;
use tracing::debug;

use crate::error::{Result, SniffError};
use crate::utils::interface::NetworkInterfaceExtension;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ViabilityError {
    /// Loopback traffic never leaves the host.
    IsLoopback,
    /// The interface is administratively down.
    IsDown,
    /// No address on the interface has an IPv4 form.
    NoIpv4Address,
}

/// Enumerates interfaces with `enumerate` and returns the name of the first usable one.
///
/// Production callers pass `pnet::datalink::interfaces`.
pub fn resolve_default_interface<F>(enumerate: F) -> Result<String>
where
    F: FnOnce() -> Vec<NetworkInterface>,
{
    let interfaces: Vec<NetworkInterface> = enumerate();
    debug!("Identified {} network interface(s)", interfaces.len());
    select_default_interface(&interfaces).map(|interface| interface.name.clone())
}

/// First interface in enumeration order that is up, not loopback and has IPv4.
pub fn select_default_interface(interfaces: &[NetworkInterface]) -> Result<&NetworkInterface> {
    interfaces
        .iter()
        .find(|interface| match is_capture_candidate(interface) {
            Ok(()) => true,
            Err(reason) => {
                debug!("Skipping {}: {:?}", interface.name, reason);
                false
            }
        })
        .ok_or(SniffError::NoInterfaceFound)
}

fn is_capture_candidate(interface: &NetworkInterface) -> std::result::Result<(), ViabilityError> {
    if interface.is_loopback() {
        return Err(ViabilityError::IsLoopback);
    }
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if !interface.has_ipv4() {
        return Err(ViabilityError::NoIpv4Address);
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
