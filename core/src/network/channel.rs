//! Layer 2 capture through a pnet datalink channel.
//!
//! The datalink receiver blocks, so it lives on its own reader thread and hands
//! owned frame buffers to the async side through an unbounded queue. The thread
//! owns the receiver for its whole life and drops it when the queue's consumer
//! goes away or the receiver fails.

use std::io::{self, ErrorKind};
use std::thread::{self, JoinHandle};

use pnet::datalink::{self, Channel, Config, DataLinkReceiver, NetworkInterface};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use macsniff_common::config::CaptureSettings;
use macsniff_common::error::{Result, SniffError};

use crate::capture::CaptureBackend;

/// Stream of raw frames coming out of an open capture.
///
/// Yields `None` once the capture side has shut down.
pub struct FrameStream {
    rx: UnboundedReceiver<Vec<u8>>,
}

impl FrameStream {
    pub fn new(rx: UnboundedReceiver<Vec<u8>>) -> Self {
        Self { rx }
    }

    pub async fn next_frame(&mut self) -> Option<Vec<u8>> {
        self.rx.recv().await
    }
}

/// Opens live captures on host interfaces by name.
#[derive(Debug, Default, Clone, Copy)]
pub struct PnetBackend;

impl CaptureBackend for PnetBackend {
    fn open(&mut self, interface: &str, settings: &CaptureSettings) -> Result<FrameStream> {
        let intf: NetworkInterface = datalink::interfaces()
            .into_iter()
            .find(|candidate| candidate.name == interface)
            .ok_or_else(|| {
                SniffError::capture_open(
                    interface,
                    io::Error::new(ErrorKind::NotFound, "no such network interface"),
                )
            })?;
        start_capture(&intf, settings)
    }
}

pub fn start_capture(intf: &NetworkInterface, settings: &CaptureSettings) -> Result<FrameStream> {
    start_capture_with(intf, settings, datalink::channel)
}

fn start_capture_with<F>(
    intf: &NetworkInterface,
    settings: &CaptureSettings,
    channel_opener: F,
) -> Result<FrameStream>
where
    F: FnOnce(&NetworkInterface, Config) -> io::Result<Channel>,
{
    let cfg: Config = channel_config(settings);
    let rx = open_eth_channel(intf, &cfg, channel_opener)
        .map_err(|e| SniffError::capture_open(intf.name.clone(), e))?;
    info!("Capture opened on {}", intf.name);

    let ethernet_framed = carries_ethernet(intf);
    if !ethernet_framed {
        warn!("{} delivers raw IP packets, its frames will be skipped", intf.name);
    }

    let (queue_tx, queue_rx) = mpsc::unbounded_channel();
    spawn_reader(rx, queue_tx, settings.snapshot_len, ethernet_framed);
    Ok(FrameStream::new(queue_rx))
}

/// Layer 3 devices (tun, wireguard, ppp) hand out bare IP packets even through
/// an Ethernet channel. They have no hardware address or are point-to-point.
fn carries_ethernet(intf: &NetworkInterface) -> bool {
    intf.mac.is_some() && !intf.is_point_to_point()
}

fn channel_config(settings: &CaptureSettings) -> Config {
    Config {
        read_buffer_size: settings.snapshot_len,
        read_timeout: Some(settings.read_timeout),
        promiscuous: settings.promiscuous,
        ..Default::default()
    }
}

fn open_eth_channel<F>(
    intf: &NetworkInterface,
    cfg: &Config,
    channel_opener: F,
) -> io::Result<Box<dyn DataLinkReceiver>>
where
    F: FnOnce(&NetworkInterface, Config) -> io::Result<Channel>,
{
    match channel_opener(intf, *cfg)? {
        Channel::Ethernet(_tx, rx) => Ok(rx),
        _ => Err(io::Error::new(
            ErrorKind::Unsupported,
            format!("non-ethernet channel for {}", intf.name),
        )),
    }
}

fn spawn_reader(
    mut rx: Box<dyn DataLinkReceiver>,
    queue_tx: UnboundedSender<Vec<u8>>,
    snapshot_len: usize,
    ethernet_framed: bool,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while !queue_tx.is_closed() {
            match rx.next() {
                Ok(_) if !ethernet_framed => continue,
                Ok(frame) => {
                    let kept = &frame[..frame.len().min(snapshot_len)];
                    if queue_tx.send(kept.to_vec()).is_err() {
                        break;
                    }
                }
                Err(e) if is_poll_timeout(&e) => continue,
                Err(e) => {
                    warn!("Capture read failed: {e}");
                    break;
                }
            }
        }
        debug!("Capture reader stopped");
    })
}

fn is_poll_timeout(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
    )
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
