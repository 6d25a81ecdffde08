//! Network reachability query.
//!
//! Reads cached link state only. Never opens a connection or sends a packet,
//! so it is safe to call on the UI thread during startup.

#[cfg(target_os = "linux")]
use std::io;
use std::net::UdpSocket;
#[cfg(target_os = "linux")]
use std::path::Path;

use connexx_common::PlatformError;
use tracing::{debug, warn};

/// Answers "is any network interface up and connected right now?".
pub trait ConnectivityProbe {
    fn is_network_available(&self) -> bool;
}

/// Connectivity as reported by the operating system.
///
/// On Linux the interface table under `/sys/class/net` is scanned. Elsewhere
/// the routing table is consulted by pointing a UDP socket at a
/// documentation-range address, which fails immediately when no route exists.
/// When the state cannot be determined at all the network is assumed
/// available; the remote application's own error handling takes over.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemConnectivity;

impl ConnectivityProbe for SystemConnectivity {
    fn is_network_available(&self) -> bool {
        match query_link_state() {
            Ok(available) => {
                debug!(available, "connectivity query");
                available
            }
            Err(e) => {
                warn!(error = %e, "connectivity query failed; assuming network is available");
                true
            }
        }
    }
}

#[cfg(target_os = "linux")]
fn query_link_state() -> Result<bool, PlatformError> {
    match scan_interfaces(Path::new("/sys/class/net")) {
        Ok(true) => Ok(true),
        // Containers and some VPN setups hide real interfaces; ask the routing table too.
        Ok(false) | Err(_) => has_default_route(),
    }
}

#[cfg(not(target_os = "linux"))]
fn query_link_state() -> Result<bool, PlatformError> {
    has_default_route()
}

/// Scan a sysfs-style interface directory for a non-loopback interface
/// that is up, or whose state is unknown but reports carrier.
#[cfg(target_os = "linux")]
fn scan_interfaces(root: &Path) -> io::Result<bool> {
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_name() == "lo" {
            continue;
        }
        let dir = entry.path();
        let operstate = read_trimmed(&dir.join("operstate"));
        match operstate.as_deref() {
            Some("up") => return Ok(true),
            Some("unknown") if read_trimmed(&dir.join("carrier")).as_deref() == Some("1") => {
                return Ok(true)
            }
            _ => {}
        }
    }
    Ok(false)
}

#[cfg(target_os = "linux")]
fn read_trimmed(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .map(|s| s.trim().to_string())
}

/// `connect` on a UDP socket only performs a route lookup; nothing is sent.
/// A failed lookup means no interface can reach the address.
fn has_default_route() -> Result<bool, PlatformError> {
    let socket = UdpSocket::bind(("0.0.0.0", 0))
        .map_err(|e| PlatformError::Connectivity(format!("failed to bind probe socket: {e}")))?;
    Ok(socket.connect(("192.0.2.1", 9)).is_ok())
}
