//! This module handles the startup output of the server.
use std::net::{IpAddr, UdpSocket};
use tracing_subscriber::EnvFilter;

/// Diagnostics filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Shown in the banner when the host address cannot be determined.
const ADDRESS_PLACEHOLDER: &str = "<your-computer-ip>";

/// Configures diagnostic logging.
///
/// Diagnostics go to stderr and stay quiet by default so that stdout only
/// carries the received log lines.
pub fn configure_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Prints a banner with startup information.
pub fn print_start_banner(port: u16) {
    for line in banner_lines(port, lan_address()) {
        println!("{}", line);
    }
}

fn banner_lines(port: u16, host: Option<IpAddr>) -> Vec<String> {
    let host = host.map_or_else(|| ADDRESS_PLACEHOLDER.to_string(), |ip| ip.to_string());
    vec![
        format!("🚀 Debug server starting on port {}", port),
        format!(
            "📱 Configure your app to send logs to: http://{}:{}/debug",
            host, port
        ),
        "🔍 Waiting for debug logs from your phone...".to_string(),
        "Press Ctrl+C to stop".to_string(),
    ]
}

/// Finds the address other machines on the LAN can reach this host at.
///
/// Connecting a UDP socket only performs a route lookup; nothing is sent.
fn lan_address() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    socket
        .local_addr()
        .ok()
        .map(|addr| addr.ip())
        .filter(|ip| !ip.is_unspecified() && !ip.is_loopback())
}
