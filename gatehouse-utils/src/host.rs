//! Host/origin helpers
//!
//! Picks the scheme for origins built from a host string, e.g. the
//! static base URL shortcut cards point at.

use std::net::IpAddr;

/// Strip a trailing `:port` (and IPv6 brackets) from a host string
fn host_without_port(host: &str) -> &str {
    // "[::1]:8080" or "[::1]"
    if let Some(rest) = host.strip_prefix('[') {
        if let Some((inner, _)) = rest.split_once(']') {
            return inner;
        }
    }

    // Only strip a port when the remainder has no colon itself, so bare
    // IPv6 literals keep theirs
    match host.rsplit_once(':') {
        Some((h, p)) if !h.contains(':') && !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()) => {
            h
        }
        _ => host,
    }
}

/// Check whether a host (optionally with port) is an IP address
pub fn is_ip_address(host: &str) -> bool {
    host_without_port(host).parse::<IpAddr>().is_ok()
}

/// Build an origin URL from a host
///
/// Hosts without a dot ("localhost:14000") and raw IP addresses get
/// `http://`; everything else is assumed publicly named and gets
/// `https://`.
pub fn origin_from_host(host: &str) -> String {
    let protocol = if !host.contains('.') || is_ip_address(host) {
        "http://"
    } else {
        "https://"
    };

    format!("{}{}", protocol, host)
}
