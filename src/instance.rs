use std::net::ToSocketAddrs;

use serde::Serialize;

/// Identity of the serving instance, shown on every rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceInfo {
    pub instance: String,
    pub ip: String,
}

/// Hostname plus its resolved address. Resolution failures fall back to
/// loopback; pages still render.
pub fn lookup() -> InstanceInfo {
    let instance = hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".to_string());

    let ip = (instance.as_str(), 0)
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "127.0.0.1".to_string());

    InstanceInfo { instance, ip }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_always_yields_an_identity() {
        let info = lookup();
        assert!(!info.instance.is_empty());
        assert!(!info.ip.is_empty());
    }
}
