use crate::models::Host;

use {
    anyhow::{format_err, Context},
    std::net::{IpAddr, SocketAddr},
    tracing::debug,
    trust_dns_resolver::TokioAsyncResolver,
};

/// Turns a query target into a socket address. Literal IPs skip the resolver.
pub async fn resolve_host(host: Host) -> anyhow::Result<SocketAddr> {
    let stringaddr = match host {
        Host::A(addr) => return Ok(addr),
        Host::S(stringaddr) => stringaddr,
    };

    if let Ok(ip) = stringaddr.host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, stringaddr.port));
    }

    let resolver = TokioAsyncResolver::tokio_from_system_conf()
        .context("Failed to load system resolver configuration")?;
    let ip = resolver
        .lookup_ip(stringaddr.host.as_str())
        .await
        .with_context(|| format!("Failed to resolve host {}", &stringaddr.host))?
        .iter()
        .next()
        .ok_or_else(|| format_err!("No addresses found for host {}", &stringaddr.host))?;
    debug!("Resolved {} to {}", stringaddr.host, ip);

    Ok(SocketAddr::new(ip, stringaddr.port))
}
