// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Parsing and resolution of `host:port` endpoints.

use std::net::{IpAddr, SocketAddr};

use tokio::net::lookup_host;

use crate::transport::{Error, TransportResult};

pub const DEFAULT_PORT: u16 = 53;

/// Splits an endpoint into host and port.
///
/// Accepts `ip:port`, `[ipv6]:port`, bare IP addresses, `host:port`, and bare host names. The port defaults to 53.
pub fn split(endpoint: &str) -> (&str, u16) {
    if let Ok(addr) = endpoint.parse::<SocketAddr>() {
        let host = endpoint
            .rsplit_once(':')
            .map(|(host, _)| host.trim_start_matches('[').trim_end_matches(']'))
            .unwrap_or(endpoint);
        return (host, addr.port());
    }
    if endpoint.parse::<IpAddr>().is_ok() {
        return (endpoint, DEFAULT_PORT);
    }
    let trimmed = endpoint.trim_start_matches('[').trim_end_matches(']');
    if trimmed.parse::<IpAddr>().is_ok() {
        return (trimmed, DEFAULT_PORT);
    }
    match endpoint.rsplit_once(':') {
        Some((host, port)) => match port.parse::<u16>() {
            Ok(port) => (host, port),
            Err(_) => (endpoint, DEFAULT_PORT),
        },
        None => (endpoint, DEFAULT_PORT),
    }
}

/// Resolves an endpoint to a socket address; host names are resolved by the system resolver.
pub async fn resolve(endpoint: &str) -> TransportResult<SocketAddr> {
    let (host, port) = split(endpoint);
    if let Ok(ip_addr) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip_addr, port));
    }

    lookup_host((host, port))
        .await?
        .next()
        .ok_or_else(|| Error::UnresolvableEndpoint {
            endpoint: endpoint.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, Ipv6Addr};

    use spectral::prelude::*;

    use super::*;

    #[test]
    fn split_ipv4_with_port() {
        assert_that(&split("127.0.0.1:5353")).is_equal_to(("127.0.0.1", 5353));
    }

    #[test]
    fn split_ipv4_without_port() {
        assert_that(&split("1.1.1.1")).is_equal_to(("1.1.1.1", 53));
    }

    #[test]
    fn split_ipv6() {
        assert_that(&split("[2001:db8::1]:5353")).is_equal_to(("2001:db8::1", 5353));
        assert_that(&split("2001:db8::1")).is_equal_to(("2001:db8::1", 53));
        assert_that(&split("[::1]")).is_equal_to(("::1", 53));
    }

    #[test]
    fn split_host_name() {
        assert_that(&split("dns.example.com:853")).is_equal_to(("dns.example.com", 853));
        assert_that(&split("dns.example.com")).is_equal_to(("dns.example.com", 53));
    }

    #[tokio::test]
    async fn resolve_ip_endpoints() {
        assert_that(&resolve("127.0.0.1:5353").await)
            .is_ok()
            .is_equal_to(SocketAddr::from((Ipv4Addr::LOCALHOST, 5353)));
        assert_that(&resolve("::1").await)
            .is_ok()
            .is_equal_to(SocketAddr::from((Ipv6Addr::LOCALHOST, 53)));
    }

    #[tokio::test]
    async fn resolve_localhost() {
        let addr = resolve("localhost:5353").await;

        assert_that(&addr).is_ok().matches(|addr| addr.ip().is_loopback() && addr.port() == 5353);
    }
}
