// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Loading of resolver endpoints and options from `/etc/resolv.conf`.

use std::fs::File;
use std::io::Read;
use std::net::SocketAddr;
use std::path::Path;

use resolv_conf::{Config, ScopedIp};

use crate::transport::endpoint::DEFAULT_PORT;
use crate::{Error, Result};

static RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

pub fn load_from_system_config<T: From<Config>>() -> Result<T> {
    load_from_system_config_path(RESOLV_CONF_PATH)
}

pub fn load_from_system_config_path<T: From<Config>, P: AsRef<Path>>(path: P) -> Result<T> {
    let cfg = load_config(path)?;
    Ok(cfg.into())
}

pub fn load_endpoints_from_system_config() -> Result<Vec<String>> {
    load_endpoints_from_system_config_path(RESOLV_CONF_PATH)
}

/// Returns the nameservers as `ip:53` endpoints.
pub fn load_endpoints_from_system_config_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let cfg = load_config(path)?;
    let endpoints: Vec<_> = cfg.nameservers.iter().map(endpoint_from_scoped_ip).collect();
    if endpoints.is_empty() {
        return Err(Error::EmptyResolverPool);
    }

    Ok(endpoints)
}

fn endpoint_from_scoped_ip(ip: &ScopedIp) -> String {
    match ip {
        ScopedIp::V4(ipv4) => SocketAddr::from((*ipv4, DEFAULT_PORT)).to_string(),
        ScopedIp::V6(ipv6, _) => SocketAddr::from((*ipv6, DEFAULT_PORT)).to_string(),
    }
}

fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let mut buf = Vec::with_capacity(4096);
    let mut f = File::open(path)?;
    f.read_to_end(&mut buf)?;
    resolv_conf::Config::parse(&buf).map_err(|e| Error::ParserError {
        what: "resolv.conf".to_string(),
        to: "Config",
        why: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    use spectral::prelude::*;

    use super::*;
    use crate::ClientOpts;

    fn write_resolv_conf(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dnsify-{}-{}.conf", name, std::process::id()));
        let mut f = File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_endpoints() {
        let path = write_resolv_conf(
            "endpoints",
            "nameserver 192.0.2.53\nnameserver 2001:db8::53\noptions attempts:4 timeout:2\n",
        );

        let endpoints = load_endpoints_from_system_config_path(&path);

        assert_that(&endpoints)
            .is_ok()
            .is_equal_to(vec!["192.0.2.53:53".to_string(), "[2001:db8::53]:53".to_string()]);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn load_opts() {
        let path = write_resolv_conf("opts", "nameserver 192.0.2.53\noptions attempts:4 timeout:2\n");

        let opts: Result<ClientOpts> = load_from_system_config_path(&path);

        let opts = opts.unwrap();
        assert_that(&opts.max_retries).is_equal_to(4);
        assert_that(&opts.timeout).is_equal_to(Duration::from_secs(2));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn no_nameservers() {
        let path = write_resolv_conf("empty", "search example.com\n");

        let endpoints = load_endpoints_from_system_config_path(&path);

        assert_that(&matches!(endpoints, Err(Error::EmptyResolverPool))).is_true();
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file() {
        let endpoints = load_endpoints_from_system_config_path("/nonexistent/resolv.conf");

        assert_that(&matches!(endpoints, Err(Error::IoError { .. }))).is_true();
    }
}
