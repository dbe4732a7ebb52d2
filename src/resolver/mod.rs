// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::path::Path;
use std::time::Duration;

use hickory_proto::op::{Message, ResponseCode};
use tracing::debug;

pub use pool::ResolverPool;
pub use resolution::{RawResolution, Resolution};

use crate::error::Error;
use crate::resources::render_message;
use crate::system_config;
use crate::transport::{NetTransport, Protocol, Transport};
use crate::{RecordType, Result};

pub mod extract;
pub mod pool;
pub mod query;
pub mod resolution;

#[derive(Debug, Clone)]
pub struct ClientOpts {
    /// Total number of attempts per call, not the number of retries after the first attempt
    pub max_retries: usize,
    /// Time limit of a single attempt
    pub timeout: Duration,
    pub protocol: Protocol,
}

impl ClientOpts {
    /// Creates `ClientOpts` from local system configuration.
    ///
    /// Unix: Parses `/etc/resolv.conf`.
    pub fn from_system_config() -> Result<ClientOpts> {
        let opts = system_config::load_from_system_config()?;
        Ok(opts)
    }

    pub fn from_system_config_path<P: AsRef<Path>>(path: P) -> Result<ClientOpts> {
        let opts = system_config::load_from_system_config_path(path)?;
        Ok(opts)
    }
}

impl Default for ClientOpts {
    fn default() -> Self {
        ClientOpts {
            max_retries: 3,
            timeout: Duration::from_secs(5),
            protocol: Protocol::Udp,
        }
    }
}

#[doc(hidden)]
impl From<resolv_conf::Config> for ClientOpts {
    fn from(config: resolv_conf::Config) -> Self {
        ClientOpts {
            max_retries: config.attempts as usize,
            timeout: Duration::from_secs(config.timeout as u64),
            ..Default::default()
        }
    }
}

/// DNS client sending every attempt to a randomly picked resolver endpoint.
///
/// A `Client` may be shared between tasks and threads, e.g. in an `Arc`. Concurrent calls only synchronize while
/// picking an endpoint, never during network I/O.
#[derive(Debug)]
pub struct Client<T = NetTransport> {
    pool: ResolverPool,
    max_retries: usize,
    transport: T,
}

impl Client<NetTransport> {
    /// Creates a client using UDP and the default timeout.
    ///
    /// Fails with `Error::EmptyResolverPool` if `endpoints` is empty.
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(endpoints: I, max_retries: usize) -> Result<Self> {
        let opts = ClientOpts {
            max_retries,
            ..Default::default()
        };
        Client::with_opts(endpoints, opts)
    }

    pub fn with_opts<S: Into<String>, I: IntoIterator<Item = S>>(endpoints: I, opts: ClientOpts) -> Result<Self> {
        let transport = NetTransport::new(opts.protocol, opts.timeout);
        Client::with_transport(ResolverPool::new(endpoints)?, opts.max_retries, transport)
    }

    /// Creates a client from the nameservers and options of the local system configuration.
    ///
    /// Unix: Parses `/etc/resolv.conf`.
    pub fn from_system_config() -> Result<Self> {
        let endpoints = system_config::load_endpoints_from_system_config()?;
        let opts = ClientOpts::from_system_config()?;
        Client::with_opts(endpoints, opts)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(pool: ResolverPool, max_retries: usize, transport: T) -> Result<Self> {
        if pool.is_empty() {
            return Err(Error::EmptyResolverPool);
        }

        Ok(Client {
            pool,
            max_retries,
            transport,
        })
    }

    /// Resolves the A records of `host`.
    ///
    /// Only responses with response code `NOERROR` count as success.
    pub async fn resolve(&self, host: &str) -> Result<Resolution> {
        let query = query::build(host, RecordType::A)?;
        let response = self.exchange_with_retries(&query, is_success).await?;

        Ok(extract::a_records(&response))
    }

    /// Resolves records of `record_type` for `host` and returns their presentation together with the complete
    /// presentation of the response.
    ///
    /// Only responses with response code `NOERROR` count as success.
    pub async fn resolve_raw(&self, host: &str, record_type: RecordType) -> Result<RawResolution> {
        let query = query::build(host, record_type)?;
        let response = self.exchange_with_retries(&query, is_success).await?;

        Ok(RawResolution {
            records: extract::extract(&response, record_type),
            raw: render_message(&response),
        })
    }

    /// Sends `message` as is and returns the first response received.
    ///
    /// In contrast to [`Client::resolve`] and [`Client::resolve_raw`], the response code is not checked: a `SERVFAIL`
    /// or `NXDOMAIN` response is returned as well.
    pub async fn send(&self, message: &Message) -> Result<Message> {
        self.exchange_with_retries(message, |_| true).await
    }

    async fn exchange_with_retries<F: Fn(&Message) -> bool>(&self, query: &Message, accept: F) -> Result<Message> {
        for attempt in 1..=self.max_retries {
            let endpoint = self.pool.pick()?;
            match self.transport.exchange(query, endpoint).await {
                Ok(response) if accept(&response) => {
                    debug!(
                        "Received response for query {} from '{}' in attempt {}.",
                        query.id(),
                        endpoint,
                        attempt
                    );
                    return Ok(response);
                }
                Ok(response) => debug!(
                    "Rejected response with code {} for query {} from '{}' in attempt {}.",
                    response.response_code(),
                    query.id(),
                    endpoint,
                    attempt
                ),
                Err(err) => debug!(
                    "Exchange of query {} with '{}' failed in attempt {}: {}.",
                    query.id(),
                    endpoint,
                    attempt,
                    err
                ),
            }
        }

        Err(Error::ResolutionExhausted {
            attempts: self.max_retries,
        })
    }

    pub fn pool(&self) -> &ResolverPool {
        &self.pool
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}

fn is_success(response: &Message) -> bool {
    response.response_code() == ResponseCode::NoError
}
