// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Exchange of DNS messages with a single resolver endpoint.
//!
//! The [`Transport`] trait is the seam between the retry logic of [`crate::Client`] and the network. [`NetTransport`]
//! is the default implementation sending queries over UDP or TCP.

use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::time::Duration;

use hickory_proto::op::Message;
use serde::Serialize;
use tracing::trace;

pub use error::Error;

pub mod endpoint;
pub mod error;
pub mod tcp;
pub mod udp;

pub type TransportResult<T> = std::result::Result<T, Error>;

/// Maximum size of a DNS message received via UDP (with some headroom for EDNS).
pub const MAX_UDP_PACKET_SIZE: usize = 4096;

/// Sends a query to a resolver endpoint and waits for the response.
pub trait Transport: Send + Sync {
    /// `endpoint` is in `host:port` form; the port may be omitted.
    fn exchange(&self, query: &Message, endpoint: &str) -> impl Future<Output = TransportResult<Message>> + Send;
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
pub enum Protocol {
    Udp,
    Tcp,
}

impl FromStr for Protocol {
    type Err = crate::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "udp" => Ok(Protocol::Udp),
            "tcp" => Ok(Protocol::Tcp),
            _ => Err(crate::Error::ParserError {
                what: s.to_string(),
                to: "Protocol",
                why: "invalid protocol".to_string(),
            }),
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Protocol::Udp => f.write_str("udp"),
            Protocol::Tcp => f.write_str("tcp"),
        }
    }
}

/// Network transport using a fresh socket per exchange.
#[derive(Debug, Clone)]
pub struct NetTransport {
    protocol: Protocol,
    timeout: Duration,
}

impl NetTransport {
    pub fn new(protocol: Protocol, timeout: Duration) -> Self {
        NetTransport { protocol, timeout }
    }

    pub fn udp(timeout: Duration) -> Self {
        NetTransport::new(Protocol::Udp, timeout)
    }

    pub fn tcp(timeout: Duration) -> Self {
        NetTransport::new(Protocol::Tcp, timeout)
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Transport for NetTransport {
    async fn exchange(&self, query: &Message, endpoint: &str) -> TransportResult<Message> {
        let exchange = async {
            let addr = crate::transport::endpoint::resolve(endpoint).await?;
            trace!("Sending query {} via {} to {}.", query.id(), self.protocol, addr);
            match self.protocol {
                Protocol::Udp => udp::exchange(query, addr).await,
                Protocol::Tcp => tcp::exchange(query, addr).await,
            }
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| Error::Timeout)?
    }
}
