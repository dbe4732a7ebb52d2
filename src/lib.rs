// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! A DNS resolution client.
//!
//! A [`Client`] holds a pool of upstream resolver endpoints. Every lookup builds a single query and sends it to a
//! randomly chosen endpoint; if the exchange fails, another endpoint is drawn until the configured number of attempts
//! is used up.
//!
//! # Example
//! ```no_run
//! # use dnsify::Client;
//! # #[tokio::main]
//! # async fn main() -> dnsify::Result<()> {
//! let client = Client::new(["1.1.1.1:53", "8.8.8.8"], 3)?;
//! let resolution = client.resolve("example.com").await?;
//! println!("{:?} (ttl {})", resolution.ips, resolution.ttl);
//! # Ok(())
//! # }
//! ```

pub use error::Error;
pub use resolver::{Client, ClientOpts, RawResolution, Resolution, ResolverPool};
pub use resources::RecordType;
pub use transport::{NetTransport, Protocol, Transport};

pub use hickory_proto::op::Message;

#[cfg(feature = "app-cli")]
pub mod app;
pub mod error;
pub mod resolver;
pub mod resources;
pub mod system_config;
pub mod transport;
mod utils;

pub type Result<T> = std::result::Result<T, Error>;
