// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! TCP exchange.
//!
//! DNS messages over TCP are prefixed with a 2-byte big-endian length.

use std::net::SocketAddr;

use hickory_proto::op::Message;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::trace;

use super::{Error, TransportResult};

pub async fn exchange(query: &Message, addr: SocketAddr) -> TransportResult<Message> {
    let request = query.to_vec()?;
    let len = u16::try_from(request.len()).map_err(|_| Error::MessageTooLarge { size: request.len() })?;

    let mut stream = TcpStream::connect(addr).await?;
    stream.write_all(&len.to_be_bytes()).await?;
    stream.write_all(&request).await?;
    stream.flush().await?;
    trace!("Sent {} bytes to {}.", request.len(), addr);

    let len = stream.read_u16().await? as usize;
    let mut buf = vec![0u8; len];
    stream.read_exact(&mut buf).await?;
    trace!("Received {} bytes from {}.", len, addr);

    let response = Message::from_vec(&buf)?;

    Ok(response)
}
