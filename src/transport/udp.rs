// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! UDP exchange.
//!
//! Every exchange binds its own ephemeral socket and connects it to the endpoint, so the kernel drops datagrams from
//! other sources. Datagrams that do not carry the query's id are skipped.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};

use hickory_proto::op::Message;
use tokio::net::UdpSocket;
use tracing::trace;

use super::{TransportResult, MAX_UDP_PACKET_SIZE};

pub async fn exchange(query: &Message, addr: SocketAddr) -> TransportResult<Message> {
    let local: SocketAddr = if addr.is_ipv4() {
        (Ipv4Addr::UNSPECIFIED, 0).into()
    } else {
        (Ipv6Addr::UNSPECIFIED, 0).into()
    };
    let socket = UdpSocket::bind(local).await?;
    socket.connect(addr).await?;

    let request = query.to_vec()?;
    socket.send(&request).await?;
    trace!("Sent {} bytes to {}.", request.len(), addr);

    let mut buf = vec![0u8; MAX_UDP_PACKET_SIZE];
    loop {
        let len = socket.recv(&mut buf).await?;
        let response = Message::from_vec(&buf[..len])?;
        if response.id() != query.id() {
            trace!(
                "Ignoring response with id {} from {} while waiting for {}.",
                response.id(),
                addr,
                query.id()
            );
            continue;
        }
        trace!("Received {} bytes from {}.", len, addr);

        return Ok(response);
    }
}
