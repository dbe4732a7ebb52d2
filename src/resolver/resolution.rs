// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use serde::Serialize;

/// Result of an A record resolution.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// IPv4 addresses in answer section order
    pub ips: Vec<String>,
    /// TTL in seconds of the last A record in the answer section
    pub ttl: u32,
}

/// Result of a resolution for an arbitrary record type.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RawResolution {
    pub records: Vec<String>,
    /// Complete presentation of the response, cf. [`crate::resources::render_message`]
    pub raw: String,
}
