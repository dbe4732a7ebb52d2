// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_proto::ProtoError;
use thiserror::Error;

/// Failure of a single exchange with one endpoint.
#[derive(Debug, Error)]
pub enum Error {
    #[error("request timed out")]
    Timeout,
    #[error("failed to resolve endpoint '{endpoint}'")]
    UnresolvableEndpoint { endpoint: String },
    #[error("message of {size} bytes exceeds maximum size")]
    MessageTooLarge { size: usize },
    #[error("protocol error: {reason}")]
    ProtoError { reason: String },
    #[error("IO error")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl From<ProtoError> for Error {
    fn from(error: ProtoError) -> Self {
        Error::ProtoError {
            reason: error.to_string(),
        }
    }
}
