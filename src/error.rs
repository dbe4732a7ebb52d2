// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use thiserror::Error;

#[derive(Debug, Error)]
/// Main Error type of this crate.
///
/// Must be `Send` because it is returned by async functions which might run on different threads.
pub enum Error {
    #[error("no resolver endpoints configured")]
    EmptyResolverPool,
    #[error("failed to resolve after {attempts} attempts")]
    ResolutionExhausted { attempts: usize },
    #[error("invalid domain name '{name}' because {why}")]
    InvalidName { name: String, why: String },
    #[error("failed to parse '{what}' to {to} because {why}")]
    ParserError {
        what: String,
        to: &'static str,
        why: String,
    },
    #[error("failed to execute IO operation")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
