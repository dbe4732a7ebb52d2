// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::env;

use anyhow::Result;
use tracing::debug;

use dnsify::app::cli_parser::create_parser;
use dnsify::app::logging::Logging;
use dnsify::app::{self, ExitStatus};

#[tokio::main]
async fn main() -> Result<()> {
    let args = match create_parser().try_get_matches() {
        Ok(args) => args,
        Err(err) => {
            // Prints help and version as well; those are no failures
            let failed = err.use_stderr();
            err.print()?;
            std::process::exit(if failed { ExitStatus::CliParsingFailed as i32 } else { ExitStatus::Ok as i32 });
        }
    };

    Logging::new(args.get_count("verbose"), env::var_os("RUST_LOG")).start()?;
    debug!("Parsed args and set up logging.");

    let exit_status = app::run(args).await?;
    std::process::exit(exit_status as i32)
}
