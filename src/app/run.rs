// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io::{self, Write};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use tracing::{debug, info};

use crate::app::ExitStatus;
use crate::system_config;
use crate::{Client, ClientOpts, Protocol, RecordType};

pub async fn run(args: ArgMatches) -> Result<ExitStatus> {
    let domain_name = args
        .get_one::<String>("domain name")
        .context("No domain name to resolve specified")?;
    let record_type = args
        .get_one::<String>("record-type")
        .map(|s| RecordType::from_str(s))
        .transpose()
        .context("Failed to parse record type")?
        .unwrap_or(RecordType::A);

    let client = create_client(&args)?;
    info!(
        "Resolving {} {} with {} resolvers and {} attempts.",
        domain_name,
        record_type,
        client.pool().len(),
        client.max_retries()
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let json = args.get_flag("json");

    let res = if record_type == RecordType::A {
        client.resolve(domain_name).await.map(|resolution| {
            if json {
                serde_json::to_string_pretty(&resolution).map(|s| vec![s])
            } else {
                let mut lines: Vec<_> = resolution.ips.clone();
                lines.push(format!(";; TTL: {}", resolution.ttl));
                Ok(lines)
            }
        })
    } else {
        client.resolve_raw(domain_name, record_type).await.map(|resolution| {
            if json {
                serde_json::to_string_pretty(&resolution).map(|s| vec![s])
            } else {
                Ok(resolution.records)
            }
        })
    };

    match res {
        Ok(lines) => {
            for line in lines.context("Failed to serialize result")? {
                writeln!(handle, "{}", line).context("Failed to write to stdout")?;
            }
            Ok(ExitStatus::Ok)
        }
        Err(err) => {
            writeln!(io::stderr(), "Failed to resolve {}: {}", domain_name, err).context("Failed to write to stderr")?;
            Ok(ExitStatus::Failed)
        }
    }
}

fn create_client(args: &ArgMatches) -> Result<Client> {
    let resolv_conf = args.get_one::<String>("resolv-conf");
    let nameservers: Vec<String> = args
        .get_many::<String>("nameservers")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let mut opts = match resolv_conf {
        Some(path) => ClientOpts::from_system_config_path(path).context("Failed to load resolver options")?,
        None if nameservers.is_empty() => {
            ClientOpts::from_system_config().context("Failed to load system resolver options")?
        }
        None => ClientOpts::default(),
    };
    if let Some(retries) = args.get_one::<usize>("retries") {
        opts.max_retries = *retries;
    }
    if let Some(timeout) = args.get_one::<u64>("timeout") {
        opts.timeout = Duration::from_secs(*timeout);
    }
    if args.get_flag("tcp") {
        opts.protocol = Protocol::Tcp;
    }
    debug!("Using resolver options {:?}.", opts);

    let endpoints = if !nameservers.is_empty() {
        nameservers
    } else if let Some(path) = resolv_conf {
        system_config::load_endpoints_from_system_config_path(path).context("Failed to load nameservers")?
    } else {
        system_config::load_endpoints_from_system_config().context("Failed to load system nameservers")?
    };
    debug!("Using {} nameservers.", endpoints.len());

    Client::with_opts(endpoints, opts).context("Failed to create client")
}
