// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use clap::{value_parser, Arg, ArgAction, Command};

pub static SUPPORTED_RECORD_TYPES: &[&str] = &["A", "AAAA", "CNAME", "MX", "NS", "PTR", "SOA", "TXT"];

pub fn create_parser() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::new("nameservers")
                .short('s')
                .long("nameserver")
                .value_name("HOSTNAME | IP ADDR [:PORT]")
                .action(ArgAction::Append)
                .value_delimiter(',')
                .help("Adds nameserver to the pool; if none is given, the nameservers of /etc/resolv.conf are used"),
        )
        .arg(
            Arg::new("resolv-conf")
                .long("resolv-conf")
                .value_name("FILE")
                .help("Uses alternative resolv.conf file"),
        )
        .arg(
            Arg::new("retries")
                .short('r')
                .long("retries")
                .value_name("NUMBER")
                .value_parser(value_parser!(usize))
                .help("Sets the total number of attempts [default: 3 or attempts of resolv.conf]"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .value_parser(value_parser!(u64))
                .help("Sets the timeout of a single attempt [default: 5 or timeout of resolv.conf]"),
        )
        .arg(
            Arg::new("record-type")
                .short('t')
                .long("record-type")
                .value_name("RECORD TYPE")
                .default_value("A")
                .ignore_case(true)
                .value_parser(SUPPORTED_RECORD_TYPES.to_vec())
                .help("Sets record type to lookup"),
        )
        .arg(
            Arg::new("tcp")
                .long("tcp")
                .action(ArgAction::SetTrue)
                .help("Sends queries via TCP instead of UDP"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Prints result as JSON"),
        )
        .arg(
            Arg::new("domain name")
                .required(true)
                .index(1)
                .value_name("DOMAIN NAME")
                .help("domain name to resolve"),
        )
}
