// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Presentation format of records and messages.
//!
//! Records render as tab separated `name ttl class type rdata` lines; messages render similar to `dig` output.

use std::fmt::Write;

use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{MX, SOA, TXT};
use hickory_proto::rr::{RData, Record};

/// Renders a single resource record, e.g. `example.com.\t3600\tIN\tMX\t10 mail.example.com.`.
pub fn render_record(record: &Record) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        record.name(),
        record.ttl(),
        record.dns_class(),
        record.record_type(),
        render_rdata(record.data())
    )
}

pub fn render_rdata(rdata: &RData) -> String {
    match rdata {
        RData::MX(mx) => render_mx(mx),
        RData::SOA(soa) => render_soa(soa),
        RData::TXT(txt) => render_txt(txt),
        other => other.to_string(),
    }
}

fn render_mx(mx: &MX) -> String {
    format!("{} {}", mx.preference(), mx.exchange())
}

fn render_soa(soa: &SOA) -> String {
    format!(
        "{} {} {} {} {} {} {}",
        soa.mname(),
        soa.rname(),
        soa.serial(),
        soa.refresh(),
        soa.retry(),
        soa.expire(),
        soa.minimum()
    )
}

fn render_txt(txt: &TXT) -> String {
    txt.iter()
        .map(|s| render_character_string(s))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quotes a character-string; bytes outside printable ASCII are escaped as `\DDD`.
fn render_character_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        match b {
            b'"' => out.push_str("\\\""),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(b as char),
            _ => {
                let _ = write!(out, "\\{:03}", b);
            }
        }
    }
    out.push('"');
    out
}

/// Renders the complete message: header, flags and all non-empty sections.
pub fn render_message(message: &Message) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        ";; opcode: {}, status: {}, id: {}",
        op_code_name(message.op_code()),
        response_code_name(message.response_code()),
        message.id()
    );
    let _ = writeln!(
        out,
        ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
        flags(message).join(" "),
        message.queries().len(),
        message.answers().len(),
        message.name_servers().len(),
        message.additionals().len()
    );

    if !message.queries().is_empty() {
        out.push_str("\n;; QUESTION SECTION:\n");
        for query in message.queries() {
            let _ = writeln!(out, ";{}\t{}\t{}", query.name(), query.query_class(), query.query_type());
        }
    }
    render_section(&mut out, "ANSWER", message.answers());
    render_section(&mut out, "AUTHORITY", message.name_servers());
    render_section(&mut out, "ADDITIONAL", message.additionals());

    out
}

fn render_section(out: &mut String, title: &str, records: &[Record]) {
    if records.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n;; {} SECTION:", title);
    for record in records {
        out.push_str(&render_record(record));
        out.push('\n');
    }
}

fn flags(message: &Message) -> Vec<&'static str> {
    let mut flags = Vec::new();
    if message.message_type() == MessageType::Response {
        flags.push("qr");
    }
    if message.authoritative() {
        flags.push("aa");
    }
    if message.truncated() {
        flags.push("tc");
    }
    if message.recursion_desired() {
        flags.push("rd");
    }
    if message.recursion_available() {
        flags.push("ra");
    }
    if message.authentic_data() {
        flags.push("ad");
    }
    if message.checking_disabled() {
        flags.push("cd");
    }
    flags
}

fn op_code_name(op_code: OpCode) -> String {
    match op_code {
        OpCode::Query => "QUERY".to_string(),
        OpCode::Status => "STATUS".to_string(),
        OpCode::Notify => "NOTIFY".to_string(),
        OpCode::Update => "UPDATE".to_string(),
        other => format!("OPCODE{}", u8::from(other)),
    }
}

fn response_code_name(response_code: ResponseCode) -> String {
    match response_code {
        ResponseCode::NoError => "NOERROR".to_string(),
        ResponseCode::FormErr => "FORMERR".to_string(),
        ResponseCode::ServFail => "SERVFAIL".to_string(),
        ResponseCode::NXDomain => "NXDOMAIN".to_string(),
        ResponseCode::NotImp => "NOTIMP".to_string(),
        ResponseCode::Refused => "REFUSED".to_string(),
        other => format!("RCODE{}", u16::from(other)),
    }
}
