// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Extraction of typed records from the answer section of a response.

use hickory_proto::op::Message;
use hickory_proto::rr::{RData, Record};

use crate::resolver::Resolution;
use crate::resources::render_record;
use crate::RecordType;

type Extractor = fn(&Record) -> Option<String>;

fn extractor(record_type: RecordType) -> Option<Extractor> {
    // `Unknown(1)` is sent as A, so it has to be extracted as A as well
    let record_type = RecordType::from(hickory_proto::rr::RecordType::from(record_type));
    let extractor: Extractor = match record_type {
        RecordType::A => |r: &Record| match r.data() {
            RData::A(a) => Some(a.0.to_string()),
            _ => None,
        },
        RecordType::AAAA => |r: &Record| match r.data() {
            RData::AAAA(aaaa) => Some(aaaa.0.to_string()),
            _ => None,
        },
        RecordType::NS => |r: &Record| match r.data() {
            RData::NS(ns) => Some(ns.0.to_string()),
            _ => None,
        },
        RecordType::CNAME => |r: &Record| match r.data() {
            RData::CNAME(cname) => Some(cname.0.to_string()),
            _ => None,
        },
        RecordType::PTR => |r: &Record| match r.data() {
            RData::PTR(ptr) => Some(ptr.0.to_string()),
            _ => None,
        },
        RecordType::SOA => |r: &Record| matches!(r.data(), RData::SOA(_)).then(|| render_record(r)),
        RecordType::MX => |r: &Record| matches!(r.data(), RData::MX(_)).then(|| render_record(r)),
        RecordType::TXT => |r: &Record| matches!(r.data(), RData::TXT(_)).then(|| render_record(r)),
        _ => return None,
    };

    Some(extractor)
}

/// Extracts all records of `record_type` from the answer section in order.
///
/// Record types without an extractor yield an empty `Vec`.
pub fn extract(answer: &Message, record_type: RecordType) -> Vec<String> {
    let Some(extractor) = extractor(record_type) else {
        return Vec::new();
    };

    answer.answers().iter().filter_map(extractor).collect()
}

/// Extracts all A records. The TTL is the one of the last A record in the answer section.
pub fn a_records(answer: &Message) -> Resolution {
    let mut resolution = Resolution::default();
    for record in answer.answers() {
        if let RData::A(a) = record.data() {
            resolution.ips.push(a.0.to_string());
            resolution.ttl = record.ttl();
        }
    }

    resolution
}
