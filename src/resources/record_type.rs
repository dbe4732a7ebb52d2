// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{Error, Result};

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize)]
pub enum RecordType {
    A,
    AAAA,
    ANY,
    CAA,
    CNAME,
    MX,
    NS,
    PTR,
    SOA,
    SRV,
    TXT,
    Unknown(u16),
}

impl From<RecordType> for hickory_proto::rr::RecordType {
    fn from(rt: RecordType) -> Self {
        use hickory_proto::rr::RecordType as Hrt;

        match rt {
            RecordType::A => Hrt::A,
            RecordType::AAAA => Hrt::AAAA,
            RecordType::ANY => Hrt::ANY,
            RecordType::CAA => Hrt::CAA,
            RecordType::CNAME => Hrt::CNAME,
            RecordType::MX => Hrt::MX,
            RecordType::NS => Hrt::NS,
            RecordType::PTR => Hrt::PTR,
            RecordType::SOA => Hrt::SOA,
            RecordType::SRV => Hrt::SRV,
            RecordType::TXT => Hrt::TXT,
            RecordType::Unknown(value) => Hrt::from(value),
        }
    }
}

impl From<hickory_proto::rr::RecordType> for RecordType {
    fn from(rt: hickory_proto::rr::RecordType) -> Self {
        use hickory_proto::rr::RecordType as Hrt;

        match rt {
            Hrt::A => RecordType::A,
            Hrt::AAAA => RecordType::AAAA,
            Hrt::ANY => RecordType::ANY,
            Hrt::CAA => RecordType::CAA,
            Hrt::CNAME => RecordType::CNAME,
            Hrt::MX => RecordType::MX,
            Hrt::NS => RecordType::NS,
            Hrt::PTR => RecordType::PTR,
            Hrt::SOA => RecordType::SOA,
            Hrt::SRV => RecordType::SRV,
            Hrt::TXT => RecordType::TXT,
            other => RecordType::Unknown(u16::from(other)),
        }
    }
}

impl FromStr for RecordType {
    type Err = Error;

    fn from_str(str: &str) -> Result<Self> {
        match str.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "ANY" | "*" => Ok(RecordType::ANY),
            "CAA" => Ok(RecordType::CAA),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            "NS" => Ok(RecordType::NS),
            "PTR" => Ok(RecordType::PTR),
            "SOA" => Ok(RecordType::SOA),
            "SRV" => Ok(RecordType::SRV),
            "TXT" => Ok(RecordType::TXT),
            other => hickory_proto::rr::RecordType::from_str(other)
                .map(RecordType::from)
                .map_err(|e| Error::ParserError {
                    what: str.to_string(),
                    to: "RecordType",
                    why: e.to_string(),
                }),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordType::Unknown(value) => fmt::Display::fmt(&hickory_proto::rr::RecordType::from(*value), f),
            rt => fmt::Debug::fmt(rt, f),
        }
    }
}
