// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};

use crate::error::Error;
use crate::{RecordType, Result};

/// Builds a recursive query with exactly one question for `name` and `record_type`.
///
/// The name is turned into its fully qualified form and the message gets a random transaction id.
pub fn build(name: &str, record_type: RecordType) -> Result<Message> {
    let name = fqdn(name)?;
    let mut query = Query::query(name, record_type.into());
    query.set_query_class(DNSClass::IN);

    let mut message = Message::new();
    message
        .set_id(rand::random::<u16>())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(query);

    Ok(message)
}

/// ASCII names are taken verbatim, keeping case, underscores and `xn--` labels; only other names are IDNA mapped.
fn fqdn(name: &str) -> Result<Name> {
    let parsed = if name.is_ascii() {
        Name::from_ascii(name)
    } else {
        Name::from_utf8(name)
    };
    let mut fqdn = parsed.map_err(|e| Error::InvalidName {
        name: name.to_string(),
        why: e.to_string(),
    })?;
    fqdn.set_fqdn(true);

    Ok(fqdn)
}

#[cfg(test)]
mod tests {
    use spectral::prelude::*;

    use super::*;

    #[test]
    fn single_recursive_question() {
        let message = build("www.example.com", RecordType::MX).unwrap();

        assert_that(&message.message_type()).is_equal_to(MessageType::Query);
        assert_that(&message.op_code()).is_equal_to(OpCode::Query);
        assert_that(&message.recursion_desired()).is_true();
        assert_that(&message.queries().len()).is_equal_to(1);

        let question = &message.queries()[0];
        assert_that(&question.name().to_string()).is_equal_to("www.example.com.".to_string());
        assert_that(&question.query_type()).is_equal_to(hickory_proto::rr::RecordType::MX);
        assert_that(&question.query_class()).is_equal_to(DNSClass::IN);
    }

    #[test]
    fn already_qualified_name_is_kept() {
        let message = build("example.com.", RecordType::A).unwrap();

        assert_that(&message.queries()[0].name().to_string()).is_equal_to("example.com.".to_string());
    }

    #[test]
    fn underscore_labels_are_accepted() {
        let message = build("_dmarc.foo_bar.example.com", RecordType::TXT).unwrap();

        assert_that(&message.queries()[0].name().to_ascii()).is_equal_to("_dmarc.foo_bar.example.com.".to_string());
    }

    #[test]
    fn case_is_preserved() {
        let message = build("Example.COM", RecordType::A).unwrap();

        assert_that(&message.queries()[0].name().to_ascii()).is_equal_to("Example.COM.".to_string());
    }

    #[test]
    fn punycode_labels_are_kept() {
        let message = build("xn--bcher-kva.example", RecordType::A).unwrap();

        assert_that(&message.queries()[0].name().to_ascii()).is_equal_to("xn--bcher-kva.example.".to_string());
    }

    #[test]
    fn unicode_names_are_mapped() {
        let message = build("bücher.example", RecordType::A).unwrap();

        assert_that(&message.queries()[0].name().to_ascii()).is_equal_to("xn--bcher-kva.example.".to_string());
    }

    #[test]
    fn ids_are_randomized() {
        let ids: std::collections::HashSet<u16> = (0..32)
            .map(|_| build("example.com", RecordType::A).unwrap().id())
            .collect();

        assert_that(&ids.len()).is_greater_than(1);
    }

    #[test]
    fn invalid_name() {
        let name = format!("{}.com", "a".repeat(64));

        let res = build(&name, RecordType::A);

        assert_that(&res).is_err();
    }
}
