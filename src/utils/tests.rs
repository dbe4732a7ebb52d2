// Copyright 2017-2021 Lukas Pustina <lukas@pustina.de>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

pub mod logging {
    use std::sync::Once;

    use tracing::subscriber::set_global_default;
    use tracing_log::LogTracer;
    use tracing_subscriber::fmt;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::EnvFilter;

    static LOGGING: Once = Once::new();

    pub fn init() {
        LOGGING.call_once(|| {
            // Subscribe to all log crate log messages and transform them to tracing events
            LogTracer::init().expect("failed to init logging for testing");

            let filter = if std::env::var_os("RUST_LOG").is_some() {
                // This is controlled by the env variable RUST_LOG
                EnvFilter::from_default_env()
            } else {
                EnvFilter::from(format!("{}=info", env!("CARGO_CRATE_NAME")))
            };

            let fmt = fmt::layer()
                .with_test_writer()
                .with_ansi(true)
                .with_thread_ids(true)
                .with_thread_names(true)
                .with_target(false);

            let registry = tracing_subscriber::registry().with(filter).with(fmt);
            set_global_default(registry).expect("failed to init tracing for testing");
        });
    }
}

pub mod transport {
    use std::collections::HashMap;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use hickory_proto::op::{Message, MessageType, ResponseCode};
    use hickory_proto::rr::rdata::{A, AAAA, MX};
    use hickory_proto::rr::{Name, RData, Record, RecordType};

    use crate::transport::{Error, Transport, TransportResult};

    /// How a fake endpoint reacts to a query.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Behavior {
        /// Answers `example.com. 3600 IN A 192.0.2.1`, `example.com. 3600 IN AAAA 2001:db8::1` or
        /// `example.com. 3600 IN MX 10 mail.example.com.`
        Answer,
        /// Responds with the given response code and no answers
        Respond(ResponseCode),
        Timeout,
    }

    /// Transport answering from memory and recording every endpoint it has been asked.
    #[derive(Debug)]
    pub struct FakeTransport {
        behaviors: HashMap<String, Behavior>,
        default: Behavior,
        exchanges: AtomicUsize,
        endpoints: Mutex<Vec<String>>,
    }

    impl FakeTransport {
        pub fn new(default: Behavior) -> Self {
            FakeTransport {
                behaviors: HashMap::new(),
                default,
                exchanges: AtomicUsize::new(0),
                endpoints: Mutex::new(Vec::new()),
            }
        }

        pub fn with(mut self, endpoint: &str, behavior: Behavior) -> Self {
            self.behaviors.insert(endpoint.to_string(), behavior);
            self
        }

        pub fn exchanges(&self) -> usize {
            self.exchanges.load(Ordering::SeqCst)
        }

        pub fn endpoints(&self) -> Vec<String> {
            self.endpoints.lock().unwrap().clone()
        }
    }

    impl Transport for FakeTransport {
        async fn exchange(&self, query: &Message, endpoint: &str) -> TransportResult<Message> {
            self.exchanges.fetch_add(1, Ordering::SeqCst);
            self.endpoints.lock().unwrap().push(endpoint.to_string());

            match self.behaviors.get(endpoint).copied().unwrap_or(self.default) {
                Behavior::Answer => Ok(answer(query)),
                Behavior::Respond(code) => {
                    let mut response = reply(query);
                    response.set_response_code(code);
                    Ok(response)
                }
                Behavior::Timeout => Err(Error::Timeout),
            }
        }
    }

    pub fn reply(query: &Message) -> Message {
        let mut response = Message::new();
        response
            .set_id(query.id())
            .set_message_type(MessageType::Response)
            .set_op_code(query.op_code())
            .set_recursion_desired(query.recursion_desired())
            .set_recursion_available(true)
            .set_response_code(ResponseCode::NoError)
            .add_queries(query.queries().to_vec());
        response
    }

    pub fn answer(query: &Message) -> Message {
        let mut response = reply(query);
        let name = Name::from_str("example.com.").unwrap();
        match query.queries().first().map(|q| q.query_type()) {
            Some(RecordType::A) => {
                response.add_answer(Record::from_rdata(name, 3600, RData::A(A::new(192, 0, 2, 1))));
            }
            Some(RecordType::AAAA) => {
                let aaaa = AAAA::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1);
                response.add_answer(Record::from_rdata(name, 3600, RData::AAAA(aaaa)));
            }
            Some(RecordType::MX) => {
                let exchange = Name::from_str("mail.example.com.").unwrap();
                response.add_answer(Record::from_rdata(name, 3600, RData::MX(MX::new(10, exchange))));
            }
            _ => {}
        }
        response
    }
}
