//! Shared helpers for the live-instance integration tests.

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use dns_svcs::{BearerTokenAuthenticator, Config, DnsSvcsClient, RecordRdata};

/// Skip the test when any of the given environment variables is unset.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// Assert that a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Assert that an `Option` is `Some` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// A client wired to a live service instance from the environment.
pub struct TestContext {
    pub client: DnsSvcsClient,
    pub instance_id: String,
}

impl TestContext {
    /// Builds a context from `DNS_SVCS_TOKEN` and `DNS_SVCS_INSTANCE_ID`,
    /// honoring `DNS_SVCS_BASE_URL` when set (e.g. a staging endpoint).
    pub fn from_env() -> Option<Self> {
        let token = env::var("DNS_SVCS_TOKEN").ok()?;
        let instance_id = env::var("DNS_SVCS_INSTANCE_ID").ok()?;

        let auth = Arc::new(BearerTokenAuthenticator::new(token).ok()?);
        let client = match env::var("DNS_SVCS_BASE_URL") {
            Ok(base_url) => DnsSvcsClient::with_config(
                auth,
                Config {
                    base_url,
                    ..Config::default()
                },
            ),
            Err(_) => DnsSvcsClient::new(auth),
        };

        Some(Self {
            client,
            instance_id,
        })
    }
}

/// A unique zone name so concurrent runs do not collide.
pub fn generate_test_zone_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("test-{}.example.com", &uuid.to_string()[..8])
}

/// A unique record name within the test zone.
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("test-{}", &uuid.to_string()[..8])
}

/// Create and update rdata for each record type exercised by the lifecycle
/// tests.
pub fn get_test_rdata(record_type: &str) -> (RecordRdata, RecordRdata) {
    match record_type {
        "A" => (
            RecordRdata::A {
                ip: "192.0.2.1".to_string(),
            },
            RecordRdata::A {
                ip: "192.0.2.2".to_string(),
            },
        ),
        "AAAA" => (
            RecordRdata::AAAA {
                ip: "2001:db8::1".to_string(),
            },
            RecordRdata::AAAA {
                ip: "2001:db8::2".to_string(),
            },
        ),
        "CNAME" => (
            RecordRdata::CNAME {
                cname: "target1.example.com".to_string(),
            },
            RecordRdata::CNAME {
                cname: "target2.example.com".to_string(),
            },
        ),
        "MX" => (
            RecordRdata::MX {
                preference: 10,
                exchange: "mail1.example.com".to_string(),
            },
            RecordRdata::MX {
                preference: 20,
                exchange: "mail2.example.com".to_string(),
            },
        ),
        "TXT" => (
            RecordRdata::TXT {
                text: "test-value-1".to_string(),
            },
            RecordRdata::TXT {
                text: "test-value-2".to_string(),
            },
        ),
        "SRV" => (
            RecordRdata::SRV {
                priority: 0,
                weight: 5,
                port: 443,
                target: "srv1.example.com".to_string(),
            },
            RecordRdata::SRV {
                priority: 10,
                weight: 10,
                port: 8443,
                target: "srv2.example.com".to_string(),
            },
        ),
        other => panic!("unsupported test record type: {other}"),
    }
}
