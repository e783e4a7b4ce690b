//! Resource record lifecycle tests against a live service instance.
//!
//! These tests create a throwaway zone, run a full create/get/update/delete
//! cycle per record type inside it, and delete the zone afterwards.
//!
//! Run with:
//! ```bash
//! DNS_SVCS_TOKEN=xxx DNS_SVCS_INSTANCE_ID=xxx \
//!     cargo test --test records_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{TestContext, generate_test_record_name, generate_test_zone_name, get_test_rdata};
use dns_svcs::{
    CreateDnszoneRequest, CreateResourceRecordRequest, Dnszone, ListParams, RecordRdata,
    UpdateResourceRecordRequest,
};

async fn create_test_zone(ctx: &TestContext) -> Option<Dnszone> {
    let req = CreateDnszoneRequest {
        name: generate_test_zone_name(),
        description: Some("record integration tests".to_string()),
        label: None,
    };
    ctx.client.create_dnszone(&ctx.instance_id, &req).await.ok()
}

async fn record_lifecycle(ctx: &TestContext, zone_id: &str, record_type: &str) {
    let (create_rdata, update_rdata) = get_test_rdata(record_type);
    let name = generate_test_record_name();

    let is_srv = matches!(create_rdata, RecordRdata::SRV { .. });
    let req = CreateResourceRecordRequest {
        name: name.clone(),
        rdata: create_rdata,
        ttl: Some(300),
        service: is_srv.then(|| "_sip".to_string()),
        protocol: is_srv.then(|| "udp".to_string()),
    };
    let record = require_ok!(
        ctx.client
            .create_resource_record(&ctx.instance_id, zone_id, &req)
            .await,
        "create {record_type} record failed"
    );
    assert_eq!(record.rdata.record_type(), record_type);
    assert_eq!(record.ttl, 300);

    let fetched = require_ok!(
        ctx.client
            .get_resource_record(&ctx.instance_id, zone_id, &record.id)
            .await,
        "get {record_type} record failed"
    );
    assert_eq!(fetched.id, record.id);

    let update = UpdateResourceRecordRequest {
        name,
        rdata: update_rdata,
        ttl: Some(600),
        service: req.service.clone(),
        protocol: req.protocol.clone(),
    };
    let updated = require_ok!(
        ctx.client
            .update_resource_record(&ctx.instance_id, zone_id, &record.id, &update)
            .await,
        "update {record_type} record failed"
    );
    assert_eq!(updated.ttl, 600);
    assert_ne!(
        updated.rdata.display_value(),
        record.rdata.display_value(),
        "{record_type} rdata unchanged after update"
    );

    require_ok!(
        ctx.client
            .delete_resource_record(&ctx.instance_id, zone_id, &record.id)
            .await,
        "delete {record_type} record failed"
    );
    println!("✓ {record_type} record lifecycle complete");
}

macro_rules! record_lifecycle_test {
    ($name:ident, $record_type:expr) => {
        #[tokio::test]
        #[ignore]
        async fn $name() {
            skip_if_no_credentials!("DNS_SVCS_TOKEN", "DNS_SVCS_INSTANCE_ID");

            let ctx = require_some!(TestContext::from_env(), "failed to build test context");
            let zone = require_some!(create_test_zone(&ctx).await, "failed to create test zone");

            record_lifecycle(&ctx, &zone.id, $record_type).await;

            let _ = ctx.client.delete_dnszone(&ctx.instance_id, &zone.id).await;
        }
    };
}

record_lifecycle_test!(test_a_record_lifecycle, "A");
record_lifecycle_test!(test_aaaa_record_lifecycle, "AAAA");
record_lifecycle_test!(test_cname_record_lifecycle, "CNAME");
record_lifecycle_test!(test_mx_record_lifecycle, "MX");
record_lifecycle_test!(test_txt_record_lifecycle, "TXT");
record_lifecycle_test!(test_srv_record_lifecycle, "SRV");

#[tokio::test]
#[ignore]
async fn test_export_and_import_round_trip() {
    skip_if_no_credentials!("DNS_SVCS_TOKEN", "DNS_SVCS_INSTANCE_ID");

    let ctx = require_some!(TestContext::from_env(), "failed to build test context");
    let zone = require_some!(create_test_zone(&ctx).await, "failed to create test zone");

    let req = CreateResourceRecordRequest {
        name: generate_test_record_name(),
        rdata: RecordRdata::A {
            ip: "192.0.2.10".to_string(),
        },
        ttl: Some(300),
        service: None,
        protocol: None,
    };
    require_ok!(
        ctx.client
            .create_resource_record(&ctx.instance_id, &zone.id, &req)
            .await
    );

    // Export the zone file and feed it back through import.
    let exported = require_ok!(
        ctx.client
            .export_resource_records(&ctx.instance_id, &zone.id)
            .await,
        "export failed"
    );
    assert!(exported.contains("192.0.2.10"), "exported file missing record");

    let report = require_ok!(
        ctx.client
            .import_resource_records(
                &ctx.instance_id,
                &zone.id,
                exported.into_bytes(),
                "records.txt",
            )
            .await,
        "import failed"
    );
    assert!(report.total_records_parsed >= 1);
    println!(
        "✓ import parsed {} records ({} added, {} failed)",
        report.total_records_parsed, report.records_added, report.records_failed
    );

    let _ = ctx.client.delete_dnszone(&ctx.instance_id, &zone.id).await;
}

#[tokio::test]
#[ignore]
async fn test_record_pagination() {
    skip_if_no_credentials!("DNS_SVCS_TOKEN", "DNS_SVCS_INSTANCE_ID");

    let ctx = require_some!(TestContext::from_env(), "failed to build test context");
    let zone = require_some!(create_test_zone(&ctx).await, "failed to create test zone");

    for i in 0..3 {
        let req = CreateResourceRecordRequest {
            name: format!("{}-{i}", generate_test_record_name()),
            rdata: RecordRdata::A {
                ip: format!("192.0.2.{}", i + 1),
            },
            ttl: Some(300),
            service: None,
            protocol: None,
        };
        require_ok!(
            ctx.client
                .create_resource_record(&ctx.instance_id, &zone.id, &req)
                .await
        );
    }

    let params = ListParams {
        offset: 0,
        limit: 2,
    };
    let page = require_ok!(
        ctx.client
            .list_resource_records(&ctx.instance_id, &zone.id, &params)
            .await
    );
    assert!(page.resource_records.len() <= 2);
    if page.total_count > 2 {
        let next = require_some!(page.next, "expected a next link");
        assert!(next.href.contains("offset="));
    }
    println!("✓ record pagination: {} total", page.total_count);

    let _ = ctx.client.delete_dnszone(&ctx.instance_id, &zone.id).await;
}
