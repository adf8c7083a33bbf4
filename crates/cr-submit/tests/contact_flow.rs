// contact_flow.rs — Drives every strategy through the relay with a recording
// transport and checks what would have gone over the wire.

use std::sync::Arc;

use cr_contact::{ContactSubmission, FormFields};
use cr_submit::{
    ContactRelay, FailureKind, MockReply, MockTransport, RequestBody, StrategyKind,
    SubmissionResult, SubmitConfig,
};

fn ada() -> ContactSubmission {
    ContactSubmission::new("Ada", "ada@x.com", "Hi").unwrap()
}

fn config_for(kind: StrategyKind) -> SubmitConfig {
    SubmitConfig {
        strategy: kind.id().to_string(),
        ..Default::default()
    }
}

/// Every string value carried by the request body, flattened.
fn payload_values(body: &RequestBody) -> Vec<String> {
    fn walk(value: &serde_json::Value, out: &mut Vec<String>) {
        match value {
            serde_json::Value::String(s) => out.push(s.clone()),
            serde_json::Value::Object(map) => map.values().for_each(|v| walk(v, out)),
            serde_json::Value::Array(items) => items.iter().for_each(|v| walk(v, out)),
            _ => {}
        }
    }
    let mut out = Vec::new();
    match body {
        RequestBody::Empty => {}
        RequestBody::Multipart(fields) => out.extend(fields.iter().map(|(_, v)| v.clone())),
        RequestBody::Json(value) => walk(value, &mut out),
    }
    out
}

#[tokio::test]
async fn every_strategy_carries_required_values_and_placeholders() {
    for kind in StrategyKind::ALL {
        let mock = Arc::new(MockTransport::new().with_reply(MockReply::ok(r#"{"id":"rec1"}"#)));
        let relay = ContactRelay::new(&config_for(kind), mock.clone()).unwrap();

        let result = relay.submit(&ada()).await;
        assert!(result.is_success(), "{} failed: {:?}", kind, result);

        let requests = mock.requests();
        let send = requests.last().unwrap();
        let values = payload_values(&send.body);
        for required in ["Ada", "ada@x.com", "Hi"] {
            assert!(
                values.iter().any(|v| v == required),
                "{}: missing {}",
                kind,
                required
            );
        }
        for value in &values {
            assert_ne!(value, "undefined", "{}", kind);
            assert_ne!(value, "null", "{}", kind);
        }

        let expected_placeholder = match kind {
            StrategyKind::EmailJs => "Not provided",
            _ => "",
        };
        assert!(
            values.iter().any(|v| v == expected_placeholder),
            "{}: placeholder '{}' not found",
            kind,
            expected_placeholder
        );
    }
}

#[tokio::test]
async fn unknown_strategy_is_rejected_before_any_request() {
    let mock = Arc::new(MockTransport::new());
    let config = SubmitConfig {
        strategy: "formspree".to_string(),
        ..Default::default()
    };

    let result = cr_submit::submit_contact_form(&config, mock.clone(), &ada()).await;

    assert_eq!(result.failure_kind(), Some(FailureKind::Configuration));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn emailjs_library_is_loaded_once() {
    let mock = Arc::new(MockTransport::new());
    let config = config_for(StrategyKind::EmailJs);
    let relay = ContactRelay::new(&config, mock.clone()).unwrap();

    assert!(relay.submit(&ada()).await.is_success());
    assert!(relay.submit(&ada()).await.is_success());
    assert!(relay.submit(&ada()).await.is_success());

    assert_eq!(mock.count_for(&config.emailjs.sdk_url), 1);
    assert_eq!(mock.count_for(&config.emailjs.api_url), 3);
}

#[tokio::test]
async fn status_codes_surface_only_where_observable() {
    for kind in [StrategyKind::Airtable, StrategyKind::Netlify] {
        let mock = Arc::new(MockTransport::new().with_reply(MockReply::status(503)));
        let relay = ContactRelay::new(&config_for(kind), mock).unwrap();
        match relay.submit(&ada()).await {
            SubmissionResult::Failure { kind: k, reason } => {
                assert_eq!(k, FailureKind::RemoteRejection);
                assert!(reason.contains("503"), "{}: {}", kind, reason);
            }
            other => panic!("{}: expected failure, got {:?}", kind, other),
        }
    }

    let mock = Arc::new(MockTransport::new().with_reply(MockReply::status(503)));
    let relay = ContactRelay::new(&config_for(StrategyKind::GoogleForms), mock).unwrap();
    assert!(relay.submit(&ada()).await.is_success());
}

#[tokio::test]
async fn airtable_success_wraps_record() {
    let mock = Arc::new(MockTransport::new().with_reply(MockReply::ok(r#"{"id":"rec123"}"#)));
    let relay = ContactRelay::new(&config_for(StrategyKind::Airtable), mock).unwrap();

    assert_eq!(
        relay.submit(&ada()).await,
        SubmissionResult::Success {
            data: serde_json::json!({"id": "rec123"})
        }
    );
}

#[tokio::test]
async fn airtable_server_error_is_failure_with_status() {
    let mock = Arc::new(MockTransport::new().with_reply(MockReply::status(500)));
    let relay = ContactRelay::new(&config_for(StrategyKind::Airtable), mock).unwrap();

    match relay.submit(&ada()).await {
        SubmissionResult::Failure { reason, .. } => assert!(reason.contains("500")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn malformed_email_never_becomes_a_submission() {
    let fields: FormFields = [
        ("name", "Ada"),
        ("email", "not-an-email"),
        ("message", "Hi"),
    ]
    .into_iter()
    .collect();

    let err = ContactSubmission::from_fields(&fields).unwrap_err();
    assert!(err.has_error("email"));
}
