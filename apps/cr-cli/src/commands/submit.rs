// submit.rs — Validate, submit once with the configured strategy, report.
//
// Validation happens first: a form that fails it never reaches a strategy.
// The strategy is chosen from relay.toml once per run. With --dry-run the
// requests are recorded instead of sent and printed with credentials masked.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use cr_submit::{
    ContactRelay, HttpTransport, MockReply, MockTransport, RelayConfig, SubmissionResult,
    Transport,
};

use super::{validated_submission, FieldArgs, ERROR_MESSAGE, SUCCESS_MESSAGE};

pub fn execute(config_path: &Path, args: &FieldArgs, dry_run: bool) -> anyhow::Result<()> {
    let form = args.read()?;
    let submission = validated_submission(&form)?;
    let config = RelayConfig::load_or_default(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    // "{}" keeps strategies that decode the reply (Airtable) happy.
    let recorder = Arc::new(MockTransport::new().with_reply(MockReply::ok("{}")));
    let transport: Arc<dyn Transport> = if dry_run {
        recorder.clone()
    } else {
        Arc::new(HttpTransport::new()?)
    };

    let rt = tokio::runtime::Runtime::new()?;
    let result = rt.block_on(async {
        match ContactRelay::new(&config.submit, transport) {
            Ok(relay) => {
                tracing::info!(strategy = relay.strategy().kind().id(), "submitting");
                relay.submit(&submission).await
            }
            Err(e) => SubmissionResult::from(e),
        }
    });

    if dry_run {
        for request in recorder.requests() {
            eprintln!(
                "would send: {}",
                serde_json::to_string_pretty(&request.redacted())?
            );
        }
    }

    report(&result)
}

fn report(result: &SubmissionResult) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    match result {
        SubmissionResult::Success { .. } => {
            eprintln!("{}", SUCCESS_MESSAGE);
            Ok(())
        }
        SubmissionResult::Failure { reason, .. } => {
            eprintln!("{}", ERROR_MESSAGE);
            anyhow::bail!("submission failed: {}", reason)
        }
    }
}
