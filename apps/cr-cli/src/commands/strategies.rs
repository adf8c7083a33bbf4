// strategies.rs — List submit strategies and mark the configured one.

use std::path::Path;

use cr_submit::{RelayConfig, StrategyKind};

pub fn execute(config_path: &Path) -> anyhow::Result<()> {
    let configured = configured_strategy(config_path);

    println!("Available strategies:");
    println!();
    for kind in StrategyKind::ALL {
        let marker = if configured.as_deref() == Some(kind.id()) {
            "*"
        } else {
            " "
        };
        println!("{} {:<10} {}", marker, kind.id(), kind.description());
    }
    println!();
    println!("Select one with `strategy = \"<name>\"` under [submit] in relay.toml.");
    Ok(())
}

/// Strategy named in the config, or `None` (with a warning) if it can't be read.
fn configured_strategy(config_path: &Path) -> Option<String> {
    match RelayConfig::load_or_default(config_path) {
        Ok(config) => Some(config.submit.strategy),
        Err(e) => {
            tracing::warn!(error = %e, "could not read relay config; no strategy marked");
            eprintln!("warning: {}", e);
            None
        }
    }
}
