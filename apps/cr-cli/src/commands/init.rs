// init.rs — Write a starter relay.toml.

use std::fs;
use std::path::Path;

use cr_submit::RelayConfig;

pub fn execute(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        println!("  {} already exists — skipping (use --force to overwrite)", path.display());
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, RelayConfig::default_toml())?;
    println!("  Created {}", path.display());
    println!();
    println!("Next steps:");
    println!("  1. Set [submit] strategy to google, airtable, emailjs or netlify");
    println!("  2. Fill in that strategy's section");
    println!("  3. Try it:  contact-relay submit --dry-run --field name=Ada --field email=ada@example.com --field message=Hello");
    Ok(())
}
