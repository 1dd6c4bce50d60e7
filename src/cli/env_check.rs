use anyhow::Result;

use crate::config::Config;

/// Prints the same report as `GET /api/env-check`.
pub fn print(config: &Config) -> Result<()> {
    let report = serde_json::to_string_pretty(&config.email.presence())?;
    println!("{report}");

    Ok(())
}
