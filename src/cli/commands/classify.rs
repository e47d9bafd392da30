use std::collections::BTreeMap;

use anyhow::bail;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::gate::{AuthGate, Decision};

/// Parse repeated `NAME=VALUE` arguments into a cookie map.
pub fn parse_cookies(raw: &[String]) -> anyhow::Result<BTreeMap<String, String>> {
    let mut cookies = BTreeMap::new();
    for pair in raw {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("cookie '{}' must be NAME=VALUE", pair);
        };
        if name.trim().is_empty() {
            bail!("cookie '{}' has an empty name", pair);
        }
        cookies.insert(name.trim().to_string(), value.to_string());
    }
    Ok(cookies)
}

pub fn handle(
    config: &AppConfig,
    path: &str,
    raw_cookies: &[String],
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let gate = AuthGate::new(config.gate_config()?);
    let cookies = parse_cookies(raw_cookies)?;

    let decision = gate.evaluate(path, &cookies);
    let location = decision.location(gate.config().callback_param());

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "path": path,
                    "protected": gate.requires_auth(path),
                    "decision": decision,
                    "location": location,
                }))?
            );
        }
        OutputFormat::Text => match decision {
            Decision::Continue => println!("continue  {}", path),
            Decision::RedirectTo { .. } => {
                println!("redirect  {} -> {}", path, location.unwrap_or_default())
            }
        },
    }

    Ok(())
}
