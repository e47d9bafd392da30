use serde_json::json;

use crate::app::{protected_route_patterns, uncovered_routes};
use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub fn handle(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let gate = config.gate_config()?;
    let protected = gate.protected();
    let uncovered = uncovered_routes(protected);

    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "cookie_name": gate.cookie_name(),
                    "login_path": gate.login_path(),
                    "callback_param": gate.callback_param(),
                    "protected_prefixes": protected.prefixes(),
                    "matcher_patterns": protected.matcher_patterns(),
                    "handler_routes": protected_route_patterns(),
                    "uncovered_routes": uncovered,
                }))?
            );
        }
        OutputFormat::Text => {
            println!("Login: {} (callback parameter '{}')", gate.login_path(), gate.callback_param());
            println!("Session cookie: {}", gate.cookie_name());
            println!("Protected prefixes:");
            for prefix in protected.prefixes() {
                println!("  {}", prefix);
            }
            println!("Matcher patterns:");
            for pattern in protected.matcher_patterns() {
                println!("  {}", pattern);
            }
            if !uncovered.is_empty() {
                println!("Handler routes outside the protected set:");
                for route in uncovered {
                    println!("  ! {}", route);
                }
            }
        }
    }

    Ok(())
}
