//! CLI Status Command
//!
//! Reports whether a Textra server is reachable and healthy.

use anyhow::Result;

use crate::terminal_output::{note_error, note_success};

pub async fn run(server: &str) -> Result<()> {
    let url = format!("{}/api/health", server.trim_end_matches('/'));
    let client = reqwest::Client::new();

    match client.get(&url).send().await {
        Ok(resp) if resp.status().is_success() => {
            let body: serde_json::Value = resp.json().await?;
            note_success(&format!("Textra is running at {server}"));
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Ok(resp) => note_error(&format!("{url} answered {}", resp.status())),
        Err(_) => note_error(&format!("Textra is not running at {server}")),
    }
    Ok(())
}
