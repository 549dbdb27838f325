//! `lnpath status`: query a running service.

use anyhow::Context;
use clap::Args;
use lnpath_api::StatusResponse;

use super::DEFAULT_ENDPOINT;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// API endpoint of the service.
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

pub async fn run(args: &StatusArgs) -> anyhow::Result<()> {
    let url = format!("{}/api/v1/status", args.endpoint.trim_end_matches('/'));
    println!("Querying lnpath status at {}...", args.endpoint);
    println!();

    let resp = reqwest::get(&url)
        .await
        .with_context(|| format!("could not reach lnpath at {}", args.endpoint))?;
    if !resp.status().is_success() {
        anyhow::bail!("status request failed (HTTP {})", resp.status());
    }

    let status: StatusResponse = resp.json().await?;
    println!("Service Status:");
    println!("  Version:        {}", status.version);
    println!("  Uptime:         {}s", status.uptime_secs);
    println!("  Max paths:      {}", status.max_paths);
    println!("  Search ceiling: {} tokens", status.search_ceiling);

    Ok(())
}
