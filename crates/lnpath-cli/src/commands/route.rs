//! `lnpath route`: find routes to a destination.

use anyhow::Context;
use clap::Args;
use lnpath_api::ErrorResponse;
use lnpath_core::RoutingResult;
use lnpath_routing::RoutingRequest;

use super::DEFAULT_ENDPOINT;

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Destination node public key (hex).
    #[arg(short, long)]
    pub destination: String,

    /// Amount to deliver, in tokens.
    #[arg(short, long)]
    pub tokens: u64,

    /// Largest total fee to accept, in tokens.
    #[arg(short = 'f', long)]
    pub max_fee: u64,

    /// Final hop timeout margin, in blocks.
    #[arg(long, default_value_t = 40)]
    pub cltv_delta: u32,

    /// Budget of disjoint paths for the multi-path search.
    #[arg(long)]
    pub max_paths: Option<usize>,

    /// Require the last hop to come from this peer.
    #[arg(long)]
    pub incoming_peer: Option<String>,

    /// Leave the local node through this channel only.
    #[arg(long)]
    pub outgoing_channel: Option<String>,

    /// Payment identifier (64 hex chars).
    #[arg(long)]
    pub payment: Option<String>,

    /// Print the raw JSON result.
    #[arg(long)]
    pub json: bool,

    /// API endpoint of the service.
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl RouteArgs {
    fn to_request(&self) -> RoutingRequest {
        RoutingRequest {
            cltv_delta: Some(self.cltv_delta),
            destination: Some(self.destination.clone()),
            tokens: Some(self.tokens),
            max_fee: Some(self.max_fee),
            max_paths: self.max_paths,
            incoming_peer: self.incoming_peer.clone(),
            outgoing_channel: self.outgoing_channel.clone(),
            payment: self.payment.clone(),
            ..Default::default()
        }
    }
}

pub async fn run(args: &RouteArgs) -> anyhow::Result<()> {
    let url = format!("{}/api/v1/routes", args.endpoint.trim_end_matches('/'));
    let client = reqwest::Client::new();

    let resp = client
        .post(&url)
        .json(&args.to_request())
        .send()
        .await
        .with_context(|| format!("could not reach lnpath at {}", args.endpoint))?;

    let status = resp.status();
    if !status.is_success() {
        match resp.json::<ErrorResponse>().await {
            Ok(err) => anyhow::bail!("{}", describe_error(&err)),
            Err(_) => anyhow::bail!("route request failed (HTTP {})", status),
        }
    }

    let result: RoutingResult = resp.json().await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", describe_result(&result));
    }
    Ok(())
}

fn describe_error(err: &ErrorResponse) -> String {
    match &err.context {
        Some(context) => format!("[{}] {} {}", err.code, err.reason, context),
        None => format!("[{}] {}", err.code, err.reason),
    }
}

fn describe_result(result: &RoutingResult) -> String {
    let mut out = format!(
        "Found {} route(s), total fee {} tokens\n",
        result.routes.len(),
        result.fee
    );
    for (i, route) in result.routes.iter().enumerate() {
        out.push_str(&format!(
            "  #{} delivers {} mtokens, fee {} mtokens, {} hop(s), timeout {}\n",
            i + 1,
            route.delivered_mtokens(),
            route.fee_mtokens,
            route.hop_count(),
            route.timeout
        ));
        for hop in &route.hops {
            out.push_str(&format!(
                "      via {} forward {} fee {}\n",
                hop.channel, hop.forward_mtokens, hop.fee_mtokens
            ));
        }
    }
    out
}
