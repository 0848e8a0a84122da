use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use hxkit::{BufferedResponse, HxConfig, HxResponse, SwapStyle, Trigger};
use tracing_subscriber::EnvFilter;

/// Print the htmx headers a response would carry
#[derive(Parser)]
#[command(name = "hx-headers")]
#[command(about = "Encode htmx response directives as headers", long_about = None)]
struct Cli {
    #[arg(long)]
    status: Option<u16>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    push_url: Option<String>,

    #[arg(long)]
    redirect: Option<String>,

    #[arg(long)]
    refresh: Option<bool>,

    #[arg(long)]
    replace_url: Option<String>,

    /// Swap style token, e.g. innerHTML or beforeend
    #[arg(long)]
    reswap: Option<String>,

    #[arg(long)]
    retarget: Option<String>,

    #[arg(long)]
    reselect: Option<String>,

    /// Event without detail (repeatable)
    #[arg(long = "trigger")]
    triggers: Vec<String>,

    /// Event with a string detail as NAME=TEXT (repeatable)
    #[arg(long = "trigger-detail")]
    trigger_details: Vec<String>,

    /// YAML file with commit options
    #[arg(long, env = "HXKIT_CONFIG")]
    config: Option<PathBuf>,
}

fn build(cli: &Cli) -> anyhow::Result<HxResponse> {
    let config = match &cli.config {
        Some(path) => HxConfig::from_yaml_file(path)?,
        None => HxConfig::from_env(),
    };
    let mut hx = HxResponse::with_config(config);
    if let Some(status) = cli.status {
        hx.status_code(status);
    }
    if let Some(location) = &cli.location {
        hx.location(location.as_str());
    }
    if let Some(url) = &cli.push_url {
        hx.push_url(url);
    }
    if let Some(url) = &cli.redirect {
        hx.redirect(url);
    }
    if let Some(refresh) = cli.refresh {
        hx.refresh(refresh);
    }
    if let Some(url) = &cli.replace_url {
        hx.replace_url(url);
    }
    if let Some(style) = &cli.reswap {
        hx.reswap(style.parse::<SwapStyle>()?);
    }
    if let Some(selector) = &cli.retarget {
        hx.retarget(selector);
    }
    if let Some(selector) = &cli.reselect {
        hx.reselect(selector);
    }
    hx.add_triggers(cli.triggers.iter().map(String::as_str));
    for spec in &cli.trigger_details {
        let (name, detail) = spec
            .split_once('=')
            .ok_or_else(|| anyhow!("--trigger-detail expects NAME=TEXT, got '{spec}'"))?;
        hx.add_trigger(Trigger::detail(name, detail));
    }
    Ok(hx)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let hx = build(&cli)?;
    let mut res = BufferedResponse::new();
    hx.commit(&mut res).context("failed to encode htmx headers")?;

    if cli.status.is_some() {
        println!("Status: {}", res.status);
    }
    for (name, value) in &res.headers {
        println!("{name}: {value}");
    }
    Ok(())
}
