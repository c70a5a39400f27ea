//! CLI argument definitions.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::Parser;

use gamepass_core::{DEFAULT_INVENTORY_URL, InventoryUrl};
use gamepass_relay::RelayConfig;
use gamepass_relay::config::DEFAULT_PORT;

/// HTTP relay listing the game passes a user created.
#[derive(Parser, Debug)]
#[command(name = "gamepass-relay")]
#[command(author, version = env!("GAMEPASS_RELAY_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Inventory API base URL
    #[arg(long, env = "INVENTORY_URL", default_value = DEFAULT_INVENTORY_URL)]
    pub upstream: InventoryUrl,

    /// Seconds to wait for each inventory page
    #[arg(
        long,
        env = "PAGE_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub page_timeout_secs: u64,

    /// Report whether every inventory page was read
    #[arg(long, env = "REPORT_PARTIAL")]
    pub report_partial: bool,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Resolve the parsed arguments into the relay's settings.
    pub fn into_config(self) -> RelayConfig {
        let mut config = RelayConfig::new(self.upstream);
        config.listen = SocketAddr::new(self.bind, self.port);
        config.page_timeout = Duration::from_secs(self.page_timeout_secs);
        config.report_partial = self.report_partial;
        config
    }
}
