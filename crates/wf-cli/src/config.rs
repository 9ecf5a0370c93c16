//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Args;

/// Where to find the world files.
#[derive(Debug, Clone, Args)]
pub struct WorldArgs {
    /// Entities file (Graphviz DOT)
    #[arg(
        short,
        long,
        env = "WF_ENTITIES",
        default_value = "config/extended-entities.dot"
    )]
    pub entities: PathBuf,

    /// Actions file (XML)
    #[arg(
        short,
        long,
        env = "WF_ACTIONS",
        default_value = "config/extended-actions.xml"
    )]
    pub actions: PathBuf,
}

/// Settings for the game server.
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub world: WorldArgs,

    /// Address to listen on
    #[arg(long, env = "WF_BIND", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "WF_PORT", default_value_t = 8888)]
    pub port: u16,
}

impl ServeArgs {
    /// The socket address to listen on.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
