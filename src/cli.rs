use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ethpanel")]
#[command(version)]
#[command(about = "A terminal panel for an Ethereum wallet provider")]
pub struct Args {
    /// Tick rate in ticks per second
    #[arg(short, long, default_value_t = 4.0)]
    pub tick_rate: f64,

    /// Frame rate in frames per second
    #[arg(short, long, default_value_t = 60.0)]
    pub frame_rate: f64,

    /// Network to connect to (homestead, bsc-mainnet, or a custom name)
    #[arg(short, long)]
    pub network: Option<String>,

    /// Provider RPC URL (overrides the network default)
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Data directory path
    #[arg(long)]
    pub data_dir: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
