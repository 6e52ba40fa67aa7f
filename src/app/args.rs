use clap::Parser;

/// Port used when none is given on the command line.
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Parser, Debug, Clone)]
#[command(name = "debug-log-server")]
#[command(about = "Receives debug logs from a mobile app and prints them to the console")]
pub struct AppArgs {
    #[arg(default_value_t = DEFAULT_PORT, help = "Port to listen on")]
    pub port: u16,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
