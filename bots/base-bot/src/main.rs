use chessbot::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Connects to a chess game server and plays a scripted opening.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// web socket server address to connect
    #[arg(short, long, default_value = ClientConfig::DEFAULT_ADDRESS)]
    address: String,

    /// web socket server port to connect
    #[arg(short, long, default_value_t = ClientConfig::DEFAULT_PORT)]
    port: u16,

    /// this client name to register on server
    #[arg(short, long, default_value = ClientConfig::DEFAULT_NAME)]
    name: String,
}

impl From<Args> for ClientConfig {
    fn from(args: Args) -> Self {
        ClientConfig {
            address: args.address,
            port: args.port,
            name: args.name,
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ClientConfig::from(Args::parse());
    tracing::info!(url = %config.url(), name = %config.name, "starting base-bot");

    let client = BotClient::builder()
        .config(config)
        .connect(BaseBot::new())
        .await?;

    client.run().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> ClientConfig {
        Args::try_parse_from(argv).expect("should parse").into()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["base-bot"]);
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.url(), "ws://localhost:6969");
    }

    #[test]
    fn test_short_flags() {
        let config = parse(&["base-bot", "-a", "10.1.1.1", "-p", "7000", "-n", "alpha"]);
        assert_eq!(config.url(), "ws://10.1.1.1:7000");
        assert_eq!(config.name, "alpha");
    }

    #[test]
    fn test_long_flags() {
        let config = parse(&[
            "base-bot",
            "--address",
            "server",
            "--port",
            "1234",
            "--name",
            "beta",
        ]);
        assert_eq!(config.url(), "ws://server:1234");
        assert_eq!(config.name, "beta");
    }

    #[test]
    fn test_bad_port_is_rejected() {
        assert!(Args::try_parse_from(["base-bot", "--port", "not-a-port"]).is_err());
        assert!(Args::try_parse_from(["base-bot", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_help_is_display_help() {
        let err = Args::try_parse_from(["base-bot", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
