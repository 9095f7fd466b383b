use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Redirect all incoming HTTP(S) traffic to a fixed target URL
#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Options {
    /// Logging verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// TCP port to listen on
    #[arg(long, default_value_t = 80)]
    pub port: u16,

    /// Log each request (client address, method, URL)
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub httplog: bool,

    /// Serve HTTPS instead of plain HTTP
    #[arg(long)]
    pub usetls: bool,

    /// Path to the TLS certificate file (used with --usetls)
    #[arg(long, default_value = "tls.cert")]
    pub tlscert: PathBuf,

    /// Path to the TLS private key file (used with --usetls)
    #[arg(long, default_value = "tls.key")]
    pub tlskey: PathBuf,

    /// Target URL to redirect to
    #[arg(long, default_value = "")]
    pub target: String,

    /// HTTP status code for the redirect
    #[arg(long, default_value_t = 307)]
    pub status: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Options::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let options = Options::parse_from(["redirected", "--target", "https://example.com/"]);
        assert_eq!(options.port, 80);
        assert!(options.httplog);
        assert!(!options.usetls);
        assert_eq!(options.tlscert, PathBuf::from("tls.cert"));
        assert_eq!(options.tlskey, PathBuf::from("tls.key"));
        assert_eq!(options.target, "https://example.com/");
        assert_eq!(options.status, 307);
    }

    #[test]
    fn httplog_can_be_disabled() {
        let options = Options::parse_from([
            "redirected",
            "--target",
            "https://example.com/",
            "--httplog",
            "false",
        ]);
        assert!(!options.httplog);
    }

    #[test]
    fn target_defaults_to_empty() {
        let options = Options::parse_from(["redirected"]);
        assert!(options.target.is_empty());
    }
}
