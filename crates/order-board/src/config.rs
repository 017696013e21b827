//! Process configuration, read from the command line or the environment.

use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// What a transition request on an unknown order or dish gets back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum UnknownTargetPolicy {
    /// Succeed silently; nothing changes and nothing is published.
    #[default]
    Ignore,
    /// Fail the request with `UnknownTarget`.
    Reject,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "order-board")]
#[command(about = "Real-time order board for kitchen, bar and floor displays")]
pub struct BoardConfig {
    /// Address to listen on
    #[arg(long, env = "BOARD_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Pending requests the order actor may queue
    #[arg(long, env = "BOARD_REQUEST_BUFFER", default_value_t = 64, value_parser = buffer_size())]
    pub request_buffer: usize,

    /// Undelivered events an observer may lag behind before it is disconnected
    #[arg(long, env = "BOARD_OBSERVER_BUFFER", default_value_t = 256, value_parser = buffer_size())]
    pub observer_buffer: usize,

    /// Handling of transition requests for unknown orders or dishes
    #[arg(long, env = "BOARD_UNKNOWN_TARGETS", value_enum, default_value_t = UnknownTargetPolicy::Ignore)]
    pub unknown_targets: UnknownTargetPolicy,

    /// Directory of display pages served for any other path
    #[arg(long, env = "BOARD_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

/// Channel capacities must be at least one.
fn buffer_size() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(1..)
}

impl BoardConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 3000,
            request_buffer: 64,
            observer_buffer: 256,
            unknown_targets: UnknownTargetPolicy::Ignore,
            static_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    /// The declared default of a flag, whatever the environment holds.
    fn cli_default(id: &str) -> String {
        let command = BoardConfig::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .unwrap_or_else(|| panic!("no argument {id}"));
        arg.get_default_values()[0].to_string_lossy().into_owned()
    }

    #[test]
    fn defaults_match_the_cli() {
        let default = BoardConfig::default();
        assert_eq!(cli_default("host"), default.host.to_string());
        assert_eq!(cli_default("port"), default.port.to_string());
        assert_eq!(cli_default("request_buffer"), default.request_buffer.to_string());
        assert_eq!(cli_default("observer_buffer"), default.observer_buffer.to_string());
        assert_eq!(cli_default("unknown_targets"), "ignore");
        assert_eq!(default.unknown_targets, UnknownTargetPolicy::Ignore);
    }

    #[test]
    fn zero_buffers_are_rejected() {
        for flag in ["--request-buffer", "--observer-buffer"] {
            let result = BoardConfig::try_parse_from(["order-board", flag, "0"]);
            assert!(result.is_err(), "{flag} 0 was accepted");
        }
        let parsed =
            BoardConfig::try_parse_from(["order-board", "--request-buffer", "1"]).unwrap();
        assert_eq!(parsed.request_buffer, 1);
    }

    #[test]
    fn parses_flags() {
        let parsed = BoardConfig::try_parse_from([
            "order-board",
            "--port",
            "8080",
            "--unknown-targets",
            "reject",
            "--static-dir",
            "public",
        ])
        .unwrap();
        assert_eq!(parsed.port, 8080);
        assert_eq!(parsed.unknown_targets, UnknownTargetPolicy::Reject);
        assert_eq!(parsed.static_dir, Some(PathBuf::from("public")));
    }
}
