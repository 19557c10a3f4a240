use clap::Parser;

use crate::config::config::AppConfig;

/// `HealthMate` - keyword-matching health assistant.
#[derive(Parser, Debug, Default)]
#[command(name = "healthmate")]
#[command(version)]
#[command(about = "Keyword-matching health assistant service.", long_about = None)]
pub struct CliArgs {
    /// Bind host, overrides `server.host` from config.toml
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port, overrides `server.port` from config.toml
    #[arg(long)]
    pub port: Option<u16>,
}

impl CliArgs {
    /// 将命令行参数覆盖到配置上
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_config() {
        let cli = CliArgs::try_parse_from(["healthmate"]).expect("bare invocation should parse");
        let mut config = AppConfig::development();
        cli.apply(&mut config);

        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn test_host_and_port_override() {
        let cli = CliArgs::try_parse_from(["healthmate", "--host", "0.0.0.0", "--port", "8081"])
            .expect("bind flags should parse");
        let mut config = AppConfig::development();
        cli.apply(&mut config);

        assert_eq!(config.bind_address(), "0.0.0.0:8081");
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(CliArgs::try_parse_from(["healthmate", "--port", "99999"]).is_err());
        assert!(CliArgs::try_parse_from(["healthmate", "--seed", "1"]).is_err());
    }
}
