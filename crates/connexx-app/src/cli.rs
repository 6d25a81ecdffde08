use clap::Parser;

/// MVAI Connexx: a desktop shell around the Connexx web application.
#[derive(Parser, Debug)]
#[command(name = "connexx", version, about)]
pub struct Args {
    /// Load this URL instead of the configured environment's URL.
    #[arg(long, env = "CONNEXX_APP_URL")]
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error, or a full filter directive).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let args = Args::try_parse_from(["connexx"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
    }

    #[test]
    fn url_and_config_overrides_parse() {
        let args = Args::try_parse_from([
            "connexx",
            "--url",
            "https://mvai-connexx.onrender.com",
            "--config",
            "/tmp/connexx.toml",
            "--log-level",
            "connexx=debug",
        ])
        .unwrap();
        assert_eq!(args.url.as_deref(), Some("https://mvai-connexx.onrender.com"));
        assert_eq!(args.config.as_deref(), Some("/tmp/connexx.toml"));
        assert_eq!(args.log_level.as_deref(), Some("connexx=debug"));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["connexx", "--execute", "sh"]).is_err());
    }
}
