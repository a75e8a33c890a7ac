use clap::{ArgAction, Parser, builder::BoolishValueParser};
use minoan_mcp::server::DEFAULT_MCP_HTTP_ADDR;
use minoan_store::schema::CatalogView;
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DB_FILE: &str = "minoan.db";
const DEFAULT_CATALOG_VIEW: &str = "full";
const DEFAULT_LOG_FILTER: &str = "minoan=info,rmcp=info";

#[derive(Parser, Debug)]
#[command(name = "minoan-mcpd", version, about = "Minoan catalog MCP daemon.")]
struct CliArgs {
    /// Database file. Defaults to `minoan.db` in the system temp directory.
    #[arg(long, env = "MINOAN_DB_PATH")]
    db_path: Option<PathBuf>,

    /// Product projection for listings: `minimal` (id and name) or `full`.
    #[arg(long, env = "MINOAN_CATALOG_VIEW", default_value = DEFAULT_CATALOG_VIEW)]
    catalog_view: String,

    #[arg(
        long = "stdio",
        env = "MINOAN_ENABLE_STDIO",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(long, env = "MINOAN_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "MINOAN_MCP_STATEFUL",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    mcp_stateful: bool,

    #[arg(long, env = "MINOAN_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct MinoanConfig {
    pub db_path: PathBuf,
    pub catalog_view: CatalogView,
    pub enable_stdio: bool,
    pub mcp_http_addr: SocketAddr,
    pub mcp_stateful: bool,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl MinoanConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for MinoanConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let db_path = match args.db_path {
            Some(path) if path.as_os_str().is_empty() => {
                return Err(ConfigError::InvalidSetting {
                    name: "MINOAN_DB_PATH",
                    value: String::new(),
                });
            }
            Some(path) => path,
            None => std::env::temp_dir().join(DEFAULT_DB_FILE),
        };

        let catalog_view = match args.catalog_view.trim().to_ascii_lowercase().as_str() {
            "minimal" => CatalogView::Minimal,
            "full" => CatalogView::Full,
            _ => {
                return Err(ConfigError::InvalidSetting {
                    name: "MINOAN_CATALOG_VIEW",
                    value: args.catalog_view,
                });
            }
        };

        if args.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "MINOAN_LOG",
                value: args.log_filter,
            });
        }

        Ok(Self {
            db_path,
            catalog_view,
            enable_stdio: args.enable_stdio,
            mcp_http_addr: args.mcp_http_addr,
            mcp_stateful: args.mcp_stateful,
            log_filter: args.log_filter,
        })
    }
}
