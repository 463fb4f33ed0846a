use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_socket_addr, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// CBS OData endpoint for data set 84583NED (kerncijfers wijken en buurten).
pub const CBS_API_ENDPOINT: &str = "https://opendata.cbs.nl/ODataApi/odata/84583NED/TypedDataSet";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mantelzorg-dashboard")]
#[command(about = "A web dashboard for CBS informal-care statistics per municipality")]
pub struct CliConfig {
    #[arg(long, default_value = CBS_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind_addr: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_socket_addr("bind_addr", &self.bind_addr)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig {
            api_endpoint: CBS_API_ENDPOINT.to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            verbose: false,
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let config = CliConfig {
            api_endpoint: "ftp://opendata.cbs.nl".to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            verbose: false,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_bind_addr_is_rejected() {
        let config = CliConfig {
            api_endpoint: CBS_API_ENDPOINT.to_string(),
            bind_addr: "localhost".to_string(),
            verbose: false,
        };
        assert!(config.validate().is_err());
    }
}
