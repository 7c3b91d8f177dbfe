//! Server configuration.
//!
//! The only externally observable knob is the `PORT` environment variable.
//! It is read once at startup into an explicit [`Config`] value — there is
//! no global, and a bad value fails the process before the listener binds.

use std::env;
use std::net::SocketAddr;

use crate::error::Error;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Listening address for [`Server`](crate::Server).
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Builds a config from the environment.
    ///
    /// `PORT` selects the listening port, defaulting to 3000 when absent.
    /// A present-but-unparseable value is an [`Error::Config`], not a silent
    /// fallback.
    pub fn from_env() -> Result<Self, Error> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| Error::Config(format!("PORT must be a port number, got `{raw}`")))?,
            Err(env::VarError::NotPresent) => DEFAULT_PORT,
            Err(e) => return Err(Error::Config(format!("PORT is not readable: {e}"))),
        };

        Ok(Self { host: DEFAULT_HOST.to_owned(), port })
    }

    /// The address the server will bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, Error> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid listen address `{}:{}`: {e}", self.host, self.port)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces_on_3000() {
        let addr = Config::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 3000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn bad_host_is_a_config_error() {
        let config = Config { host: "not a host".to_owned(), port: 80 };
        assert!(matches!(config.socket_addr(), Err(Error::Config(_))));
    }
}
