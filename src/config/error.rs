use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {source}")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("unknown deployment {0:?}, expected one of: local, remote, docker")]
    UnknownDeployment(String),
}
