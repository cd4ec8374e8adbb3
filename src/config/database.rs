use mongodb::{Client, Database};
use serde::Serialize;
use std::env;
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

pub const DOCKER_HOST_VAR: &str = "MONGO_PORT_27017_TCP_ADDR";

const REMOTE_URL: &str = "mongodb://localhost:27017/test";
const LOCAL_URL: &str = "mongodb://localhost/test";
const DEFAULT_DATABASE: &str = "test";

/// Placeholder interpolated when the linked container address is not set.
pub const MISSING_HOST: &str = "undefined";

/// The three MongoDB URIs a deployment can pick from.
///
/// `docker_url` is built from the linked container address with no
/// validation; when the variable is absent the URI contains the literal
/// host `undefined` and will not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStrings {
    pub remote_url: String,
    pub local_url: String,
    pub docker_url: String,
}

impl ConnectionStrings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let docker_host = lookup(DOCKER_HOST_VAR).unwrap_or_else(|| MISSING_HOST.to_string());

        Self {
            remote_url: REMOTE_URL.to_string(),
            local_url: LOCAL_URL.to_string(),
            docker_url: format!("mongodb://{}/test", docker_host),
        }
    }

    pub fn url_for(&self, deployment: Deployment) -> &str {
        match deployment {
            Deployment::Local => &self.local_url,
            Deployment::Remote => &self.remote_url,
            Deployment::Docker => &self.docker_url,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deployment {
    Local,
    Remote,
    Docker,
}

impl Deployment {
    pub const ALL: [Deployment; 3] = [Deployment::Local, Deployment::Remote, Deployment::Docker];

    pub fn as_str(&self) -> &'static str {
        match self {
            Deployment::Local => "local",
            Deployment::Remote => "remote",
            Deployment::Docker => "docker",
        }
    }
}

impl fmt::Display for Deployment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Deployment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Deployment::Local),
            "remote" => Ok(Deployment::Remote),
            "docker" => Ok(Deployment::Docker),
            _ => Err(ConfigError::UnknownDeployment(s.to_string())),
        }
    }
}

/// Opens a client for the chosen deployment and returns the database named
/// in its URI.
pub async fn connect(
    urls: &ConnectionStrings,
    deployment: Deployment,
) -> Result<Database, mongodb::error::Error> {
    let uri = urls.url_for(deployment);
    tracing::debug!(%deployment, uri, "connecting to MongoDB");

    let client = Client::with_uri_str(uri).await?;

    Ok(client
        .default_database()
        .unwrap_or_else(|| client.database(DEFAULT_DATABASE)))
}
