use casual_tokio_http_server::GatewayConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use std::path::Path;

/// Prefix of environment variables overriding configuration keys, e.g.
/// `CASUAL_HTTP_PORT=9090`.
pub const ENV_PREFIX: &str = "CASUAL_HTTP_";

/// Layered configuration: defaults, then the YAML file (if any), then the
/// environment.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, figment::Error> {
    let mut figment = Figment::new().merge(Serialized::defaults(GatewayConfig::default()));
    if let Some(path) = path {
        figment = figment.merge(Yaml::file(path));
    }
    figment.merge(Env::prefixed(ENV_PREFIX)).extract()
}
