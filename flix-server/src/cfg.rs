use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use config::Config;
use http::Uri;

fn default_listen_addr() -> String {
    "127.0.0.1".to_string()
}

fn default_listen_port() -> u16 {
    8080
}

fn default_origin() -> Uri {
    Uri::from_static(flix_client::DEFAULT_ORIGIN)
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(10)
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct HttpServerConfig {
    /// Address/interface to listen for TCP connections.
    #[serde(default = "default_listen_addr")]
    pub listen_address: String,

    /// Port to listen for TCP connections.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_addr(),
            listen_port: default_listen_port(),
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct BackendConfig {
    /// Origin of the catalog backend, e.g. `http://localhost:8000`.
    #[serde(default = "default_origin", with = "parse_uri")]
    pub origin: Uri,

    /// Longest time a single backend request may take while rendering a page.
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            request_timeout: default_request_timeout(),
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct FlixConfig {
    /// Enables debug logging/tracing.
    #[serde(default)]
    pub debug: bool,

    /// HTTP Server configuration
    #[serde(default)]
    pub http_config: HttpServerConfig,

    /// Catalog backend configuration
    #[serde(default)]
    pub backend_config: BackendConfig,
}

/// Parses the configuration of the server, returning a FlixConfig struct.
/// Uses the given path to read a structured file format (toml, yaml, json, etc).
/// Individual values can be overriden by `FLIX_`-prefixed environment variables, with `__`
/// separating nested keys (`FLIX_BACKEND_CONFIG__ORIGIN`).
pub fn get_config(path: &Path) -> Result<FlixConfig> {
    let config = Config::builder()
        .add_source(config::File::with_name(
            path.to_str()
                .context("Parsing configuration path as a str")?,
        ))
        .add_source(
            config::Environment::with_prefix("FLIX")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Building the configuration of the server from file and environment")?;

    config
        .try_deserialize()
        .context("Deserializing the configuration as FlixConfig")
}

mod parse_uri {
    use http::Uri;

    pub fn deserialize<'de, D: serde::Deserializer<'de>>(
        d: D,
    ) -> std::result::Result<Uri, D::Error> {
        d.deserialize_str(Visitor {})
    }

    struct Visitor {}

    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = Uri;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            writeln!(formatter, "A valid absolute http(s) URI")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            let uri: Uri = v
                .try_into()
                .map_err(|e| E::custom(format!("{v} is an invalid URI: {e}")))?;
            if uri.scheme().is_none() || uri.host().is_none() {
                return Err(E::custom(format!("{v} is not an absolute URI")));
            }
            Ok(uri)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use googletest::prelude::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> googletest::Result<NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .or_fail()?;
        file.write_all(contents.as_bytes()).or_fail()?;
        Ok(file)
    }

    #[googletest::test]
    fn test_full_config() -> googletest::Result<()> {
        let file = config_file(
            r#"
            debug = true

            [http_config]
            listen_address = "0.0.0.0"
            listen_port = 3000

            [backend_config]
            origin = "http://catalog.internal:8000"
            request_timeout = "2s 500ms"
            "#,
        )?;

        let config = get_config(file.path()).or_fail()?;
        expect_that!(config.debug, eq(true));
        expect_that!(config.http_config.listen_address, eq("0.0.0.0"));
        expect_that!(config.http_config.listen_port, eq(3000));
        expect_that!(
            config.backend_config.origin.host(),
            some(eq("catalog.internal"))
        );
        expect_that!(
            config.backend_config.request_timeout,
            eq(Duration::from_millis(2500))
        );
        Ok(())
    }

    #[googletest::test]
    fn test_defaults() -> googletest::Result<()> {
        let file = config_file("")?;

        let config = get_config(file.path()).or_fail()?;
        expect_that!(config.debug, eq(false));
        expect_that!(config.http_config.listen_address, eq("127.0.0.1"));
        expect_that!(config.http_config.listen_port, eq(8080));
        expect_that!(config.backend_config.origin.host(), some(eq("localhost")));
        expect_that!(config.backend_config.origin.port_u16(), some(eq(8000)));
        expect_that!(
            config.backend_config.request_timeout,
            eq(Duration::from_secs(10))
        );
        Ok(())
    }

    #[googletest::test]
    fn test_relative_origin_is_rejected() -> googletest::Result<()> {
        let file = config_file(
            r#"
            [backend_config]
            origin = "/courses"
            "#,
        )?;
        expect_that!(get_config(file.path()), err(anything()));
        Ok(())
    }

    #[googletest::test]
    fn test_missing_file() {
        expect_that!(
            get_config(Path::new("/nonexistent/flix/config.toml")),
            err(anything())
        );
    }
}
