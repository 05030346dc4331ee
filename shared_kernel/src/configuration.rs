use anyhow::Context;
use serde::de::DeserializeOwned;

/// Loads settings from `configuration/{base,test}.yaml` under the current
/// directory, with `APP_`-prefixed environment variables taking precedence
/// (`APP_API__HOST=…` overrides `api.host`).
pub fn config<Settings: DeserializeOwned>() -> anyhow::Result<Settings> {
    let configuration_directory = std::env::current_dir()
        .context("Failed to determine the current directory")?
        .join("configuration");
    let file = if cfg!(test) { "test.yaml" } else { "base.yaml" };
    config::Config::builder()
        .add_source(config::File::from(configuration_directory.join(file)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to build configuration")?
        .try_deserialize::<Settings>()
        .context("Failed to deserialize settings")
}
