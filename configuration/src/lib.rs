use std::num::NonZeroU32;
use std::path::PathBuf;
use std::time::Duration;
use serde::Deserialize;

pub use config::ConfigError;

const ENV_PREFIX: &str = "LOOKUP";

/// Loads `T` from an optional TOML file, then applies `LOOKUP__SECTION__KEY`
/// environment overrides. A missing file is not an error.
pub fn get_config<T>(config_path: PathBuf) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let f = config::File::from(config_path).required(false);
    let env = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true);
    let config = config::Config::builder()
        .add_source(f)
        .add_source(env)
        .build()?;
    config.try_deserialize::<T>()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LookupConfiguration {
    pub resolver: ResolverConfiguration,
    pub transport: TransportConfiguration,
    pub logging: LoggingConfiguration,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NsResolution {
    // 把 NS 名字原样交给传输层，由系统解析
    #[default]
    Host,
    // 用同样的迭代算法从根开始解析 NS 名字
    Iterative,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfiguration {
    pub root_server: String,
    /// Unset means no bound on the number of queries; 0 is rejected.
    pub max_hops: Option<NonZeroU32>,
    pub max_referral_depth: u32,
    pub ns_resolution: NsResolution,
    pub id_seed: Option<u64>,
}

impl Default for ResolverConfiguration {
    fn default() -> Self {
        Self {
            // a.root-servers.net
            root_server: String::from("198.41.0.4:53"),
            max_hops: NonZeroU32::new(32),
            max_referral_depth: 4,
            ns_resolution: NsResolution::default(),
            id_seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransportConfiguration {
    pub receive_buffer_size: usize,
    /// Unset means wait for the response forever.
    pub timeout_secs: Option<u64>,
}

impl TransportConfiguration {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for TransportConfiguration {
    fn default() -> Self {
        Self {
            receive_buffer_size: 1024,
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfiguration {
    pub filter: String,
}

impl Default for LoggingConfiguration {
    fn default() -> Self {
        Self {
            filter: String::from("info"),
        }
    }
}
