use std::num::NonZeroU32;
use std::path::PathBuf;
use argh::FromArgs;
use domain_name_query_types::QType;

fn default_config_path () -> PathBuf {
    PathBuf::from("./lookup_config.toml")
}

fn default_qtype() -> QType {
    QType::A
}

#[derive(Debug, FromArgs)]
#[argh(description = "resolve a domain name by walking the delegation chain from a root server")]
pub struct CliArgs {
    #[argh(positional, description = "domain name to resolve")]
    pub domain: String,

    #[argh(
        option,
        description = "query type, A or NS, default: A",
        default = "default_qtype()"
    )]
    pub qtype: QType,

    #[argh(
        option,
        description = "config file path, default: './lookup_config.toml'",
        default = "default_config_path()"
    )]
    pub config: PathBuf,

    #[argh(option, description = "root server address, overrides the config file")]
    pub root: Option<String>,

    #[argh(option, description = "maximum number of queries, overrides the config file")]
    pub max_hops: Option<NonZeroU32>,
}
