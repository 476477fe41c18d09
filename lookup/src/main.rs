use std::error::Error;
use std::process::ExitCode;
use configuration::LookupConfiguration;
use domain_name_query_types::NameQuery;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod resolve;

use cli_args::CliArgs;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    let args: CliArgs = argh::from_env();

    let mut config: LookupConfiguration = configuration::get_config(args.config.clone())?;
    if let Some(root) = args.root {
        config.resolver.root_server = root;
    }
    if let Some(max_hops) = args.max_hops {
        config.resolver.max_hops = Some(max_hops);
    }

    // RUST_LOG 优先，否则使用配置文件里的 filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let name_query = NameQuery::new(&args.domain, args.qtype);
    tracing::debug!("config: {:?}", config);

    match resolve::resolve_domain(&name_query, &config).await {
        Ok(data) => {
            println!("{}", data);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("failed to resolve {}: {}", name_query, e);
            Ok(ExitCode::FAILURE)
        }
    }
}
