mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, check, interactive};
use ipscope_common::config::Config;
use ipscope_common::resolver::HostnameResolver;
use ipscope_common::debug;
use ipscope_core::resolver::SystemResolver;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose, commands.quiet);

    let cfg: Config = commands.to_config();
    let system_resolver: Option<SystemResolver> = SystemResolver::from_config(&cfg);
    if let Some(resolver) = &system_resolver {
        debug!("reverse lookups go to {}", resolver.nameserver());
    }
    let resolver: Option<&dyn HostnameResolver> = system_resolver
        .as_ref()
        .map(|resolver| resolver as &dyn HostnameResolver);

    if !cfg.plain {
        print::banner(cfg.quiet);
    }

    match commands.address {
        Some(address) if !commands.interactive => Ok(check::check(&address, &cfg, resolver).await),
        _ => {
            interactive::run(&cfg, resolver).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
