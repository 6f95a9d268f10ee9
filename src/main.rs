use anyhow::Result;
use cli::Cli;

mod application;
mod association;
mod catalog;
mod cli;
mod commands;
mod config;
mod environment;
mod prompt;
mod reassign;
mod resolver;
mod runner;
mod version;

#[cfg(test)]
mod test_support;

// Build info module
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);
    commands::dispatch(cli)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_constants() {
        assert!(!built_info::PKG_VERSION.is_empty());
        assert!(!built_info::TARGET.is_empty());
        assert!(!built_info::RUSTC_VERSION.is_empty());
    }

    #[test]
    fn test_package_name() {
        assert_eq!(built_info::PKG_NAME, "dutip");
    }
}
