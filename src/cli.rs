use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// Long options that may also be spelled with a single dash (`-from IINA`).
const SINGLE_DASH_LONG: &[&str] = &["version", "bump", "yes", "from", "to"];

#[derive(Parser, Debug)]
#[command(
    name = "dutip",
    about = "Move default-app associations for common text and config file extensions",
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// Print version information
    #[arg(short = 'v', long)]
    pub version: bool,

    /// Bump the patch version recorded in the package manifest
    #[arg(long)]
    pub bump: bool,

    /// Manifest rewritten by --bump
    #[arg(long, value_name = "PATH", requires = "bump")]
    pub manifest_path: Option<PathBuf>,

    /// Force the operation to run without confirmation
    #[arg(
        short = 'y',
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new(),
    )]
    pub yes: bool,

    /// The app name (or bundle id) to change from
    #[arg(short = 'f', long, value_name = "APP")]
    pub from: Option<String>,

    /// The app name (or bundle id) to change to
    #[arg(short = 't', long, value_name = "APP")]
    pub to: Option<String>,

    /// Show the current default app of every supported extension
    #[arg(long, conflicts_with_all = ["from", "to", "list_apps"])]
    pub status: bool,

    /// List installed applications known to Spotlight
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub list_apps: bool,

    /// Output JSON (with --status or --list-apps)
    #[arg(long)]
    pub json: bool,

    /// Verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Generate default configuration file
    #[arg(long)]
    pub generate_config: bool,

    /// Show build information
    #[arg(long)]
    pub build_info: bool,

    /// Print a shell completion script
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Parse process arguments, accepting single-dash long options.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// No option at all was given.
    pub fn is_bare(&self) -> bool {
        !self.version
            && !self.bump
            && !self.yes
            && self.from.is_none()
            && self.to.is_none()
            && !self.status
            && !self.list_apps
            && !self.json
            && !self.verbose
            && self.config.is_none()
            && !self.generate_config
            && !self.build_info
            && self.completions.is_none()
    }
}

/// Rewrite `-from`, `-to=X`, `-yes` and friends to their `--` form so clap does
/// not read `-from` as `-f rom`. Arguments after `--` are left alone.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if passthrough {
                return arg;
            }

            let Some(text) = arg.to_str().map(str::to_owned) else {
                return arg;
            };

            if text == "--" {
                passthrough = true;
                return arg;
            }

            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if SINGLE_DASH_LONG.contains(&name) {
                        OsString::from(format!("-{text}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

pub fn show_build_info() {
    println!("Version: {}", crate::built_info::PKG_VERSION);

    println!("Built: {}", crate::built_info::BUILT_TIME_UTC);

    if let Some(hash) = crate::built_info::GIT_COMMIT_HASH {
        println!("Commit: {hash}");
    } else {
        println!("Commit: unknown");
    }

    if let Some(branch) = crate::built_info::GIT_HEAD_REF {
        println!("Branch: {branch}");
    } else {
        println!("Branch: unknown");
    }

    println!("Target: {}", crate::built_info::TARGET);
    println!("Rustc: {}", crate::built_info::RUSTC_VERSION);

    match crate::built_info::GIT_DIRTY {
        Some(true) => println!("Git status: dirty (uncommitted changes)"),
        Some(false) => println!("Git status: clean"),
        None => println!("Git status: unknown"),
    }

    println!("Profile: {}", crate::built_info::PROFILE);
}
