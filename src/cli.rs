//! CLI argument parsing and build dispatch

use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::info;

use feature_appbuilder::config::BuilderConfig;
use feature_appbuilder::defaults::DEFAULT_OUTPUT;
use feature_appbuilder::error::Error;
use feature_appbuilder::path::split_list;
use feature_appbuilder::phases::orchestrator;

/// Feature Application Builder - Assemble feature descriptors into an application
#[derive(Parser, Debug)]
#[command(name = "applicationbuilder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Set repository urls (comma separated)
    #[arg(
        short = 'u',
        long = "repository-urls",
        value_name = "URLS",
        env = "APPBUILDER_REPOSITORY_URLS"
    )]
    repository_urls: Option<String>,

    /// Set feature files (comma separated)
    #[arg(short = 'f', long = "files", value_name = "FILES")]
    files: Option<String>,

    /// Set feature file dirs (comma separated)
    #[arg(short = 'd', long = "dirs", value_name = "DIRS")]
    dirs: Option<String>,

    /// Set output file
    #[arg(short = 'o', long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// sling.properties file (accepted, not read)
    #[arg(short = 'p', long = "properties", value_name = "PATH")]
    properties: Option<PathBuf>,

    /// Set felix framework version (also accepted as -fv)
    #[arg(long = "framework-version", alias = "fv", value_name = "VERSION")]
    framework_version: Option<String>,

    /// Set cache dir
    #[arg(
        short = 'c',
        long = "cache-dir",
        value_name = "PATH",
        env = "APPBUILDER_CACHE_DIR"
    )]
    cache_dir: Option<PathBuf>,

    /// Verbose
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Flags whose value may be given as the next argument.
const VALUE_FLAGS: &[&str] = &[
    "-u",
    "--repository-urls",
    "-f",
    "--files",
    "-d",
    "--dirs",
    "-o",
    "--output",
    "-p",
    "--properties",
    "--framework-version",
    "-c",
    "--cache-dir",
];

/// Rewrite the single-dash two-letter `-fv` flag into its long form.
///
/// Standard parsing would read `-fv` as `-f v`. An argument that is the
/// value of a preceding flag (`-o -fv`) and everything after `--` are left
/// untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expects_value = false;
    let mut positional_only = false;

    for arg in args.into_iter().map(Into::into) {
        if expects_value || positional_only {
            expects_value = false;
            normalized.push(arg);
            continue;
        }
        let rewritten = match arg.to_str() {
            Some("--") => {
                positional_only = true;
                arg
            }
            Some("-fv") => {
                expects_value = true;
                OsString::from("--framework-version")
            }
            Some(s) if s.starts_with("-fv=") => {
                OsString::from(format!("--framework-version={}", &s["-fv=".len()..]))
            }
            Some(s) if VALUE_FLAGS.contains(&s) => {
                expects_value = true;
                arg
            }
            _ => arg,
        };
        normalized.push(rewritten);
    }
    normalized
}

impl Cli {
    /// Parse arguments, accepting the `-fv` spelling.
    pub fn parse_args<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Build the immutable configuration, rejecting a missing input source.
    pub fn into_config(self) -> std::result::Result<BuilderConfig, Error> {
        if self.files.is_none() && self.dirs.is_none() {
            return Err(Error::Usage {
                message: "Required argument missing: model files or directory".to_string(),
            });
        }

        Ok(BuilderConfig {
            output: self.output,
            files: self.files.as_deref().map(split_list).unwrap_or_default(),
            dirs: self
                .dirs
                .as_deref()
                .map(split_list)
                .unwrap_or_default()
                .into_iter()
                .map(PathBuf::from)
                .collect(),
            repository_urls: self
                .repository_urls
                .as_deref()
                .map(split_list)
                .unwrap_or_default(),
            properties_file: self.properties,
            framework_version: self.framework_version,
            cache_dir: self.cache_dir,
            verbose: self.verbose,
        })
    }

    /// Run the build described by these arguments.
    pub fn execute(self) -> Result<()> {
        let config = match self.into_config() {
            Ok(config) => config,
            Err(e) => {
                print_usage();
                return Err(e.into());
            }
        };

        let app = orchestrator::execute(&config)?;
        info!(
            "Assembled {} features into {} bundles",
            app.features.len(),
            app.bundles.len()
        );
        Ok(())
    }
}

/// Print usage help to stderr.
pub fn print_usage() {
    let help = Cli::command().render_help();
    let _ = writeln!(std::io::stderr(), "{}", help);
}

/// Set up `env_logger`: `[LEVEL] message` lines, `info` by default or
/// `debug` when verbose. `RUST_LOG` takes precedence when set.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();
}
