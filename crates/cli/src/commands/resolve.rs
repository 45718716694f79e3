use clap::{Args, ValueEnum};
use serde::Serialize;
use shopkeys_core::{Error, Result, ResultExt, Secret, SecretName, SecretSource, SLPY_API_KEY};
use shopkeys_secrets::{ResolverConfig, SecretResolver};
use std::io::Write;
use std::path::PathBuf;

#[derive(Args)]
pub struct ResolveArgs {
    /// Secret names to resolve
    #[arg(value_name = "NAME", default_value = SLPY_API_KEY)]
    pub names: Vec<SecretName>,

    /// Fallback definitions file, relative to the base directory
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Directory the fallback path is resolved against (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// JSON resolver configuration; flags override its fields
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Value)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    Value,
    /// NAME=value lines
    Properties,
    /// JSON array with name, source and value
    Json,
}

#[derive(Serialize)]
struct ResolvedEntry<'a> {
    name: &'a SecretName,
    source: &'a SecretSource,
    value: &'a str,
}

impl ResolveArgs {
    fn resolver_config(&self) -> Result<ResolverConfig> {
        let mut config = match &self.config {
            Some(path) => ResolverConfig::from_file(path)
                .with_context(|| format!("loading resolver config '{}'", path.display()))?,
            None => ResolverConfig::default(),
        };
        if let Some(env_file) = &self.env_file {
            config = config.with_env_file(env_file);
        }
        if let Some(base_dir) = &self.base_dir {
            config = config.with_base_dir(base_dir);
        }
        Ok(config)
    }
}

pub fn execute(args: ResolveArgs, out: &mut impl Write) -> Result<()> {
    let resolver = SecretResolver::new(args.resolver_config()?);
    tracing::debug!(
        fallback = %resolver.fallback_path().display(),
        count = args.names.len(),
        "Resolving secrets"
    );

    let secrets = resolver.resolve_all(&args.names);
    for secret in secrets.iter().filter(|s| !s.is_present()) {
        tracing::info!(name = %secret.name(), "No source supplied a value");
    }

    render(&secrets, args.format, out)
}

fn render(secrets: &[Secret], format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let write_error = |e| Error::file_system("<stdout>", "write", e);

    match format {
        OutputFormat::Value => {
            for secret in secrets {
                writeln!(out, "{}", secret.value().expose()).map_err(write_error)?;
            }
        }
        OutputFormat::Properties => {
            for secret in secrets {
                writeln!(out, "{}={}", secret.name(), secret.value().expose())
                    .map_err(write_error)?;
            }
        }
        OutputFormat::Json => {
            let entries: Vec<ResolvedEntry<'_>> = secrets
                .iter()
                .map(|s| ResolvedEntry {
                    name: s.name(),
                    source: s.source(),
                    value: s.value().expose(),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out).map_err(write_error)?;
        }
    }

    out.flush().map_err(write_error)
}
