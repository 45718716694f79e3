use clap::Args;
use shopkeys_core::{Error, Result, GOOGLE_MAPS_API_KEY};
use shopkeys_secrets::{InfoDictionary, LaunchSequence, MapsServices, PluginRegistrant};
use std::io::Write;
use std::path::PathBuf;

#[derive(Args)]
pub struct LaunchArgs {
    /// Bundle info dictionary as a JSON object
    #[arg(long, value_name = "FILE")]
    pub info: PathBuf,

    /// Metadata key holding the maps API key
    #[arg(long, value_name = "KEY", default_value = GOOGLE_MAPS_API_KEY)]
    pub key: String,
}

/// Stands in for the maps SDK; records that a key arrived
#[derive(Default)]
struct MapsRecorder {
    provided: bool,
}

impl MapsServices for MapsRecorder {
    fn provide_api_key(&mut self, key: &str) {
        tracing::info!(length = key.len(), "Maps API key provided");
        self.provided = true;
    }
}

/// Stands in for the generated plugin registrant
#[derive(Default)]
struct PluginRecorder {
    registered: bool,
}

impl PluginRegistrant for PluginRecorder {
    fn register_plugins(&mut self) {
        tracing::info!("Plugins registered");
        self.registered = true;
    }
}

pub fn execute(args: LaunchArgs, out: &mut impl Write) -> Result<()> {
    let metadata = InfoDictionary::from_file(&args.info)?;
    let sequence = LaunchSequence::new(args.key);

    let mut maps = MapsRecorder::default();
    let mut plugins = PluginRecorder::default();
    sequence.did_finish_launching(&metadata, &mut maps, &mut plugins, || true)?;

    writeln!(
        out,
        "launch ok: key={} provided={} plugins_registered={}",
        sequence.metadata_key(),
        maps.provided,
        plugins.registered
    )
    .map_err(|e| Error::file_system("<stdout>", "write", e))
}
