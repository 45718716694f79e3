use clap::Subcommand;

pub mod launch;
pub mod resolve;

use self::launch::LaunchArgs;
use self::resolve::ResolveArgs;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve secrets from the environment, then the fallback .env file
    ///
    /// Never fails: a secret no source can supply resolves to an empty value.
    #[command(visible_alias = "r")]
    Resolve(ResolveArgs),

    /// Run the launch key check against a bundle info dictionary
    ///
    /// Fails when the dictionary has no string value for the key.
    Launch(LaunchArgs),
}
