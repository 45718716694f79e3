use crate::commands::{launch, resolve, Commands};
use shopkeys_core::Result;

impl Commands {
    pub fn execute(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match self {
            Commands::Resolve(args) => resolve::execute(args, &mut out),
            Commands::Launch(args) => launch::execute(args, &mut out),
        }
    }
}
