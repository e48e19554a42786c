use anyhow::Result;
use shiftlog::commands::Cli;
use shiftlog::libs::logging;

fn main() -> Result<()> {
    // The guard keeps the diagnostic log writer alive until exit.
    let _guard = logging::init();
    Cli::run()
}
