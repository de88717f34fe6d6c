// src/bin/cli.rs
use color_eyre::eyre::eyre;
use fpl_rules::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // Box<dyn Error> isn't Send + Sync, so carry the message across.
    cli::run().map_err(|e| {
        fpl_rules::loge!("CLI: {e}");
        eyre!("{e}")
    })
}
