use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use wyag_repository::Repository;

#[derive(Args)]
pub struct InitArgs {
    /// Where to create the repository
    #[arg(value_name = "path", default_value = ".")]
    path: PathBuf,
}

pub fn run(args: &InitArgs) -> Result<i32> {
    Repository::init(&args.path)?;
    Ok(0)
}
