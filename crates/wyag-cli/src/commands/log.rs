use std::io;

use anyhow::Result;
use clap::Args;
use wyag_object::ObjectType;

use super::open_repo;

#[derive(Args)]
pub struct LogArgs {
    /// Commit to start the walk from
    #[arg(value_name = "object", default_value = "HEAD")]
    object: String,
}

pub fn run(args: &LogArgs) -> Result<i32> {
    let repo = open_repo()?;
    let (oid, _) = wyag_revwalk::find(&repo, &args.object, Some(ObjectType::Commit))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    wyag_revwalk::write_log(&repo, &mut out, &oid)?;
    Ok(0)
}
