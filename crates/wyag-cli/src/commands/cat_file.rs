use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct CatFileArgs {
    /// Expected object type (informational)
    #[arg(value_name = "type")]
    obj_type: String,

    /// Object to print
    #[arg(value_name = "object")]
    object: String,
}

pub fn run(args: &CatFileArgs) -> Result<i32> {
    let repo = open_repo()?;
    let (_oid, obj) = wyag_revwalk::find(&repo, &args.object, None)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(&obj.serialize_payload())?;
    Ok(0)
}
