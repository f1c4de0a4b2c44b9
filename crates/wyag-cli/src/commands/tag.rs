use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct TagArgs {
    /// Create an annotated tag object instead of a lightweight ref
    #[arg(short = 'a')]
    annotated: bool,

    /// Tag name
    #[arg(value_name = "name")]
    name: String,

    /// Object the tag points at
    #[arg(value_name = "object")]
    object: String,
}

pub fn run(args: &TagArgs) -> Result<i32> {
    let repo = open_repo()?;
    let (oid, _) = wyag_revwalk::find(&repo, &args.object, None)?;
    repo.create_tag(&args.name, &oid, args.annotated)?;
    Ok(0)
}
