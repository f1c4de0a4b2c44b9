use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct RevParseArgs {
    /// Name to resolve, optionally suffixed with ^{type}
    #[arg(value_name = "query")]
    query: String,
}

pub fn run(args: &RevParseArgs) -> Result<i32> {
    let repo = open_repo()?;
    let (name, wanted) = wyag_revwalk::parse_query(&args.query)?;
    let (oid, _) = wyag_revwalk::find(&repo, name, wanted)?;
    println!("{oid}");
    Ok(0)
}
