use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use wyag_object::{Object, ObjectType};

use super::open_repo;

#[derive(Args)]
pub struct CheckoutArgs {
    /// Commit or tree to materialize
    #[arg(value_name = "object")]
    object: String,

    /// Destination: a nonexistent path or an existing empty directory
    #[arg(value_name = "dir")]
    dir: PathBuf,
}

pub fn run(args: &CheckoutArgs) -> Result<i32> {
    let repo = open_repo()?;
    // A commit peels to its tree; a tree is taken as-is.
    let (_oid, obj) = wyag_revwalk::find(&repo, &args.object, Some(ObjectType::Tree))?;
    let tree = match obj {
        Object::Tree(tree) => tree,
        other => anyhow::bail!("expected a tree, got {}", other.object_type()),
    };

    repo.checkout(&tree, &args.dir)?;
    Ok(0)
}
