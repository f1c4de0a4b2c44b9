use std::io::{self, Write};

use anyhow::Result;
use bstr::ByteSlice;
use clap::Args;
use wyag_object::{Object, ObjectType};

use super::open_repo;

#[derive(Args)]
pub struct LsTreeArgs {
    /// Tree to list (a commit id is peeled to its tree)
    #[arg(value_name = "object")]
    object: String,
}

pub fn run(args: &LsTreeArgs) -> Result<i32> {
    let repo = open_repo()?;
    let (_oid, obj) = wyag_revwalk::find(&repo, &args.object, Some(ObjectType::Tree))?;
    let tree = match obj {
        Object::Tree(tree) => tree,
        other => anyhow::bail!("expected a tree, got {}", other.object_type()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for entry in tree.iter() {
        // The child's type comes from its own envelope header.
        let (child_type, _size) = repo.objects().read_header(&entry.oid)?;
        writeln!(
            out,
            "{} {} {}\t{}",
            entry.mode_padded().as_bstr(),
            child_type,
            entry.oid,
            entry.path.as_bstr(),
        )?;
    }
    Ok(0)
}
