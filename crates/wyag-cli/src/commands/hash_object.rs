use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use wyag_object::{Object, ObjectType};

use super::open_repo;

#[derive(Args)]
pub struct HashObjectArgs {
    /// Hash the payload as this object type
    #[arg(short = 't', value_name = "type", default_value = "blob")]
    obj_type: ObjectType,

    /// Also write the object into the repository
    #[arg(short = 'w')]
    write: bool,

    /// File whose contents to hash
    #[arg(value_name = "path")]
    path: PathBuf,
}

pub fn run(args: &HashObjectArgs) -> Result<i32> {
    let data = std::fs::read(&args.path)?;
    // Decoding validates the payload for the named type; a blob passes
    // unchanged, a malformed commit/tree/tag is rejected here.
    let obj = Object::parse_payload(args.obj_type, &data)?;

    let oid = if args.write {
        let repo = open_repo()?;
        repo.objects().write(&obj)?
    } else {
        obj.id()?
    };

    println!("{oid}");
    Ok(0)
}
