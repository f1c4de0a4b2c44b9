use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::open_repo;

#[derive(Args)]
pub struct ShowRefArgs {}

pub fn run(_args: &ShowRefArgs) -> Result<i32> {
    let repo = open_repo()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (name, oid) in repo.refs().list()? {
        writeln!(out, "{oid} {name}")?;
    }
    Ok(0)
}
