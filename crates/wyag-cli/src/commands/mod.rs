pub mod cat_file;
pub mod checkout;
pub mod hash_object;
pub mod init;
pub mod log;
pub mod ls_tree;
pub mod rev_parse;
pub mod show_ref;
pub mod tag;

use anyhow::Result;
use clap::Subcommand;
use wyag_repository::Repository;

use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty repository
    Init(init::InitArgs),
    /// Print the content of a repository object
    CatFile(cat_file::CatFileArgs),
    /// Compute an object id and optionally store the object
    HashObject(hash_object::HashObjectArgs),
    /// Print commit ancestry as a DOT graph
    Log(log::LogArgs),
    /// List the contents of a tree object
    LsTree(ls_tree::LsTreeArgs),
    /// Materialize a commit or tree into an empty directory
    Checkout(checkout::CheckoutArgs),
    /// List references with their resolved ids
    ShowRef(show_ref::ShowRefArgs),
    /// Create a lightweight or annotated tag
    Tag(tag::TagArgs),
    /// Resolve a name, optionally peeled with ^{type}
    RevParse(rev_parse::RevParseArgs),
}

pub fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Init(args) => init::run(&args),
        Commands::CatFile(args) => cat_file::run(&args),
        Commands::HashObject(args) => hash_object::run(&args),
        Commands::Log(args) => log::run(&args),
        Commands::LsTree(args) => ls_tree::run(&args),
        Commands::Checkout(args) => checkout::run(&args),
        Commands::ShowRef(args) => show_ref::run(&args),
        Commands::Tag(args) => tag::run(&args),
        Commands::RevParse(args) => rev_parse::run(&args),
    }
}

/// Open the repository containing the current working directory.
pub(crate) fn open_repo() -> Result<Repository> {
    let cwd = std::env::current_dir()?;
    Ok(Repository::discover(cwd)?)
}
