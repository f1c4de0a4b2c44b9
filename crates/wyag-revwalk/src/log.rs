use std::collections::HashSet;
use std::io::Write;

use wyag_hash::ObjectId;
use wyag_object::Object;
use wyag_repository::Repository;

use crate::RevWalkError;

/// One in-progress commit on the DFS stack: the commit's id, its parents
/// in header order, and how many of them have been emitted so far.
struct Frame {
    oid: ObjectId,
    parents: Vec<ObjectId>,
    next: usize,
}

/// Render the ancestry of `start` as a DOT digraph.
///
/// Depth-first over parent edges in header order; every edge
/// `c_<sha> -> c_<parent>` is written, in the order a recursive walk
/// would produce. Commits are expanded once, so shared ancestry (and any
/// cycle a corrupt graph might contain) does not re-walk the same
/// subgraph; the edges of the first visit keep their order.
pub fn write_log(
    repo: &Repository,
    out: &mut dyn Write,
    start: &ObjectId,
) -> Result<(), RevWalkError> {
    writeln!(out, "digraph wyaglog{{")?;

    let mut visited: HashSet<ObjectId> = HashSet::new();
    visited.insert(*start);
    let mut stack = vec![frame(repo, start)?];

    while let Some(top) = stack.last_mut() {
        if top.next >= top.parents.len() {
            stack.pop();
            continue;
        }
        let parent = top.parents[top.next];
        top.next += 1;
        writeln!(out, "c_{} -> c_{}", top.oid, parent)?;
        if visited.insert(parent) {
            stack.push(frame(repo, &parent)?);
        }
    }

    writeln!(out, "}}")?;
    Ok(())
}

fn frame(repo: &Repository, oid: &ObjectId) -> Result<Frame, RevWalkError> {
    match repo.objects().read(oid)? {
        Object::Commit(commit) => Ok(Frame {
            oid: *oid,
            parents: commit.parents()?,
            next: 0,
        }),
        _ => Err(RevWalkError::NotACommit(*oid)),
    }
}
