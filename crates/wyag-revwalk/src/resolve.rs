use wyag_hash::ObjectId;
use wyag_object::{Object, ObjectType};
use wyag_ref::RefError;
use wyag_repository::Repository;

use crate::RevWalkError;

/// Short ids are 4 to 16 hex characters; a full id is 40.
const SHORT_HASH_MIN: usize = 4;
const SHORT_HASH_MAX: usize = 16;
const FULL_HASH_LEN: usize = 40;

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Every object id `name` could mean.
///
/// - `HEAD` resolves through the ref store (exactly one candidate);
/// - a full 40-hex id addresses an object directly;
/// - 4 to 16 hex characters prefix-match the loose store;
/// - anything else is tried as a branch, then a tag.
pub fn find_candidates(repo: &Repository, name: &str) -> Result<Vec<ObjectId>, RevWalkError> {
    if name == "HEAD" {
        return Ok(vec![repo.refs().resolve("HEAD")?]);
    }

    if name.len() == FULL_HASH_LEN && is_hex(name) {
        return Ok(vec![ObjectId::from_hex(name)?]);
    }

    if (SHORT_HASH_MIN..=SHORT_HASH_MAX).contains(&name.len()) && is_hex(name) {
        return Ok(repo.objects().find_prefix(name)?);
    }

    let mut found = Vec::new();
    for namespace in ["refs/heads/", "refs/tags/"] {
        match repo.refs().resolve(&format!("{namespace}{name}")) {
            Ok(oid) => found.push(oid),
            Err(RefError::NotFound(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(found)
}

/// Resolve `name` to exactly one object id, or report why not.
pub fn resolve_name(repo: &Repository, name: &str) -> Result<ObjectId, RevWalkError> {
    let candidates = find_candidates(repo, name)?;
    match candidates.len() {
        0 => Err(RevWalkError::NoSuchName(name.to_string())),
        1 => Ok(candidates[0]),
        _ => Err(RevWalkError::Ambiguous {
            name: name.to_string(),
            candidates,
        }),
    }
}

/// Resolve `name` and peel until an object of type `wanted` is reached.
///
/// Peeling chases a tag to its `object` and a commit to its `tree`; any
/// other kind that still mismatches ends the chase with an error.
pub fn find(
    repo: &Repository,
    name: &str,
    wanted: Option<ObjectType>,
) -> Result<(ObjectId, Object), RevWalkError> {
    let mut oid = resolve_name(repo, name)?;
    loop {
        let obj = repo.objects().read(&oid)?;
        let want = match wanted {
            None => return Ok((oid, obj)),
            Some(want) => want,
        };
        if obj.object_type() == want {
            return Ok((oid, obj));
        }
        oid = match &obj {
            Object::Tag(tag) => tag.target()?,
            Object::Commit(commit) => commit.tree()?,
            _ => {
                return Err(RevWalkError::PeelFailed {
                    name: name.to_string(),
                    wanted: want,
                })
            }
        };
    }
}

/// Split a `name[^{type}]` query.
///
/// The suffix is recognized only when the braces hold a non-empty token;
/// the token must then name one of the four object types.
pub fn parse_query(query: &str) -> Result<(&str, Option<ObjectType>), RevWalkError> {
    if let Some(stripped) = query.strip_suffix('}') {
        if let Some(idx) = stripped.rfind("^{") {
            let token = &stripped[idx + 2..];
            if !token.is_empty() {
                let wanted = token
                    .parse::<ObjectType>()
                    .map_err(|_| RevWalkError::InvalidPeelTarget(query.to_string()))?;
                return Ok((&query[..idx], Some(wanted)));
            }
        }
    }
    Ok((query, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_without_suffix() {
        assert_eq!(parse_query("HEAD").unwrap(), ("HEAD", None));
        assert_eq!(parse_query("refs-are-names").unwrap(), ("refs-are-names", None));
    }

    #[test]
    fn query_with_peel_suffix() {
        assert_eq!(
            parse_query("HEAD^{tree}").unwrap(),
            ("HEAD", Some(ObjectType::Tree))
        );
        assert_eq!(
            parse_query("v1.0^{commit}").unwrap(),
            ("v1.0", Some(ObjectType::Commit))
        );
    }

    #[test]
    fn empty_braces_are_part_of_the_name() {
        assert_eq!(parse_query("HEAD^{}").unwrap(), ("HEAD^{}", None));
    }

    #[test]
    fn unknown_peel_type_is_an_error() {
        assert!(matches!(
            parse_query("HEAD^{banana}"),
            Err(RevWalkError::InvalidPeelTarget(_))
        ));
    }

    #[test]
    fn hex_detection() {
        assert!(is_hex("0a380ee1"));
        assert!(is_hex("ABCDef12"));
        assert!(!is_hex("master"));
        assert!(!is_hex(""));
    }
}
