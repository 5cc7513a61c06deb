mod authority;
mod path;

use authority::{Authority, parse_authority};
use path::{PathParts, split_path};

use crate::checkers::is_scheme;
use crate::compat::ToString;
use crate::error::Result;
use crate::helpers::{split_at_slash, split_fragment, split_query};
use crate::url_parts::UrlParts;

/// Split off a leading `scheme:`, if the text before the first ':' is a scheme
fn split_scheme(input: &str) -> (Option<&str>, &str) {
    match memchr::memchr(b':', input.as_bytes()) {
        Some(colon) if is_scheme(&input[..colon]) => (Some(&input[..colon]), &input[colon + 1..]),
        _ => (None, input),
    }
}

/// Split a URL string into its parts.
///
/// Fragment, then query, then scheme are cut off; an authority is read when
/// what remains starts with `//`, and the rest is the path.
///
/// # Errors
///
/// Returns an error if the authority has a bad port or a missing host.
pub fn parse_parts(input: &str) -> Result<UrlParts> {
    let (rest, fragment) = split_fragment(input);
    let (rest, query) = split_query(rest);
    let (scheme, rest) = split_scheme(rest);

    let (authority, path) = match rest.strip_prefix("//") {
        Some(after_slashes) => {
            let (authority, path) = split_at_slash(after_slashes);
            (parse_authority(authority)?, path)
        }
        None => (Authority::default(), rest),
    };

    let PathParts { dir, file, ext } = split_path(path);

    Ok(UrlParts {
        scheme: scheme.unwrap_or_default().to_string(),
        user: authority.user.to_string(),
        pass: authority.pass.to_string(),
        host: authority.host.to_string(),
        port: authority.port,
        path: path.to_string(),
        dir: dir.to_string(),
        file: file.to_string(),
        ext: ext.to_string(),
        query: query.unwrap_or_default().to_string(),
        fragment: fragment.unwrap_or_default().to_string(),
    })
}
