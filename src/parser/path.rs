/// A path split into directory, file name and extension
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathParts<'a> {
    pub dir: &'a str,
    pub file: &'a str,
    pub ext: &'a str,
}

/// Split a path so that `dir + file + "." + ext` gives it back
/// (the "." only when `ext` is non-empty).
///
/// A last segment starting with its only '.' (".htaccess") has no extension.
pub fn split_path(path: &str) -> PathParts<'_> {
    let dir_len = memchr::memrchr(b'/', path.as_bytes()).map_or(0, |slash| slash + 1);
    let (dir, segment) = path.split_at(dir_len);

    let (file, ext) = match memchr::memrchr(b'.', segment.as_bytes()) {
        Some(dot) if dot > 0 && dot + 1 < segment.len() => (&segment[..dot], &segment[dot + 1..]),
        _ => (segment, ""),
    };

    PathParts { dir, file, ext }
}
