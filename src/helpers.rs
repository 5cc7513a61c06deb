/// Characters stripped from both ends of a URL on construction
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Trim surrounding whitespace and NUL bytes, keeping the rest verbatim
pub fn trim_url(input: &str) -> &str {
    input.trim_matches(TRIMMED)
}

/// Split fragment (#hash) off a URL string.
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn split_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split query (?search) off a URL string that has no fragment.
/// Returns (`url_without_query`, `query_without_question_mark`)
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split a string at the first '/', keeping the slash with the tail
pub fn split_at_slash(input: &str) -> (&str, &str) {
    memchr::memchr(b'/', input.as_bytes()).map_or((input, ""), |pos| input.split_at(pos))
}
