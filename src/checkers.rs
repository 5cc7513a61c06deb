/// Check if a string is a valid scheme name.
/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn is_scheme(input: &str) -> bool {
    let bytes = input.as_bytes();
    let Some((first, rest)) = bytes.split_first() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && rest
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// Parse a port string to u16.
/// Returns None if it contains non-digit characters or is out of range.
/// An empty port is valid and means "no port".
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() {
        return Some(0);
    }
    if !port.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    port.parse::<u16>().ok()
}
