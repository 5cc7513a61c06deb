use crate::checkers::parse_port;
use crate::error::{MalformedUrlError, Result};

/// Pieces of a `user:pass@host:port` authority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Authority<'a> {
    pub user: &'a str,
    pub pass: &'a str,
    pub host: &'a str,
    pub port: u16,
}

/// Split host and port. IP literals keep their brackets.
fn split_host_port(host_and_port: &str) -> Result<(&str, Option<&str>)> {
    if host_and_port.starts_with('[') {
        // IPv6: [::1]:8080 or [::1]
        let bracket_end = memchr::memchr(b']', host_and_port.as_bytes())
            .ok_or(MalformedUrlError::InvalidHost)?;
        let ip_literal = &host_and_port[..=bracket_end];
        let rest = &host_and_port[bracket_end + 1..];
        if rest.is_empty() {
            return Ok((ip_literal, None));
        }
        let port = rest
            .strip_prefix(':')
            .ok_or(MalformedUrlError::InvalidHost)?;
        return Ok((ip_literal, Some(port)));
    }

    // Regular host or IPv4
    Ok(memchr::memrchr(b':', host_and_port.as_bytes()).map_or(
        (host_and_port, None),
        |colon_pos| {
            (
                &host_and_port[..colon_pos],
                Some(&host_and_port[colon_pos + 1..]),
            )
        },
    ))
}

/// Parse the text between `//` and the path.
///
/// # Errors
///
/// Returns `InvalidPort` for a non-numeric or out-of-range port and
/// `InvalidHost` when the host is empty but userinfo or a port is given.
pub fn parse_authority(input: &str) -> Result<Authority<'_>> {
    let (userinfo, host_and_port) = match memchr::memrchr(b'@', input.as_bytes()) {
        Some(at) => (Some(&input[..at]), &input[at + 1..]),
        None => (None, input),
    };

    let (user, pass) = userinfo.map_or(("", ""), |userinfo| {
        memchr::memchr(b':', userinfo.as_bytes()).map_or((userinfo, ""), |colon| {
            (&userinfo[..colon], &userinfo[colon + 1..])
        })
    });

    let (host, port_str) = split_host_port(host_and_port)?;
    if host.is_empty() && (userinfo.is_some() || port_str.is_some()) {
        return Err(MalformedUrlError::InvalidHost);
    }

    let port = match port_str {
        Some(port) => parse_port(port).ok_or(MalformedUrlError::InvalidPort)?,
        None => 0,
    };

    Ok(Authority {
        user,
        pass,
        host,
        port,
    })
}
