/// The named parts of a URL, in the order they are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    Scheme,
    User,
    Pass,
    Host,
    Port,
    Dir,
    File,
    Ext,
    Query,
    Fragment,
}

impl Part {
    /// Every part, in canonical order
    pub const ALL: [Self; 10] = [
        Self::Scheme,
        Self::User,
        Self::Pass,
        Self::Host,
        Self::Port,
        Self::Dir,
        Self::File,
        Self::Ext,
        Self::Query,
        Self::Fragment,
    ];

    /// Look up a part by its expression name.
    /// Filters by length and first byte before the full comparison.
    pub fn from_name(name: &str) -> Option<Self> {
        let bytes = name.as_bytes();

        match (bytes.len(), bytes.first()) {
            (3, Some(b'd')) if bytes == b"dir" => Some(Self::Dir),
            (3, Some(b'e')) if bytes == b"ext" => Some(Self::Ext),
            (4, Some(b'u')) if bytes == b"user" => Some(Self::User),
            (4, Some(b'p')) if bytes == b"pass" => Some(Self::Pass),
            (4, Some(b'p')) if bytes == b"port" => Some(Self::Port),
            (4, Some(b'h')) if bytes == b"host" => Some(Self::Host),
            (4, Some(b'f')) if bytes == b"file" => Some(Self::File),
            (5, Some(b'q')) if bytes == b"query" => Some(Self::Query),
            (6, Some(b's')) if bytes == b"scheme" => Some(Self::Scheme),
            (8, Some(b'f')) if bytes == b"fragment" => Some(Self::Fragment),
            _ => None,
        }
    }

    /// The expression name of this part
    pub fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::User => "user",
            Self::Pass => "pass",
            Self::Host => "host",
            Self::Port => "port",
            Self::Dir => "dir",
            Self::File => "file",
            Self::Ext => "ext",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl core::fmt::Display for Part {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

/// Value of a single part: text for everything but the port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartValue<'a> {
    Text(&'a str),
    /// Port number, 0 when absent
    Port(u16),
}

impl PartValue<'_> {
    /// Empty text and port 0 both count as absent
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Port(port) => *port == 0,
        }
    }
}

impl core::fmt::Display for PartValue<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Port(0) => Ok(()),
            Self::Port(port) => write!(f, "{port}"),
        }
    }
}
