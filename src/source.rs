use std::fmt;
use std::fs;

/// Why a retrieval failed. Carried up to the loader purely for the
/// diagnostic log; the user-facing outcome is the same inline error notice.
#[derive(Debug)]
pub enum FetchError {
    /// Non-success HTTP status from a remote source.
    Status(u16),
    /// Transport-level failure (connection, TLS, DNS).
    Transport(String),
    /// Local file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status(code) => write!(f, "unexpected status {}", code),
            FetchError::Transport(e) => write!(f, "request failed: {}", e),
            FetchError::Io(e) => write!(f, "read failed: {}", e),
        }
    }
}

/// Where the projects JSON comes from. The loader only ever sees the raw
/// body; parsing and rendering happen above this seam.
pub trait ProjectSource: Send + Sync {
    fn fetch(&self) -> Result<String, FetchError>;

    /// Shown in diagnostics ("Could not load projects from ...").
    fn describe(&self) -> String;
}

/// Reads the JSON document from disk on every call. Nothing is cached, so
/// edits to the file show up on the next reload.
pub struct FileSource {
    path: String,
}

impl FileSource {
    pub fn new(path: &str) -> Self {
        FileSource {
            path: path.to_string(),
        }
    }
}

impl ProjectSource for FileSource {
    fn fetch(&self) -> Result<String, FetchError> {
        fs::read_to_string(&self.path).map_err(FetchError::Io)
    }

    fn describe(&self) -> String {
        self.path.clone()
    }
}

/// Fetches the JSON document over HTTP with caching disabled.
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        HttpSource {
            url: url.to_string(),
        }
    }
}

impl ProjectSource for HttpSource {
    fn fetch(&self) -> Result<String, FetchError> {
        // No request timeout: a slow source simply resolves or fails in place.
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let res = client
            .get(&self.url)
            .header("Cache-Control", "no-store")
            .send()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !res.status().is_success() {
            return Err(FetchError::Status(res.status().as_u16()));
        }

        res.text().map_err(|e| FetchError::Transport(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
