/// A parsed HTTP request.
///
/// `method`, `target` and `version` stay empty until a request line has been
/// read. `host` and `user_agent` hold the raw header token, which may still
/// carry the line terminator; use [`Request::host`] and
/// [`Request::user_agent`] for the trimmed values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// Method token as sent by the client (e.g. "GET")
    pub method: String,
    /// Raw request target, not URL-decoded (e.g. "/echo/abc")
    pub target: String,
    /// Protocol version (typically "HTTP/1.1")
    pub version: String,
    pub host: String,
    pub user_agent: String,
}

impl Request {
    /// Whether the method token is exactly `GET`, the only verb served.
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }

    /// Whether a request line was seen while parsing.
    pub fn has_request_line(&self) -> bool {
        !self.version.is_empty()
    }

    pub fn host(&self) -> &str {
        self.host.trim()
    }

    /// User-Agent header value with surrounding whitespace removed.
    pub fn user_agent(&self) -> &str {
        self.user_agent.trim()
    }
}

/// Builder for constructing Request objects.
#[derive(Debug, Default)]
pub struct RequestBuilder {
    request: Request,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.request.method = method.into();
        self
    }

    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.request.target = target.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.request.version = version.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.request.host = host.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.request.user_agent = user_agent.into();
        self
    }

    pub fn build(self) -> Request {
        self.request
    }
}
