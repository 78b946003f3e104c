/// HTTP status codes the server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

pub const TEXT_PLAIN: &str = "text/plain";

/// Version used when no request line was read.
pub const DEFAULT_VERSION: &str = "HTTP/1.1";

/// A complete HTTP response ready to be serialized.
///
/// Content-Length is not stored; it is always the byte length of `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Protocol version, mirrored from the request
    pub version: String,
    pub status: StatusCode,
    pub body: String,
}

impl Response {
    /// Creates a 200 OK response with the given body.
    pub fn ok(version: impl Into<String>, body: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .version(version)
            .body(body)
            .build()
    }

    /// Creates a 404 Not Found response with an empty body.
    pub fn not_found(version: impl Into<String>) -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .version(version)
            .build()
    }

    /// Always `text/plain`.
    pub fn content_type(&self) -> &'static str {
        TEXT_PLAIN
    }

    /// Byte length of the body.
    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use hearth::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .version("HTTP/1.1")
///     .body("abc")
///     .build();
/// assert_eq!(response.content_length(), 3);
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    version: String,
    body: String,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            version: DEFAULT_VERSION.to_string(),
            body: String::new(),
        }
    }

    /// Sets the protocol version. An empty version keeps the default.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        if !version.is_empty() {
            self.version = version;
        }
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Response {
        Response {
            version: self.version,
            status: self.status,
            body: self.body,
        }
    }
}
