//! Maps a request target to one of the fixed routes.
//!
//! | Target                      | Status | Body                     |
//! |-----------------------------|--------|--------------------------|
//! | `/` (exact)                 | 200    | empty                    |
//! | `/echo/<suffix>` (prefix)   | 200    | `<suffix>`               |
//! | contains `/user-agent`      | 200    | trimmed User-Agent value |
//! | anything else               | 404    | empty                    |
//!
//! Routes are tried top to bottom and the first match wins, so
//! `/echo/user-agent` echoes rather than reporting the User-Agent.

use crate::http::request::Request;
use crate::http::response::Response;

const ECHO_PREFIX: &str = "/echo/";
const USER_AGENT_SEGMENT: &str = "/user-agent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    Root,
    /// Text following the `/echo/` prefix.
    Echo(&'a str),
    UserAgent,
    NotFound,
}

impl<'a> Route<'a> {
    pub fn resolve(target: &'a str) -> Self {
        if target == "/" {
            return Route::Root;
        }

        if let Some(suffix) = target.strip_prefix(ECHO_PREFIX) {
            return Route::Echo(suffix);
        }

        if target.contains(USER_AGENT_SEGMENT) {
            return Route::UserAgent;
        }

        Route::NotFound
    }
}

/// Builds the response for `request`. Pure: no I/O, no shared state.
pub fn route(request: &Request) -> Response {
    let version = request.version.as_str();

    match Route::resolve(&request.target) {
        Route::Root => Response::ok(version, ""),
        Route::Echo(suffix) => Response::ok(version, suffix),
        Route::UserAgent => Response::ok(version, request.user_agent()),
        Route::NotFound => Response::not_found(version),
    }
}
