use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Everything except RFC 3986 unreserved characters is escaped, so `/` becomes
/// `%2F` and a space becomes `%20`, never `+`.
const CALLBACK_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Terminal outcome of the gate for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    Continue,
    RedirectTo {
        login_path: String,
        /// Original request path, percent-encoded for use as a query value.
        callback_url: String,
    },
}

impl Decision {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Decision::RedirectTo { .. })
    }

    /// `Location` target for a redirect, e.g. `/login?callbackUrl=%2Fdashboard`.
    pub fn location(&self, callback_param: &str) -> Option<String> {
        match self {
            Decision::Continue => None,
            Decision::RedirectTo {
                login_path,
                callback_url,
            } => Some(format!("{login_path}?{callback_param}={callback_url}")),
        }
    }
}

/// Percent-encode a path so it survives as a query parameter value.
pub fn encode_callback(path: &str) -> String {
    utf8_percent_encode(path, CALLBACK_ESCAPE).to_string()
}

/// Inverse of [`encode_callback`]. Plain percent-decoding: `+` stays `+`.
pub fn decode_callback(encoded: &str) -> String {
    percent_decode_str(encoded).decode_utf8_lossy().into_owned()
}
