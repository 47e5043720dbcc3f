//! Cookie transport for the CRM session token.
//!
//! The token is stored as percent-encoded JSON in `pipedrive_access_token`.
//! Nothing is kept server-side; the cookie is the whole session.

use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};

use pipechat_types::token::StoredToken;

pub const TOKEN_COOKIE: &str = "pipedrive_access_token";

/// Raw (decoded, unparsed) token from the request's `Cookie` headers.
pub fn read_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == TOKEN_COOKIE).then_some(value)
        })
        .and_then(percent_decode)
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value carrying `token`.
pub fn token_cookie(token: &StoredToken) -> anyhow::Result<HeaderValue> {
    let json = token.to_json()?;
    let cookie = format!(
        "{TOKEN_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        percent_encode(&json)
    );
    Ok(HeaderValue::from_str(&cookie)?)
}

/// Encode everything outside the RFC 6265 cookie-octet set, plus `%`.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for byte in s.bytes() {
        if is_cookie_octet(byte) && byte != b'%' {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn is_cookie_octet(b: u8) -> bool {
    matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E)
}

/// Decode `%XX` escapes; malformed escapes are kept literally. `None` when
/// the decoded bytes are not UTF-8.
fn percent_decode(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(b) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(b);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).ok()
}
