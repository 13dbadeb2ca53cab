//! Cookie access for the auth store.
//!
//! All four auth cookies are client-readable by contract (`SameSite=Lax`,
//! no `HttpOnly`): `accessToken`, `refreshToken`, `isAuthenticated`, and
//! `user` (URL-encoded JSON snapshot). Parsing is kept pure so it can be
//! tested natively; only the `document.cookie` accessors are wasm-gated.

pub const ACCESS_TOKEN: &str = "accessToken";
pub const REFRESH_TOKEN: &str = "refreshToken";
pub const IS_AUTHENTICATED: &str = "isAuthenticated";
pub const USER: &str = "user";

/// Thirty days, matching the backend refresh-token lifetime.
const MAX_AGE_SECS: u64 = 60 * 60 * 24 * 30;

/// Find a cookie's raw value in a `document.cookie`-style string
/// (`"a=1; b=2"`).
pub fn find_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then_some(value.trim())
    })
}

/// Minimal percent-decoding for the `user` cookie value.
pub fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 3 <= bytes.len() => {
                let byte = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                if let Some(byte) = byte {
                    out.push(byte);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encoding for the `user` cookie value: everything a cookie value
/// cannot carry verbatim.
pub fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Read a cookie from the browser. Returns `None` off-wasm (server render
/// never trusts the in-memory store anyway).
pub fn get(name: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let header = document_cookie()?;
        find_cookie(&header, name).map(|v| v.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = name;
        None
    }
}

/// Write a cookie with the shared auth attributes.
pub fn set(name: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    set_document_cookie(&format!(
        "{name}={value}; Path=/; Max-Age={MAX_AGE_SECS}; SameSite=Lax"
    ));
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (name, value);
    }
}

/// Expire a cookie immediately.
pub fn remove(name: &str) {
    #[cfg(target_arch = "wasm32")]
    set_document_cookie(&format!("{name}=; Path=/; Max-Age=0; SameSite=Lax"));
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = name;
    }
}

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn document_cookie() -> Option<String> {
    html_document()?.cookie().ok()
}

#[cfg(target_arch = "wasm32")]
fn set_document_cookie(cookie: &str) {
    if let Some(doc) = html_document() {
        if let Err(e) = doc.set_cookie(cookie) {
            web_sys::console::warn_1(&format!("failed to set cookie: {e:?}").into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_cookie() {
        let header = "accessToken=abc.def; isAuthenticated=true; user=%7B%22id%22%3A%221%22%7D";
        assert_eq!(find_cookie(header, "accessToken"), Some("abc.def"));
        assert_eq!(find_cookie(header, "isAuthenticated"), Some("true"));
        assert_eq!(find_cookie(header, "missing"), None);
        // Name must match exactly, not as a suffix.
        assert_eq!(find_cookie("xaccessToken=zzz", "accessToken"), None);
    }

    #[test]
    fn test_find_cookie_tolerates_spacing() {
        assert_eq!(find_cookie("a=1;b=2 ;  c=3", "c"), Some("3"));
        assert_eq!(find_cookie("", "a"), None);
    }

    #[test]
    fn test_percent_roundtrip_user_snapshot() {
        let json = r#"{"id":"u1","name":"Ana Tran","role":"ADMIN"}"#;
        let encoded = percent_encode(json);
        assert!(!encoded.contains('{'));
        assert!(!encoded.contains(' '));
        assert_eq!(percent_decode(&encoded), json);
    }

    #[test]
    fn test_percent_decode_garbage_is_preserved() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }
}
