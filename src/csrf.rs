//! Reading the CSRF token out of the browser cookie string.

use cookie::Cookie;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

/// Where the raw `name=value; name=value` cookie string comes from.
pub trait CookieSource {
    fn cookie_string(&self) -> Option<String>;
}

/// `document.cookie`, re-read on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

impl CookieSource for DocumentCookies {
    fn cookie_string(&self) -> Option<String> {
        let document = window()?.document()?;
        let html_doc: &HtmlDocument = document.unchecked_ref();
        html_doc.cookie().ok()
    }
}

/// Returns the percent-decoded value of the first cookie called `name`.
///
/// Entries that are not `name=value` or do not decode as UTF-8 are skipped.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .filter(|kv| !kv.is_empty())
        .filter_map(|kv| Cookie::parse_encoded(kv).ok())
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        assert_eq!(
            parse_cookie("a=1; csrftoken=abc%20def; b=2", "csrftoken").as_deref(),
            Some("abc def")
        );
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(parse_cookie("a=1; b=2", "csrftoken"), None);
        assert_eq!(parse_cookie("", "csrftoken"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        assert_eq!(parse_cookie("xcsrftoken=nope; csrftokenx=no", "csrftoken"), None);
        assert_eq!(
            parse_cookie("xcsrftoken=nope;csrftoken=yes", "csrftoken").as_deref(),
            Some("yes")
        );
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(
            parse_cookie("csrftoken=first; csrftoken=second", "csrftoken").as_deref(),
            Some("first")
        );
    }

    #[test]
    fn malformed_entries_are_skipped() {
        assert_eq!(
            parse_cookie("garbage; ; csrftoken=tok", "csrftoken").as_deref(),
            Some("tok")
        );
    }
}
