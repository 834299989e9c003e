//! `Authorization: Basic` header decoding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Decode an `Authorization` header value into a username/password pair.
///
/// Expects the `Basic <base64(user:pass)>` form; the scheme is matched
/// case-insensitively per RFC 7617. Returns `None` for any other scheme,
/// invalid base64, non-UTF-8 credentials, or a missing `:` separator.
pub fn parse_basic_auth(header: &str) -> Option<(String, String)> {
    let encoded = header
        .get(..6)
        .filter(|scheme| scheme.eq_ignore_ascii_case("basic "))
        .map(|_| header[6..].trim())?;

    let decoded = STANDARD.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn test_parse_well_formed_header() {
        let (user, pass) = parse_basic_auth(&encode("sarah1:abc123")).unwrap();
        assert_eq!(user, "sarah1");
        assert_eq!(pass, "abc123");
    }

    #[test]
    fn test_parse_scheme_is_case_insensitive() {
        let header = format!("basic {}", STANDARD.encode("sarah1:abc123"));
        assert!(parse_basic_auth(&header).is_some());
    }

    #[test]
    fn test_parse_password_may_contain_colons() {
        let (user, pass) = parse_basic_auth(&encode("sarah1:a:b:c")).unwrap();
        assert_eq!(user, "sarah1");
        assert_eq!(pass, "a:b:c");
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert!(parse_basic_auth("Bearer abc.def.ghi").is_none());
    }

    #[test]
    fn test_parse_rejects_bad_base64() {
        assert!(parse_basic_auth("Basic !!!not-base64!!!").is_none());
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let header = format!("Basic {}", STANDARD.encode("no-colon-here"));
        assert!(parse_basic_auth(&header).is_none());
    }

    #[test]
    fn test_parse_rejects_short_header() {
        assert!(parse_basic_auth("Basic").is_none());
        assert!(parse_basic_auth("").is_none());
    }
}
