//! Canonical request construction for AWS Signature Version 4.
//!
//! The signature covers a canonical rendering of the request:
//!
//! ```text
//! HTTPRequestMethod\n
//! CanonicalURI\n
//! CanonicalQueryString\n
//! CanonicalHeaders\n\n
//! SignedHeaders\n
//! HashedPayload
//! ```
//!
//! The store reconstructs this string byte for byte from what arrives on
//! the wire, so every component must be normalized exactly as specified
//! or the signature is rejected.
//!
//! Unlike a verifying server, a signing client owns its header set: the
//! headers passed in are both the canonical headers and the source of the
//! `SignedHeaders` list.

use std::collections::BTreeMap;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters percent-encoded in URI path segments.
///
/// Everything except unreserved characters (A-Z, a-z, 0-9, `-`, `_`,
/// `.`, `~`) is encoded. Segment separators are handled separately.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Render the canonical request string.
///
/// `headers` lists every header to sign as `(name, value)` pairs; each
/// one must be sent on the wire with the value given here.
///
/// # Examples
///
/// ```
/// use dynadoc_http::canonical::canonical_request;
///
/// let canonical = canonical_request(
///     "POST",
///     "/",
///     "",
///     &[("host", "localhost:8000")],
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
/// );
/// assert!(canonical.starts_with("POST\n/\n"));
/// ```
#[must_use]
pub fn canonical_request(
    method: &str,
    path: &str,
    query: &str,
    headers: &[(&str, &str)],
    payload_hash: &str,
) -> String {
    format!(
        "{method}\n{uri}\n{query}\n{headers}\n\n{signed}\n{payload_hash}",
        uri = canonical_uri(path),
        query = canonical_query_string(query),
        headers = canonical_headers(headers),
        signed = signed_headers_string(headers),
    )
}

/// Normalize a request path by percent-encoding each segment.
///
/// Segments are decoded before re-encoding so an already-encoded path
/// produces the same canonical form as its raw spelling. Empty paths
/// normalize to `/`.
#[must_use]
pub fn canonical_uri(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_owned();
    }

    path.split('/')
        .map(|segment| {
            let decoded = percent_decode_str(segment).decode_utf8_lossy();
            utf8_percent_encode(&decoded, URI_ENCODE_SET).to_string()
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Sort query parameters by name, then by value for repeated names.
///
/// Values are preserved exactly as they will appear on the wire. The
/// store canonicalizes whatever encoding the client sent, so re-encoding
/// here would break the signature for any spelling other than the one
/// reqwest emits.
#[must_use]
pub fn canonical_query_string(query: &str) -> String {
    if query.is_empty() {
        return String::new();
    }

    let mut params: Vec<(&str, &str)> = query
        .split('&')
        .filter(|s| !s.is_empty())
        .map(|param| param.split_once('=').unwrap_or((param, "")))
        .collect();

    params.sort_unstable();

    params
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Render `name:value` lines sorted by lowercased name.
///
/// Values are trimmed and internal whitespace runs collapse to a single
/// space. Repeated names merge into one line with comma-joined values in
/// their original order. No trailing newline; the canonical request
/// format supplies the blank line after the header block.
#[must_use]
pub fn canonical_headers(headers: &[(&str, &str)]) -> String {
    let mut merged: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = collapse_whitespace(value.trim());
        merged
            .entry(name.to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push(',');
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    merged
        .iter()
        .map(|(name, value)| format!("{name}:{value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The `SignedHeaders` list for a header set: lowercased names, sorted
/// and deduplicated, joined with `;`.
#[must_use]
pub fn signed_headers_string(headers: &[(&str, &str)]) -> String {
    let mut names: Vec<String> = headers
        .iter()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect();
    names.sort_unstable();
    names.dedup();
    names.join(";")
}

/// Collapse whitespace runs to a single space.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_normalize_empty_path_to_slash() {
        assert_eq!(canonical_uri(""), "/");
        assert_eq!(canonical_uri("/"), "/");
    }

    #[test]
    fn test_should_encode_special_characters_in_path() {
        assert_eq!(canonical_uri("/hello world"), "/hello%20world");
    }

    #[test]
    fn test_should_not_double_encode_path() {
        assert_eq!(canonical_uri("/hello%20world"), "/hello%20world");
    }

    #[test]
    fn test_should_sort_query_parameters() {
        assert_eq!(canonical_query_string("b=2&a=1&c=3"), "a=1&b=2&c=3");
    }

    #[test]
    fn test_should_preserve_raw_query_values() {
        assert_eq!(
            canonical_query_string("key=hello%20world"),
            "key=hello%20world"
        );
    }

    #[test]
    fn test_should_return_empty_for_empty_query() {
        assert_eq!(canonical_query_string(""), "");
    }

    #[test]
    fn test_should_lowercase_sort_and_trim_headers() {
        let headers = [("X-Amz-Target", "DynamoDB_20120810.Scan"), ("Host", "  localhost:8000  ")];
        assert_eq!(
            canonical_headers(&headers),
            "host:localhost:8000\nx-amz-target:DynamoDB_20120810.Scan"
        );
    }

    #[test]
    fn test_should_collapse_whitespace_in_header_values() {
        let headers = [("x-custom", "a   b   c")];
        assert_eq!(canonical_headers(&headers), "x-custom:a b c");
    }

    #[test]
    fn test_should_merge_repeated_headers_with_commas() {
        let headers = [("x-multi", "one"), ("X-Multi", "two")];
        assert_eq!(canonical_headers(&headers), "x-multi:one,two");
        assert_eq!(signed_headers_string(&headers), "x-multi");
    }

    #[test]
    fn test_should_derive_signed_headers_list_sorted() {
        let headers = [
            ("x-amz-date", "20130524T000000Z"),
            ("host", "localhost:8000"),
            ("content-type", "application/x-amz-json-1.0"),
        ];
        assert_eq!(
            signed_headers_string(&headers),
            "content-type;host;x-amz-date"
        );
    }

    #[test]
    fn test_should_render_canonical_request_matching_aws_example() {
        use sha2::{Digest, Sha256};

        let headers = [
            ("host", "examplebucket.s3.amazonaws.com"),
            ("range", "bytes=0-9"),
            (
                "x-amz-content-sha256",
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            ),
            ("x-amz-date", "20130524T000000Z"),
        ];

        let canonical = canonical_request(
            "GET",
            "/test.txt",
            "",
            &headers,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        );

        let expected = "GET\n\
                        /test.txt\n\
                        \n\
                        host:examplebucket.s3.amazonaws.com\n\
                        range:bytes=0-9\n\
                        x-amz-content-sha256:e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n\
                        x-amz-date:20130524T000000Z\n\
                        \n\
                        host;range;x-amz-content-sha256;x-amz-date\n\
                        e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(canonical, expected);

        let hash = hex::encode(Sha256::digest(canonical.as_bytes()));
        assert_eq!(
            hash,
            "7344ae5b7ee6c3e7e6b0fe0640412a37625d1fbfff95c48bbb2dc43964946972"
        );
    }
}
