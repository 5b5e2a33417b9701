use super::*;
use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec;

const BASE: &str = "http://a/b/c/d;p?q";

#[test]
fn test_quote_fast_path_borrows() {
    let out = quote("abc-._~/XYZ09", &SafeSet::PATH);
    assert!(matches!(out, Cow::Borrowed(_)));
    assert_eq!(out, "abc-._~/XYZ09");
}

#[test]
fn test_quote_escapes_with_uppercase_hex() {
    assert_eq!(quote("a/b c?", &SafeSet::UNRESERVED), "a%2Fb%20c%3F");
    assert_eq!(quote("\u{e9}", &SafeSet::UNRESERVED), "%C3%A9");
    assert_eq!(quote("100%", &SafeSet::NONE), "100%25");
}

#[test]
fn test_quote_plus_maps_space() {
    assert_eq!(quote_plus("a b", &SafeSet::UNRESERVED), "a+b");
    assert_eq!(quote_plus("a+b", &SafeSet::UNRESERVED), "a%2Bb");
    assert_eq!(quote_plus(" ", &SafeSet::NONE), "+");
}

#[test]
fn test_quote_output_length_is_exact() {
    let out = quote("a b/c\u{263a}", &SafeSet::UNRESERVED);
    // 3 literal + 1 space + 1 slash + 3 bytes of U+263A, each escape 3 chars
    assert_eq!(out.len(), 3 + 5 * 3);
    assert_eq!(out, "a%20b%2Fc%E2%98%BA");
}

#[test]
fn test_safe_set_construction() {
    let set = SafeSet::from_str(":@");
    assert!(set.contains(b':'));
    assert!(set.contains(b'@'));
    assert!(set.contains(b'Z'));
    assert!(!set.contains(b'/'));
    assert!(SafeSet::UNRESERVED.with(b'/') == SafeSet::PATH);
    // non-ASCII bytes can never be safe
    assert!(!SafeSet::from_bytes(&[0xC3]).contains(0xC3));
}

#[test]
fn test_unquote_fast_path_borrows() {
    let out = unquote("plain/text").unwrap();
    assert!(matches!(out, Cow::Borrowed(_)));
    let out = unquote_plus("no-plus-or-percent").unwrap();
    assert!(matches!(out, Cow::Borrowed(_)));
}

#[test]
fn test_unquote_decodes_mixed_case_hex() {
    assert_eq!(unquote("%2f%2F%41").unwrap(), "//A");
    assert_eq!(unquote("caf%C3%A9").unwrap(), "caf\u{e9}");
}

#[test]
fn test_unquote_tolerates_incomplete_escapes() {
    assert_eq!(unquote("%").unwrap(), "%");
    assert_eq!(unquote("%4").unwrap(), "%4");
    assert_eq!(unquote("%zz%41").unwrap(), "%zzA");
    assert_eq!(unquote("a%%41").unwrap(), "a%A");
}

#[test]
fn test_unquote_rejects_invalid_utf8() {
    assert_eq!(unquote("%FF"), Err(DecodeError::InvalidUtf8));
    assert_eq!(unquote("%C3"), Err(DecodeError::InvalidUtf8));
}

#[test]
fn test_unquote_plus() {
    assert_eq!(unquote_plus("a+b%2Bc").unwrap(), "a b+c");
    assert_eq!(unquote("a+b").unwrap(), "a+b");
}

#[test]
fn test_encode_query() {
    let qs = encode_query([("name", "J Doe"), ("", "skipped"), ("x", "a&b=c")], &SafeSet::UNRESERVED);
    assert_eq!(qs, "name=J+Doe&x=a%26b%3Dc");
}

#[test]
fn test_encode_query_seq_repeats_key() {
    let qs = encode_query_seq([("k", vec!["1", "2"]), ("j", vec!["3"])], &SafeSet::UNRESERVED);
    assert_eq!(qs, "k=1&k=2&j=3");
}

#[test]
fn test_decode_query_drops_blank_by_default() {
    let map = decode_query("foo=1&bar=2&baz", false).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("foo").map(String::as_str), Some("1"));
    assert_eq!(map.get("bar").map(String::as_str), Some("2"));
    assert!(map.get("baz").is_none());

    let map = decode_query("foo=", false).unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_decode_query_keep_blank() {
    let map = decode_query("foo=1&bar=2&baz", true).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("baz").map(String::as_str), Some(""));

    let pairs = decode_query_pairs("a=&=x&&b", true).unwrap();
    assert_eq!(
        pairs,
        vec![(String::from("a"), String::new()), (String::from("b"), String::new())]
    );
}

#[test]
fn test_decode_query_first_value_wins() {
    let map = decode_query("a=1&a=2", false).unwrap();
    assert_eq!(map.get("a").map(String::as_str), Some("1"));
}

#[test]
fn test_decode_query_multi_keeps_order() {
    let map = decode_query_multi("a=1&b=x&a=2&a=3", false).unwrap();
    assert_eq!(map.get("a").unwrap(), &vec![String::from("1"), String::from("2"), String::from("3")]);
    assert_eq!(map.get("b").unwrap(), &vec![String::from("x")]);
}

#[test]
fn test_decode_query_decodes_plus_and_escapes() {
    let pairs = decode_query_pairs("q=rust+lang&e=%3D%26", false).unwrap();
    assert_eq!(pairs[0], (String::from("q"), String::from("rust lang")));
    assert_eq!(pairs[1], (String::from("e"), String::from("=&")));
    assert_eq!(decode_query_pairs("bad=%FF", false), Err(DecodeError::InvalidUtf8));
}

#[test]
fn test_split_url_full() {
    let parts = split_url("https://user:pass@[::1]:8443/a/b?x=1#f", "", true);
    assert_eq!(parts.scheme, "https");
    assert_eq!(parts.authority, "user:pass@[::1]:8443");
    assert_eq!(parts.path, "/a/b");
    assert_eq!(parts.query, "x=1");
    assert_eq!(parts.fragment, "f");

    let auth = split_authority(parts.authority);
    assert_eq!(auth.username, Some("user"));
    assert_eq!(auth.password, Some("pass"));
    assert_eq!(auth.host.as_deref(), Some("::1"));
    assert_eq!(auth.port, Some(8443));
}

#[test]
fn test_split_url_strips_leading_whitespace_and_lowers_scheme() {
    let parts = split_url(" \t\nHTTP://Host/Path", "", true);
    assert_eq!(parts.scheme, "http");
    assert_eq!(parts.authority, "Host");
    assert_eq!(parts.path, "/Path");
}

#[test]
fn test_split_url_default_scheme() {
    let parts = split_url("//example.com", "https", true);
    assert_eq!(parts.scheme, "https");
    assert_eq!(parts.authority, "example.com");
    assert_eq!(parts.path, "");

    let parts = split_url("/only/path", "http", true);
    assert_eq!(parts.scheme, "http");
    assert_eq!(parts.authority, "");
    assert_eq!(parts.path, "/only/path");
}

#[test]
fn test_split_url_scheme_detection() {
    // colon after a slash is not a scheme separator
    let parts = split_url("a/b:c", "", true);
    assert_eq!(parts.scheme, "");
    assert_eq!(parts.path, "a/b:c");

    // scheme must start with a letter
    let parts = split_url("1abc:def", "", true);
    assert_eq!(parts.scheme, "");
    assert_eq!(parts.path, "1abc:def");

    // a leading colon is not a scheme
    let parts = split_url(":x", "", true);
    assert_eq!(parts.scheme, "");

    let parts = split_url("mailto:me@example.com", "", true);
    assert_eq!(parts.scheme, "mailto");
    assert_eq!(parts.authority, "");
    assert_eq!(parts.path, "me@example.com");
}

#[test]
fn test_split_url_fragments_disabled() {
    let parts = split_url("http://h/p#frag?q", "", false);
    assert_eq!(parts.path, "/p#frag");
    assert_eq!(parts.query, "q");
    assert_eq!(parts.fragment, "");

    let parts = split_url("http://h/p?q#frag", "", true);
    assert_eq!(parts.query, "q");
    assert_eq!(parts.fragment, "frag");
}

#[test]
fn test_split_authority_plain() {
    let auth = split_authority("Example.COM:80");
    assert_eq!(auth.username, None);
    assert_eq!(auth.password, None);
    assert_eq!(auth.host.as_deref(), Some("example.com"));
    assert_eq!(auth.port, Some(80));
}

#[test]
fn test_split_authority_user_without_password() {
    let auth = split_authority("alice@host");
    assert_eq!(auth.username, Some("alice"));
    assert_eq!(auth.password, None);

    let auth = split_authority("alice:@host");
    assert_eq!(auth.password, Some(""));
}

#[test]
fn test_split_authority_bad_ports_are_absent() {
    assert_eq!(split_authority("h:65536").port, None);
    assert_eq!(split_authority("h:65535").port, Some(65535));
    assert_eq!(split_authority("h:0").port, Some(0));
    assert_eq!(split_authority("h:http").port, None);
    assert_eq!(split_authority("h:+80").port, None);
    assert_eq!(split_authority("h:").port, None);
    assert_eq!(split_authority("h:-1").port, None);
}

#[test]
fn test_split_authority_empty_host_is_absent() {
    assert_eq!(split_authority("").host, None);
    assert_eq!(split_authority(":8080").host, None);
    assert_eq!(split_authority(":8080").port, Some(8080));
    assert_eq!(split_authority("user@").host, None);
}

#[test]
fn test_split_authority_ipv6() {
    let auth = split_authority("[FE80::1%25Eth0]:80");
    assert_eq!(auth.host.as_deref(), Some("FE80::1%25Eth0"));
    assert_eq!(auth.port, Some(80));

    let auth = split_authority("[::1]");
    assert_eq!(auth.host.as_deref(), Some("::1"));
    assert_eq!(auth.port, None);

    // unclosed bracket: the whole string is the host, no port
    let auth = split_authority("[::1:80");
    assert_eq!(auth.host.as_deref(), Some("[::1:80"));
    assert_eq!(auth.port, None);
}

#[test]
fn test_unsplit_round_trip() {
    for url in [
        "https://user:pass@[::1]:8443/a/b?x=1#f",
        "http://example.com",
        "mailto:me@example.com",
        "/relative/path?q",
        "ws://h/socket",
    ] {
        assert_eq!(unsplit(&split_url(url, "", true)), url);
    }
}

#[test]
fn test_unsplit_adds_slash_before_relative_path() {
    assert_eq!(unsplit_url("http", "h", "p", "", ""), "http://h/p");
    assert_eq!(unsplit_url("", "", "p", "", "f"), "p#f");
    assert_eq!(unsplit_url("file", "", "/etc/hosts", "", ""), "file:///etc/hosts");
}

#[test]
fn test_normalize_path() {
    assert_eq!(normalize_path("/a/b/../../c"), "/c");
    assert_eq!(normalize_path("a/../../b"), "../b");
    assert_eq!(normalize_path("/a/./b/"), "/a/b/");
    assert_eq!(normalize_path("/../a"), "/a");
    assert_eq!(normalize_path("/a/b/.."), "/a/");
    assert_eq!(normalize_path("/a/.."), "/");
    assert_eq!(normalize_path("/a/b/."), "/a/b/");
    assert_eq!(normalize_path("/a//b"), "/a/b");
    assert_eq!(normalize_path("//a/b"), "//a/b");
    assert_eq!(normalize_path(".."), "../");
    assert_eq!(normalize_path("../.."), "../../");
    assert_eq!(normalize_path(""), "");
    assert_eq!(normalize_path("."), "");
    assert_eq!(normalize_path("./"), "");
    assert_eq!(normalize_path("a/.."), "");
}

#[test]
fn test_join_normal_examples() {
    let cases = [
        ("g:h", "g:h"),
        ("g", "http://a/b/c/g"),
        ("./g", "http://a/b/c/g"),
        ("g/", "http://a/b/c/g/"),
        ("/g", "http://a/g"),
        ("//g", "http://g"),
        ("?y", "http://a/b/c/d;p?y"),
        ("g?y", "http://a/b/c/g?y"),
        ("#s", "http://a/b/c/d;p?q#s"),
        ("g#s", "http://a/b/c/g#s"),
        ("g?y#s", "http://a/b/c/g?y#s"),
        (";x", "http://a/b/c/;x"),
        ("g;x", "http://a/b/c/g;x"),
        ("g;x?y#s", "http://a/b/c/g;x?y#s"),
        ("", "http://a/b/c/d;p?q"),
        (".", "http://a/b/c/"),
        ("./", "http://a/b/c/"),
        ("..", "http://a/b/"),
        ("../", "http://a/b/"),
        ("../g", "http://a/b/g"),
        ("../..", "http://a/"),
        ("../../", "http://a/"),
        ("../../g", "http://a/g"),
    ];
    for (reference, expected) in cases {
        assert_eq!(join_url(BASE, reference), expected, "reference {reference:?}");
    }
}

#[test]
fn test_join_abnormal_examples() {
    let cases = [
        ("../../../g", "http://a/g"),
        ("../../../../g", "http://a/g"),
        ("/./g", "http://a/g"),
        ("/../g", "http://a/g"),
        ("g.", "http://a/b/c/g."),
        (".g", "http://a/b/c/.g"),
        ("g..", "http://a/b/c/g.."),
        ("..g", "http://a/b/c/..g"),
        ("./../g", "http://a/b/g"),
        ("./g/.", "http://a/b/c/g/"),
        ("g/./h", "http://a/b/c/g/h"),
        ("g/../h", "http://a/b/c/h"),
        ("g;x=1/./y", "http://a/b/c/g;x=1/y"),
        ("g;x=1/../y", "http://a/b/c/y"),
        ("g?y/./x", "http://a/b/c/g?y/./x"),
        ("g#s/../x", "http://a/b/c/g#s/../x"),
        ("http:g", "http:g"),
    ];
    for (reference, expected) in cases {
        assert_eq!(join_url(BASE, reference), expected, "reference {reference:?}");
    }
}

#[test]
fn test_join_edge_cases() {
    assert_eq!(join_url("", "/x"), "/x");
    assert_eq!(join_url("http://h", "x"), "http://h/x");
    assert_eq!(join_url("http://h/a", "https://other/"), "https://other/");
    assert_eq!(join_url("http://h/a#frag", ""), "http://h/a");
    assert_eq!(join_url("https://h:8443/a/b", "//x:1/../c"), "https://x:1/c");
}
