// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Query string encoding

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped by `encodeURIComponent`
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single key or value.
///
/// Letters, digits and `-_.!~*'()` pass through; everything else, space
/// included, becomes `%XX` over the UTF-8 bytes.
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Join fields as `key=value` pairs separated by `&`, both sides
/// percent-encoded.
pub fn stringify<I, K, V>(fields: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    stringify_with(fields, |value: &V| encode_component(value.as_ref()))
}

/// Like [`stringify`], but values go through `encode`.
///
/// Keys are still percent-encoded. Use this for values that are not plain
/// strings, e.g. lists joined with `,`.
pub fn stringify_with<I, K, V, F>(fields: I, mut encode: F) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    F: FnMut(&V) -> String,
{
    fields
        .into_iter()
        .map(|(key, value)| format!("{}={}", encode_component(key.as_ref()), encode(&value)))
        .collect::<Vec<_>>()
        .join("&")
}
