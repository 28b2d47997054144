// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! multipart/form-data bodies

use bytes::{BufMut, Bytes, BytesMut};
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Prefix shared by every generated boundary
pub const BOUNDARY_PREFIX: &str = "----WebKitFormBoundary";

const CRLF: &[u8] = b"\r\n";

/// An encoded multipart body and the boundary separating its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartForm {
    pub boundary: String,
    pub payload: Bytes,
}

impl MultipartForm {
    /// Value for the outer `Content-Type` header
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }
}

/// Encode fields as plain form-data parts, in iteration order.
///
/// Each part carries only a `Content-Disposition` line; there is no
/// filename and no per-part content type.
pub fn build_form<I, K, V>(fields: I) -> MultipartForm
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<[u8]>,
{
    let boundary = generate_boundary();
    let mut payload = BytesMut::new();

    for (name, value) in fields {
        payload.put_slice(b"--");
        payload.put_slice(boundary.as_bytes());
        payload.put_slice(CRLF);
        payload.put_slice(b"Content-Disposition: form-data; name=\"");
        payload.put_slice(escape_name(name.as_ref()).as_bytes());
        payload.put_slice(b"\"");
        payload.put_slice(CRLF);
        payload.put_slice(CRLF);
        payload.put_slice(value.as_ref());
        payload.put_slice(CRLF);
    }

    payload.put_slice(b"--");
    payload.put_slice(boundary.as_bytes());
    payload.put_slice(b"--");
    payload.put_slice(CRLF);

    MultipartForm {
        boundary,
        payload: payload.freeze(),
    }
}

/// Timestamp in base 36 followed by a random alphanumeric suffix
fn generate_boundary() -> String {
    let millis = Utc::now().timestamp_millis().unsigned_abs();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();
    format!("{}{}{}", BOUNDARY_PREFIX, to_base36(millis), suffix)
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

// Quotes and line breaks would end the header early.
fn escape_name(name: &str) -> String {
    name.replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
