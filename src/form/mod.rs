// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request body encoders
//!
//! Pure functions turning flat field lists into wire bodies: url-encoded
//! query strings and multipart/form-data payloads.

mod multipart;
mod query;

pub use multipart::{build_form, MultipartForm, BOUNDARY_PREFIX};
pub use query::{encode_component, stringify, stringify_with};
