//! # Sink and Source Boundary
//!
//! The builder never owns an HTTP connection. It writes through
//! [`ResponseSink`] and the request inspector reads through
//! [`HeaderSource`]; host servers plug in by implementing either trait.
//!
//! Implementations shipped here:
//!
//! | Type | `ResponseSink` | `HeaderSource` |
//! |---|---|---|
//! | `http::Response<Vec<u8>>` | yes | yes |
//! | `http::Request<B>` | | yes |
//! | `http::HeaderMap` | | yes |
//! | [`BufferedResponse`] | yes | yes |
//! | `HashMap<String, String>` | | yes |
//! | `[(K, V)]` / `Vec<(K, V)>` | | yes |

use std::borrow::Cow;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;

use http::header::{HeaderName, HeaderValue};
use http::StatusCode;
use smallvec::SmallVec;

use crate::error::HxError;

/// Maximum inline header values before heap allocation
pub const MAX_INLINE_HEADERS: usize = 16;

/// Stack-allocated header storage
///
/// Header names use `Arc<str>` because the same handful of names is written
/// over and over; values are per-response data.
pub type HeaderVec = SmallVec<[(Arc<str>, String); MAX_INLINE_HEADERS]>;

/// Values found for one header name, in arrival order
///
/// Values are borrowed when they are valid UTF-8 and decoded lossily
/// otherwise, so a header that is present always yields a value.
pub type HeaderValues<'a> = SmallVec<[Cow<'a, str>; 2]>;

/// Where a committed response goes
///
/// `set_header` replaces any previous value for the same name.
/// Header and status writes must all happen before the first `write_body`.
pub trait ResponseSink {
    fn set_status(&mut self, status: u16) -> Result<(), HxError>;

    fn set_header(&mut self, name: &'static str, value: &str) -> Result<(), HxError>;

    fn write_body(&mut self, body: &[u8]) -> io::Result<()>;
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn set_status(&mut self, status: u16) -> Result<(), HxError> {
        (**self).set_status(status)
    }

    fn set_header(&mut self, name: &'static str, value: &str) -> Result<(), HxError> {
        (**self).set_header(name, value)
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        (**self).write_body(body)
    }
}

/// Read access to inbound request headers
///
/// Name lookup is case-insensitive; values are returned untouched.
pub trait HeaderSource {
    fn header_values(&self, name: &str) -> HeaderValues<'_>;
}

impl<H: HeaderSource + ?Sized> HeaderSource for &H {
    fn header_values(&self, name: &str) -> HeaderValues<'_> {
        (**self).header_values(name)
    }
}

fn invalid_value(header: &'static str, value: &str) -> HxError {
    HxError::InvalidHeaderValue {
        header,
        value: value.to_string(),
    }
}

/// Reject control characters other than horizontal tab
pub(crate) fn check_header_value(header: &'static str, value: &str) -> Result<(), HxError> {
    if value.bytes().any(|b| (b < 0x20 && b != b'\t') || b == 0x7f) {
        return Err(invalid_value(header, value));
    }
    Ok(())
}

impl ResponseSink for http::Response<Vec<u8>> {
    fn set_status(&mut self, status: u16) -> Result<(), HxError> {
        *self.status_mut() =
            StatusCode::from_u16(status).map_err(|_| HxError::InvalidStatus(status))?;
        Ok(())
    }

    fn set_header(&mut self, name: &'static str, value: &str) -> Result<(), HxError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid_value(name, value))?;
        let header_value = HeaderValue::from_str(value).map_err(|_| invalid_value(name, value))?;
        self.headers_mut().insert(header_name, header_value);
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.body_mut().extend_from_slice(body);
        Ok(())
    }
}

impl HeaderSource for http::HeaderMap {
    /// Bytes that are not UTF-8 (obs-text) come back as U+FFFD.
    fn header_values(&self, name: &str) -> HeaderValues<'_> {
        self.get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .collect()
    }
}

impl<B> HeaderSource for http::Request<B> {
    fn header_values(&self, name: &str) -> HeaderValues<'_> {
        self.headers().header_values(name)
    }
}

impl<B> HeaderSource for http::Response<B> {
    fn header_values(&self, name: &str) -> HeaderValues<'_> {
        self.headers().header_values(name)
    }
}

impl HeaderSource for HashMap<String, String> {
    /// A key spelled exactly like `name` comes first; other case variants
    /// follow in key order, so the result does not depend on hashing.
    fn header_values(&self, name: &str) -> HeaderValues<'_> {
        let mut found: SmallVec<[(&String, &String); 2]> = self
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .collect();
        found.sort_by(|a, b| {
            (a.0.as_str() != name)
                .cmp(&(b.0.as_str() != name))
                .then_with(|| a.0.cmp(b.0))
        });
        found
            .into_iter()
            .map(|(_, v)| Cow::Borrowed(v.as_str()))
            .collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> HeaderSource for [(K, V)] {
    fn header_values(&self, name: &str) -> HeaderValues<'_> {
        self.iter()
            .filter(|(k, _)| k.as_ref().eq_ignore_ascii_case(name))
            .map(|(_, v)| Cow::Borrowed(v.as_ref()))
            .collect()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> HeaderSource for Vec<(K, V)> {
    fn header_values(&self, name: &str) -> HeaderValues<'_> {
        self.as_slice().header_values(name)
    }
}

/// In-memory response for hosts that assemble the wire response themselves
///
/// Status defaults to 200. Header names keep the casing they were written
/// with; lookups ignore case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferedResponse {
    pub status: u16,
    pub headers: HeaderVec,
    pub body: Vec<u8>,
}

impl Default for BufferedResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl BufferedResponse {
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: 200,
            headers: HeaderVec::new(),
            body: Vec::new(),
        }
    }

    /// Get a header by name
    #[inline]
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Convert into an `http::Response`, validating status and headers
    pub fn into_http(self) -> Result<http::Response<Vec<u8>>, HxError> {
        let mut res = http::Response::new(Vec::new());
        res.set_status(self.status)?;
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
                HxError::InvalidHeaderValue {
                    header: "<name>",
                    value: name.to_string(),
                }
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|_| {
                HxError::InvalidHeaderValue {
                    header: "<value>",
                    value: value.clone(),
                }
            })?;
            res.headers_mut().insert(header_name, header_value);
        }
        *res.body_mut() = self.body;
        Ok(res)
    }
}

impl ResponseSink for BufferedResponse {
    fn set_status(&mut self, status: u16) -> Result<(), HxError> {
        if !(100..=999).contains(&status) {
            return Err(HxError::InvalidStatus(status));
        }
        self.status = status;
        Ok(())
    }

    fn set_header(&mut self, name: &'static str, value: &str) -> Result<(), HxError> {
        check_header_value(name, value)?;
        // Remove existing header with same name (case-insensitive)
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((Arc::from(name), value.to_string()));
        Ok(())
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<()> {
        self.body.extend_from_slice(body);
        Ok(())
    }
}

impl HeaderSource for BufferedResponse {
    fn header_values(&self, name: &str) -> HeaderValues<'_> {
        self.headers.as_slice().header_values(name)
    }
}
