//! # Request Inspector
//!
//! Stateless queries over the headers htmx attaches to a request.
//!
//! Boolean markers are true only when one of the header's values is the
//! exact string `true`: no trimming, no case folding. Anything else,
//! including a missing header, reads as false. The string accessors return
//! the first value, or `None` only when the header is absent. Values that
//! are not valid UTF-8 are decoded lossily rather than dropped.
//!
//! ```rust
//! use hxkit::request;
//! use http::Request;
//!
//! let req = Request::builder()
//!     .header("HX-Request", "true")
//!     .header("HX-Target", "main")
//!     .body(())
//!     .unwrap();
//! assert!(request::is_htmx(&req));
//! assert_eq!(request::target(&req).as_deref(), Some("main"));
//! assert_eq!(request::prompt(&req), None);
//! ```

use std::borrow::Cow;

use crate::headers::RequestHeader;
use crate::sink::HeaderSource;

fn has_header_true<H: HeaderSource + ?Sized>(headers: &H, header: RequestHeader) -> bool {
    headers
        .header_values(header.as_str())
        .iter()
        .any(|v| v == "true")
}

fn first_value<H: HeaderSource + ?Sized>(
    headers: &H,
    header: RequestHeader,
) -> Option<Cow<'_, str>> {
    headers.header_values(header.as_str()).into_iter().next()
}

/// Request was made by htmx (`HX-Request: true`)
#[must_use]
pub fn is_htmx<H: HeaderSource + ?Sized>(headers: &H) -> bool {
    has_header_true(headers, RequestHeader::Request)
}

/// Request came from an element using `hx-boost` (`HX-Boosted: true`)
#[must_use]
pub fn is_boosted<H: HeaderSource + ?Sized>(headers: &H) -> bool {
    has_header_true(headers, RequestHeader::Boosted)
}

/// Request restores history after a local cache miss
#[must_use]
pub fn is_history_restore_request<H: HeaderSource + ?Sized>(headers: &H) -> bool {
    has_header_true(headers, RequestHeader::HistoryRestoreRequest)
}

/// URL the browser was on when htmx made the request
#[must_use]
pub fn current_url<H: HeaderSource + ?Sized>(headers: &H) -> Option<Cow<'_, str>> {
    first_value(headers, RequestHeader::CurrentUrl)
}

/// User response to an `hx-prompt`
#[must_use]
pub fn prompt<H: HeaderSource + ?Sized>(headers: &H) -> Option<Cow<'_, str>> {
    first_value(headers, RequestHeader::Prompt)
}

/// Id of the target element
#[must_use]
pub fn target<H: HeaderSource + ?Sized>(headers: &H) -> Option<Cow<'_, str>> {
    first_value(headers, RequestHeader::Target)
}

/// `name` of the element that triggered the request
#[must_use]
pub fn trigger_name<H: HeaderSource + ?Sized>(headers: &H) -> Option<Cow<'_, str>> {
    first_value(headers, RequestHeader::TriggerName)
}

/// Id of the element that triggered the request
#[must_use]
pub fn trigger<H: HeaderSource + ?Sized>(headers: &H) -> Option<Cow<'_, str>> {
    first_value(headers, RequestHeader::Trigger)
}

/// Every htmx request header, read in one pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HxRequest {
    pub is_htmx: bool,
    pub boosted: bool,
    pub history_restore_request: bool,
    pub current_url: Option<String>,
    pub prompt: Option<String>,
    pub target: Option<String>,
    pub trigger_name: Option<String>,
    pub trigger: Option<String>,
}

impl HxRequest {
    #[must_use]
    pub fn from_headers<H: HeaderSource + ?Sized>(headers: &H) -> Self {
        Self {
            is_htmx: is_htmx(headers),
            boosted: is_boosted(headers),
            history_restore_request: is_history_restore_request(headers),
            current_url: current_url(headers).map(Cow::into_owned),
            prompt: prompt(headers).map(Cow::into_owned),
            target: target(headers).map(Cow::into_owned),
            trigger_name: trigger_name(headers).map(Cow::into_owned),
            trigger: trigger(headers).map(Cow::into_owned),
        }
    }
}
