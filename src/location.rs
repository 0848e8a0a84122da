//! # Location Directive
//!
//! `HX-Location` asks htmx to perform a client-side navigation without a full
//! page reload. A plain [`Location`] is sent as the bare path; one built with
//! a [`LocationContext`] is always sent as a JSON object:
//!
//! ```json
//! {"path":"/hello","target":"#testdiv","source":"HELLO"}
//! ```
//!
//! Unset context fields are omitted. `swap` carries the encoded swap string,
//! not a nested object.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::HxError;
use crate::headers::HX_LOCATION;
use crate::swap::Swap;

/// Extra context for a location directive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationContext {
    /// Source element of the request
    pub source: Option<String>,
    /// Event that "triggered" the request
    pub event: Option<String>,
    /// Callback that handles the response HTML
    pub handler: Option<String>,
    /// Target to swap the response into
    pub target: Option<String>,
    /// How the response will be swapped in relative to the target
    pub swap: Option<Swap>,
    /// Selector for the content to pick out of the response
    pub select: Option<String>,
    /// Values to submit with the request
    pub values: BTreeMap<String, String>,
    /// Headers to submit with the request
    pub headers: BTreeMap<String, String>,
}

impl LocationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    #[must_use]
    pub fn handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    #[must_use]
    pub fn target(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(selector.into());
        self
    }

    #[must_use]
    pub fn swap(mut self, swap: impl Into<Swap>) -> Self {
        self.swap = Some(swap.into());
        self
    }

    #[must_use]
    pub fn select(mut self, selector: impl Into<String>) -> Self {
        self.select = Some(selector.into());
        self
    }

    /// Add one value to replay on the follow-up request
    #[must_use]
    pub fn value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Add one header to replay on the follow-up request
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

#[derive(Serialize)]
struct LocationWire<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handler: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    swap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    select: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    values: Option<&'a BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    headers: Option<&'a BTreeMap<String, String>>,
}

/// Navigation target for `HX-Location`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    context: Option<LocationContext>,
}

impl Location {
    /// Plain form, encoded as the bare path
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            context: None,
        }
    }

    /// Structured form, always encoded as a JSON object
    #[must_use]
    pub fn with_context(path: impl Into<String>, context: LocationContext) -> Self {
        Self {
            path: path.into(),
            context: Some(context),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn context(&self) -> Option<&LocationContext> {
        self.context.as_ref()
    }

    /// Header value: the path, or the JSON object when a context is present
    pub fn encode(&self) -> Result<String, HxError> {
        let Some(ctx) = &self.context else {
            return Ok(self.path.clone());
        };
        let wire = LocationWire {
            path: &self.path,
            target: ctx.target.as_deref(),
            source: ctx.source.as_deref(),
            event: ctx.event.as_deref(),
            handler: ctx.handler.as_deref(),
            swap: ctx.swap.as_ref().map(Swap::encode),
            select: ctx.select.as_deref(),
            values: (!ctx.values.is_empty()).then_some(&ctx.values),
            headers: (!ctx.headers.is_empty()).then_some(&ctx.headers),
        };
        serde_json::to_string(&wire).map_err(|e| HxError::encoding(HX_LOCATION, e))
    }
}

impl From<&str> for Location {
    fn from(path: &str) -> Self {
        Location::new(path)
    }
}

impl From<String> for Location {
    fn from(path: String) -> Self {
        Location::new(path)
    }
}
