//! # Response Builder
//!
//! [`HxResponse`] accumulates htmx directives for one outgoing response and
//! writes them onto a [`ResponseSink`] in a single [`commit`](HxResponse::commit).
//!
//! ## Usage
//!
//! ```rust
//! use hxkit::{HxResponse, ScrollDirection, Swap, Trigger, STATUS_STOP_POLLING};
//! use serde_json::json;
//!
//! let mut res = http::Response::new(Vec::new());
//! HxResponse::new()
//!     .status_code(STATUS_STOP_POLLING)
//!     .retarget("#world")
//!     .reswap(Swap::inner_html().show_on("#swappy", ScrollDirection::Top))
//!     .add_trigger(Trigger::object("showMessage", &json!({"level": "info"})))
//!     .render_html(&mut res, "<p>done</p>")
//!     .unwrap();
//!
//! assert_eq!(res.status().as_u16(), 286);
//! assert_eq!(res.headers()["HX-Reswap"], "innerHTML show:#swappy:top");
//! assert_eq!(res.headers()["HX-Trigger"], r#"{"showMessage":{"level":"info"}}"#);
//! ```
//!
//! ## Semantics
//!
//! - Every setter mutates the builder in place and returns it, so calls
//!   chain in any order. Setting a directive twice keeps the last value;
//!   triggers merge by event name.
//! - Unset directives produce no header at all.
//! - `commit` encodes and validates everything first. An encoding failure,
//!   or a value carrying control characters, leaves the sink untouched.
//!   Otherwise the status (if set) is written, then headers in
//!   [`ResponseHeader`] order.
//! - Body bytes are only written by the `render_*` family, after `commit`.
//!
//! A builder belongs to one response handled by one task. It is `Clone` for
//! callers that want a template response to copy from.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::config::HxConfig;
use crate::error::HxError;
use crate::headers::{ResponseHeader, HX_REQUEST, VARY};
use crate::location::{Location, LocationContext};
use crate::sink::{check_header_value, ResponseSink};
use crate::swap::Swap;
use crate::trigger::{Trigger, TriggerSet};

/// Encoded headers in commit order
pub type HeaderList = SmallVec<[(&'static str, String); 12]>;

/// Value for `HX-Push-Url` / `HX-Replace-Url`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlUpdate {
    /// Put this URL into the location bar
    Url(String),
    /// Leave browser history untouched (`false`)
    Prevent,
}

impl UrlUpdate {
    fn encode(&self) -> String {
        match self {
            UrlUpdate::Url(url) => url.clone(),
            UrlUpdate::Prevent => "false".to_string(),
        }
    }
}

/// Accumulated htmx directives for one response
#[derive(Debug, Clone, Default)]
pub struct HxResponse {
    config: HxConfig,
    status: Option<u16>,
    location: Option<Location>,
    push_url: Option<UrlUpdate>,
    redirect: Option<String>,
    refresh: Option<bool>,
    replace_url: Option<UrlUpdate>,
    reswap: Option<Swap>,
    retarget: Option<String>,
    reselect: Option<String>,
    trigger: TriggerSet,
    trigger_after_settle: TriggerSet,
    trigger_after_swap: TriggerSet,
}

impl HxResponse {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: HxConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &HxConfig {
        &self.config
    }

    /// Status to set on commit; without it the sink's status is left alone
    pub fn status_code(&mut self, status: u16) -> &mut Self {
        self.status = Some(status);
        self
    }

    /// Client-side navigation without a full reload (`HX-Location`)
    pub fn location(&mut self, location: impl Into<Location>) -> &mut Self {
        self.location = Some(location.into());
        self
    }

    /// Client-side navigation with targeting context, sent as JSON
    pub fn location_with_context(
        &mut self,
        path: impl Into<String>,
        context: LocationContext,
    ) -> &mut Self {
        self.location = Some(Location::with_context(path, context));
        self
    }

    /// Push a URL into the history stack (`HX-Push-Url`)
    pub fn push_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.push_url = Some(UrlUpdate::Url(url.into()));
        self
    }

    /// Prevent the history stack from being updated (`HX-Push-Url: false`)
    pub fn prevent_push_url(&mut self) -> &mut Self {
        self.push_url = Some(UrlUpdate::Prevent);
        self
    }

    /// Full client-side redirect (`HX-Redirect`)
    pub fn redirect(&mut self, url: impl Into<String>) -> &mut Self {
        self.redirect = Some(url.into());
        self
    }

    /// Ask for a full page refresh (`HX-Refresh`)
    pub fn refresh(&mut self, refresh: bool) -> &mut Self {
        self.refresh = Some(refresh);
        self
    }

    /// Replace the current URL in the location bar (`HX-Replace-Url`)
    pub fn replace_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.replace_url = Some(UrlUpdate::Url(url.into()));
        self
    }

    /// Prevent the current URL from being replaced (`HX-Replace-Url: false`)
    pub fn prevent_replace_url(&mut self) -> &mut Self {
        self.replace_url = Some(UrlUpdate::Prevent);
        self
    }

    /// Override how the response is swapped in (`HX-Reswap`)
    pub fn reswap(&mut self, swap: impl Into<Swap>) -> &mut Self {
        self.reswap = Some(swap.into());
        self
    }

    /// CSS selector that replaces the request target (`HX-Retarget`)
    pub fn retarget(&mut self, selector: impl Into<String>) -> &mut Self {
        self.retarget = Some(selector.into());
        self
    }

    /// CSS selector choosing which part of the response is swapped (`HX-Reselect`)
    pub fn reselect(&mut self, selector: impl Into<String>) -> &mut Self {
        self.reselect = Some(selector.into());
        self
    }

    /// Fire an event as soon as the response is received (`HX-Trigger`)
    pub fn add_trigger(&mut self, trigger: impl Into<Trigger>) -> &mut Self {
        self.trigger.add(trigger);
        self
    }

    pub fn add_triggers<T: Into<Trigger>>(
        &mut self,
        triggers: impl IntoIterator<Item = T>,
    ) -> &mut Self {
        self.trigger.extend(triggers);
        self
    }

    /// Fire an event after the settle step (`HX-Trigger-After-Settle`)
    pub fn add_trigger_after_settle(&mut self, trigger: impl Into<Trigger>) -> &mut Self {
        self.trigger_after_settle.add(trigger);
        self
    }

    pub fn add_triggers_after_settle<T: Into<Trigger>>(
        &mut self,
        triggers: impl IntoIterator<Item = T>,
    ) -> &mut Self {
        self.trigger_after_settle.extend(triggers);
        self
    }

    /// Fire an event after the swap step (`HX-Trigger-After-Swap`)
    pub fn add_trigger_after_swap(&mut self, trigger: impl Into<Trigger>) -> &mut Self {
        self.trigger_after_swap.add(trigger);
        self
    }

    pub fn add_triggers_after_swap<T: Into<Trigger>>(
        &mut self,
        triggers: impl IntoIterator<Item = T>,
    ) -> &mut Self {
        self.trigger_after_swap.extend(triggers);
        self
    }

    /// Encode every set directive, in commit order, without touching a sink
    ///
    /// Fails on the first value that cannot be encoded or that contains a
    /// control character other than tab.
    pub fn headers(&self) -> Result<HeaderList, HxError> {
        let mut out = HeaderList::new();
        for header in ResponseHeader::ALL {
            let value = match header {
                ResponseHeader::Location => {
                    self.location.as_ref().map(Location::encode).transpose()?
                }
                ResponseHeader::PushUrl => self.push_url.as_ref().map(UrlUpdate::encode),
                ResponseHeader::Redirect => self.redirect.clone(),
                ResponseHeader::Refresh => self.refresh.map(|r| r.to_string()),
                ResponseHeader::ReplaceUrl => self.replace_url.as_ref().map(UrlUpdate::encode),
                ResponseHeader::Reswap => self.reswap.as_ref().map(Swap::encode),
                ResponseHeader::Retarget => self.retarget.clone(),
                ResponseHeader::Reselect => self.reselect.clone(),
                ResponseHeader::Trigger => encode_triggers(&self.trigger)?,
                ResponseHeader::TriggerAfterSettle => {
                    encode_triggers(&self.trigger_after_settle)?
                }
                ResponseHeader::TriggerAfterSwap => encode_triggers(&self.trigger_after_swap)?,
            };
            if let Some(value) = value {
                check_header_value(header.as_str(), &value)?;
                out.push((header.as_str(), value));
            }
        }
        Ok(out)
    }

    /// Write the status (if set) and every set directive onto `sink`
    pub fn commit<S: ResponseSink + ?Sized>(&self, sink: &mut S) -> Result<(), HxError> {
        let headers = self.headers()?;
        debug!(
            status = ?self.status,
            headers = headers.len(),
            "committing htmx response"
        );
        if let Some(status) = self.status {
            sink.set_status(status)?;
        }
        for (name, value) in &headers {
            if self.config.trace_headers {
                debug!(header = *name, value = %value, "htmx response header");
            }
            sink.set_header(name, value)?;
        }
        if self.config.auto_vary {
            sink.set_header(VARY, HX_REQUEST)?;
        }
        Ok(())
    }

    /// Commit, then write `body` unchanged; returns the number of body bytes
    pub fn render_html<S: ResponseSink + ?Sized>(
        &self,
        sink: &mut S,
        body: impl AsRef<[u8]>,
    ) -> Result<usize, HxError> {
        self.commit(sink)?;
        let body = body.as_ref();
        if let Err(source) = sink.write_body(body) {
            warn!(error = %source, "failed to write htmx response body");
            return Err(HxError::Write {
                context: "writing htmx response body",
                source,
            });
        }
        debug!(bytes = body.len(), "wrote htmx response body");
        Ok(body.len())
    }

    /// Like [`render_html`](Self::render_html), for call sites that cannot recover
    ///
    /// # Panics
    ///
    /// Panics if encoding, committing or writing the body fails.
    pub fn must_render_html<S: ResponseSink + ?Sized>(
        &self,
        sink: &mut S,
        body: impl AsRef<[u8]>,
    ) -> usize {
        match self.render_html(sink, body) {
            Ok(n) => n,
            #[allow(clippy::panic)]
            Err(e) => panic!("htmx response could not be written: {e}"),
        }
    }

    /// Render an askama template, then behave as [`render_html`](Self::render_html)
    ///
    /// The template is rendered before anything is committed, so a render
    /// failure leaves the sink untouched.
    pub fn render_template<S, T>(&self, sink: &mut S, template: &T) -> Result<usize, HxError>
    where
        S: ResponseSink + ?Sized,
        T: askama::Template,
    {
        let html = template.render().map_err(|e| HxError::Render {
            message: e.to_string(),
        })?;
        self.render_html(sink, html)
    }
}

fn encode_triggers(set: &TriggerSet) -> Result<Option<String>, HxError> {
    if set.is_empty() {
        return Ok(None);
    }
    set.encode().map(Some)
}
