//! # Protocol Constants
//!
//! Header names read from htmx requests and written onto htmx responses,
//! plus the one status code with protocol meaning.
//!
//! Names are available both as plain `&'static str` constants and as the
//! closed [`RequestHeader`] / [`ResponseHeader`] enumerations. The enums are
//! the fixed lookup table; the constants exist so header names can be used in
//! `match` arms and `const` contexts.

use std::fmt;

/// `HX-Request`: always `true` on requests issued by htmx
pub const HX_REQUEST: &str = "HX-Request";
/// `HX-Boosted`: `true` when the request came from an `hx-boost` element
pub const HX_BOOSTED: &str = "HX-Boosted";
/// `HX-History-Restore-Request`: `true` for history restoration after a cache miss
pub const HX_HISTORY_RESTORE_REQUEST: &str = "HX-History-Restore-Request";
/// `HX-Current-URL`: the browser URL at the time of the request
pub const HX_CURRENT_URL: &str = "HX-Current-URL";
/// `HX-Prompt`: the user response to an `hx-prompt`
pub const HX_PROMPT: &str = "HX-Prompt";
/// `HX-Target`: id of the target element
pub const HX_TARGET: &str = "HX-Target";
/// `HX-Trigger-Name`: name of the triggering element
pub const HX_TRIGGER_NAME: &str = "HX-Trigger-Name";
/// `HX-Trigger`: on requests, id of the triggering element; on responses, events to fire
pub const HX_TRIGGER: &str = "HX-Trigger";

/// `HX-Location`: client-side navigation without a full reload
pub const HX_LOCATION: &str = "HX-Location";
/// `HX-Push-Url`: push a URL into browser history, or `false`
pub const HX_PUSH_URL: &str = "HX-Push-Url";
/// `HX-Redirect`: full client-side redirect
pub const HX_REDIRECT: &str = "HX-Redirect";
/// `HX-Refresh`: `true` forces a full page refresh
pub const HX_REFRESH: &str = "HX-Refresh";
/// `HX-Replace-Url`: replace the current URL in the location bar, or `false`
pub const HX_REPLACE_URL: &str = "HX-Replace-Url";
/// `HX-Reswap`: override the swap style and modifiers
pub const HX_RESWAP: &str = "HX-Reswap";
/// `HX-Retarget`: CSS selector that replaces the swap target
pub const HX_RETARGET: &str = "HX-Retarget";
/// `HX-Reselect`: CSS selector choosing which part of the body is swapped
pub const HX_RESELECT: &str = "HX-Reselect";
/// `HX-Trigger-After-Settle`: events to fire after the settle step
pub const HX_TRIGGER_AFTER_SETTLE: &str = "HX-Trigger-After-Settle";
/// `HX-Trigger-After-Swap`: events to fire after the swap step
pub const HX_TRIGGER_AFTER_SWAP: &str = "HX-Trigger-After-Swap";

/// `Vary`, written only when auto-vary is configured
pub const VARY: &str = "Vary";

/// Status code telling a polling htmx element to stop polling
pub const STATUS_STOP_POLLING: u16 = 286;

/// Headers htmx sends with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestHeader {
    Request,
    Boosted,
    HistoryRestoreRequest,
    CurrentUrl,
    Prompt,
    Target,
    TriggerName,
    Trigger,
}

impl RequestHeader {
    pub const ALL: [RequestHeader; 8] = [
        RequestHeader::Request,
        RequestHeader::Boosted,
        RequestHeader::HistoryRestoreRequest,
        RequestHeader::CurrentUrl,
        RequestHeader::Prompt,
        RequestHeader::Target,
        RequestHeader::TriggerName,
        RequestHeader::Trigger,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RequestHeader::Request => HX_REQUEST,
            RequestHeader::Boosted => HX_BOOSTED,
            RequestHeader::HistoryRestoreRequest => HX_HISTORY_RESTORE_REQUEST,
            RequestHeader::CurrentUrl => HX_CURRENT_URL,
            RequestHeader::Prompt => HX_PROMPT,
            RequestHeader::Target => HX_TARGET,
            RequestHeader::TriggerName => HX_TRIGGER_NAME,
            RequestHeader::Trigger => HX_TRIGGER,
        }
    }
}

/// Headers an htmx response may carry
///
/// Variant order is the order [`crate::HxResponse::commit`] writes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResponseHeader {
    Location,
    PushUrl,
    Redirect,
    Refresh,
    ReplaceUrl,
    Reswap,
    Retarget,
    Reselect,
    Trigger,
    TriggerAfterSettle,
    TriggerAfterSwap,
}

impl ResponseHeader {
    pub const ALL: [ResponseHeader; 11] = [
        ResponseHeader::Location,
        ResponseHeader::PushUrl,
        ResponseHeader::Redirect,
        ResponseHeader::Refresh,
        ResponseHeader::ReplaceUrl,
        ResponseHeader::Reswap,
        ResponseHeader::Retarget,
        ResponseHeader::Reselect,
        ResponseHeader::Trigger,
        ResponseHeader::TriggerAfterSettle,
        ResponseHeader::TriggerAfterSwap,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ResponseHeader::Location => HX_LOCATION,
            ResponseHeader::PushUrl => HX_PUSH_URL,
            ResponseHeader::Redirect => HX_REDIRECT,
            ResponseHeader::Refresh => HX_REFRESH,
            ResponseHeader::ReplaceUrl => HX_REPLACE_URL,
            ResponseHeader::Reswap => HX_RESWAP,
            ResponseHeader::Retarget => HX_RETARGET,
            ResponseHeader::Reselect => HX_RESELECT,
            ResponseHeader::Trigger => HX_TRIGGER,
            ResponseHeader::TriggerAfterSettle => HX_TRIGGER_AFTER_SETTLE,
            ResponseHeader::TriggerAfterSwap => HX_TRIGGER_AFTER_SWAP,
        }
    }
}

impl fmt::Display for RequestHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ResponseHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
