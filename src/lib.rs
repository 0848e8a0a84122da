//! # hxkit
//!
//! **hxkit** is the server-side half of the [htmx](https://htmx.org) response
//! protocol: a builder that turns "swap this, scroll there, fire that event"
//! into the exact `HX-*` headers htmx expects, and a set of helpers that read
//! the `HX-*` headers htmx sends.
//!
//! ## Overview
//!
//! The crate is independent of any server framework. Responses are written
//! through the [`ResponseSink`] trait and requests are read through the
//! [`HeaderSource`] trait; both are implemented for the `http` crate types
//! and for the in-memory [`BufferedResponse`].
//!
//! ## Architecture
//!
//! - **[`headers`]** - Protocol header names and the stop-polling status code
//! - **[`swap`]** - Swap style and modifiers (`HX-Reswap`, location `swap`)
//! - **[`location`]** - `HX-Location` plain path or JSON context
//! - **[`trigger`]** - Ordered event sets for the three trigger headers
//! - **[`response`]** - The [`HxResponse`] builder and its commit/render operations
//! - **[`request`]** - Stateless inspection of inbound htmx headers
//! - **[`sink`]** - The sink/source traits and their implementations
//! - **[`config`]** - Commit options from environment or YAML
//!
//! ### Response Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Handler
//!     participant Req as request::*
//!     participant Builder as HxResponse
//!     participant Sink as ResponseSink
//!
//!     Handler->>Req: is_htmx(&headers)
//!     Req-->>Handler: true
//!     Handler->>Builder: retarget / reswap / add_trigger ...
//!     Handler->>Builder: render_html(&mut sink, body)
//!     Builder->>Builder: headers() (encode all, fail fast)
//!     Builder->>Sink: set_status (if set)
//!     Builder->>Sink: set_header x N (fixed order)
//!     Builder->>Sink: write_body
//!     Sink-->>Handler: Ok(bytes) / HxError::Write
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use hxkit::{request, HxResponse, Trigger};
//!
//! fn handle(req: &http::Request<()>) -> Result<http::Response<Vec<u8>>, hxkit::HxError> {
//!     let mut res = http::Response::new(Vec::new());
//!     if !request::is_htmx(req) {
//!         HxResponse::new().redirect("/").commit(&mut res)?;
//!         return Ok(res);
//!     }
//!     HxResponse::new()
//!         .push_url("/cats")
//!         .add_trigger(Trigger::detail("notify", "Cat saved"))
//!         .render_html(&mut res, "<li>Tom</li>")?;
//!     Ok(res)
//! }
//!
//! let req = http::Request::builder().header("HX-Request", "true").body(()).unwrap();
//! let res = handle(&req).unwrap();
//! assert_eq!(res.headers()["HX-Trigger"], r#"{"notify":"Cat saved"}"#);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` on commit and body write,
//! `warn` on a failed body write) and never installs a subscriber.

pub mod config;
pub mod error;
pub mod headers;
pub mod location;
pub mod request;
pub mod response;
pub mod sink;
pub mod swap;
pub mod trigger;

pub use config::HxConfig;
pub use error::HxError;
pub use headers::{RequestHeader, ResponseHeader, STATUS_STOP_POLLING};
pub use location::{Location, LocationContext};
pub use request::HxRequest;
pub use response::{HeaderList, HxResponse, UrlUpdate};
pub use sink::{BufferedResponse, HeaderSource, HeaderVec, ResponseSink};
pub use swap::{ScrollDirection, ScrollSpec, Swap, SwapStyle};
pub use trigger::{Trigger, TriggerSet};
