//! # Swap Style and Modifiers
//!
//! [`Swap`] describes how htmx should place a returned fragment: the base
//! [`SwapStyle`] plus optional timing, scrolling and transition modifiers.
//! It is sent as the `HX-Reswap` header and as the `swap` field of a
//! location context.
//!
//! ## Encoding
//!
//! Tokens are space separated and always emitted in the same order,
//! whatever order the modifiers were set in:
//!
//! ```text
//! <style> swap:<ms>ms settle:<ms>ms scroll:[<target>:]<dir> show:[<target>:]<dir>
//!         transition:true ignoreTitle:true focus-scroll:<bool>
//! ```
//!
//! ```rust
//! use hxkit::{Swap, ScrollDirection};
//! use std::time::Duration;
//!
//! let a = Swap::before_end()
//!     .scroll(ScrollDirection::Bottom)
//!     .settle_after(Duration::from_millis(500));
//! let b = Swap::before_end()
//!     .settle_after(Duration::from_millis(500))
//!     .scroll(ScrollDirection::Bottom);
//! assert_eq!(a.encode(), "beforeend settle:500ms scroll:bottom");
//! assert_eq!(a, b);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::HxError;

/// How a fragment replaces or joins the target element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwapStyle {
    /// Replace the inner html of the target element
    #[default]
    InnerHtml,
    /// Replace the entire target element
    OuterHtml,
    /// Insert before the target element
    BeforeBegin,
    /// Insert before the first child of the target element
    AfterBegin,
    /// Insert after the last child of the target element
    BeforeEnd,
    /// Insert after the target element
    AfterEnd,
    /// Delete the target element regardless of the response
    Delete,
    /// Do not append content (out-of-band items are still processed)
    None,
}

impl SwapStyle {
    pub const ALL: [SwapStyle; 8] = [
        SwapStyle::InnerHtml,
        SwapStyle::OuterHtml,
        SwapStyle::BeforeBegin,
        SwapStyle::AfterBegin,
        SwapStyle::BeforeEnd,
        SwapStyle::AfterEnd,
        SwapStyle::Delete,
        SwapStyle::None,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SwapStyle::InnerHtml => "innerHTML",
            SwapStyle::OuterHtml => "outerHTML",
            SwapStyle::BeforeBegin => "beforebegin",
            SwapStyle::AfterBegin => "afterbegin",
            SwapStyle::BeforeEnd => "beforeend",
            SwapStyle::AfterEnd => "afterend",
            SwapStyle::Delete => "delete",
            SwapStyle::None => "none",
        }
    }
}

impl fmt::Display for SwapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact protocol token; matching is case-sensitive.
impl FromStr for SwapStyle {
    type Err = HxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SwapStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| HxError::UnknownSwapStyle {
                token: s.to_string(),
            })
    }
}

/// Direction for `scroll:` and `show:` modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Top,
    Bottom,
}

impl ScrollDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ScrollDirection::Top => "top",
            ScrollDirection::Bottom => "bottom",
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `scroll:` or `show:` modifier, optionally aimed at a selector
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScrollSpec {
    pub target: Option<String>,
    pub direction: ScrollDirection,
}

impl ScrollSpec {
    fn write_token(&self, key: &str, out: &mut String) {
        out.push(' ');
        out.push_str(key);
        out.push(':');
        if let Some(target) = &self.target {
            out.push_str(target);
            out.push(':');
        }
        out.push_str(self.direction.as_str());
    }
}

/// A single swap directive: style plus modifiers
///
/// Builder methods consume and return `self`, so a swap reads as one
/// expression. Setting the same modifier twice keeps the last value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Swap {
    style: SwapStyle,
    swap_delay: Option<Duration>,
    settle_delay: Option<Duration>,
    scroll: Option<ScrollSpec>,
    show: Option<ScrollSpec>,
    transition: bool,
    ignore_title: bool,
    focus_scroll: Option<bool>,
}

impl Swap {
    #[must_use]
    pub fn new(style: SwapStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn inner_html() -> Self {
        Self::new(SwapStyle::InnerHtml)
    }

    #[must_use]
    pub fn outer_html() -> Self {
        Self::new(SwapStyle::OuterHtml)
    }

    #[must_use]
    pub fn before_begin() -> Self {
        Self::new(SwapStyle::BeforeBegin)
    }

    #[must_use]
    pub fn after_begin() -> Self {
        Self::new(SwapStyle::AfterBegin)
    }

    #[must_use]
    pub fn before_end() -> Self {
        Self::new(SwapStyle::BeforeEnd)
    }

    #[must_use]
    pub fn after_end() -> Self {
        Self::new(SwapStyle::AfterEnd)
    }

    #[must_use]
    pub fn delete() -> Self {
        Self::new(SwapStyle::Delete)
    }

    #[must_use]
    pub fn none() -> Self {
        Self::new(SwapStyle::None)
    }

    /// Replace the base style, keeping modifiers
    #[must_use]
    pub fn with_style(mut self, style: SwapStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn style(&self) -> SwapStyle {
        self.style
    }

    /// Scroll the target element to its top or bottom after swapping
    #[must_use]
    pub fn scroll(mut self, direction: ScrollDirection) -> Self {
        self.scroll = Some(ScrollSpec {
            target: None,
            direction,
        });
        self
    }

    /// Scroll the element matching `selector` instead of the target
    #[must_use]
    pub fn scroll_on(mut self, selector: impl Into<String>, direction: ScrollDirection) -> Self {
        self.scroll = Some(ScrollSpec {
            target: Some(selector.into()),
            direction,
        });
        self
    }

    #[must_use]
    pub fn scroll_top(self) -> Self {
        self.scroll(ScrollDirection::Top)
    }

    #[must_use]
    pub fn scroll_bottom(self) -> Self {
        self.scroll(ScrollDirection::Bottom)
    }

    /// Scroll the viewport so the target's top or bottom is visible
    #[must_use]
    pub fn show(mut self, direction: ScrollDirection) -> Self {
        self.show = Some(ScrollSpec {
            target: None,
            direction,
        });
        self
    }

    /// Bring the element matching `selector` into view
    #[must_use]
    pub fn show_on(mut self, selector: impl Into<String>, direction: ScrollDirection) -> Self {
        self.show = Some(ScrollSpec {
            target: Some(selector.into()),
            direction,
        });
        self
    }

    /// Scroll the whole window, e.g. `show:window:top`
    #[must_use]
    pub fn show_window(self, direction: ScrollDirection) -> Self {
        self.show_on("window", direction)
    }

    #[must_use]
    pub fn show_top(self) -> Self {
        self.show(ScrollDirection::Top)
    }

    #[must_use]
    pub fn show_bottom(self) -> Self {
        self.show(ScrollDirection::Bottom)
    }

    /// Delay between receiving the response and swapping it in
    #[must_use]
    pub fn after(mut self, delay: Duration) -> Self {
        self.swap_delay = Some(delay);
        self
    }

    /// Delay between the swap and the settle step
    #[must_use]
    pub fn settle_after(mut self, delay: Duration) -> Self {
        self.settle_delay = Some(delay);
        self
    }

    /// Use the View Transitions API for this swap
    #[must_use]
    pub fn transition(mut self, enabled: bool) -> Self {
        self.transition = enabled;
        self
    }

    /// Keep the page title even if the fragment carries a `<title>`
    #[must_use]
    pub fn ignore_title(mut self, enabled: bool) -> Self {
        self.ignore_title = enabled;
        self
    }

    /// Scroll to the focused element after swapping
    #[must_use]
    pub fn focus_scroll(mut self, enabled: bool) -> Self {
        self.focus_scroll = Some(enabled);
        self
    }

    /// Canonical header value for this swap
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::from(self.style.as_str());
        if let Some(delay) = self.swap_delay {
            out.push_str(&format!(" swap:{}ms", delay.as_millis()));
        }
        if let Some(delay) = self.settle_delay {
            out.push_str(&format!(" settle:{}ms", delay.as_millis()));
        }
        if let Some(scroll) = &self.scroll {
            scroll.write_token("scroll", &mut out);
        }
        if let Some(show) = &self.show {
            show.write_token("show", &mut out);
        }
        if self.transition {
            out.push_str(" transition:true");
        }
        if self.ignore_title {
            out.push_str(" ignoreTitle:true");
        }
        if let Some(focus) = self.focus_scroll {
            out.push_str(&format!(" focus-scroll:{focus}"));
        }
        out
    }
}

impl From<SwapStyle> for Swap {
    fn from(style: SwapStyle) -> Self {
        Swap::new(style)
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
