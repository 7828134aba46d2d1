//! Segmentation and dispatch engine.
//!
//! Decoding a raw report is a two-stage pipeline, both stages pure and
//! single-pass:
//!
//! ```text
//! raw report ── segment (segment.rs) ──► ordered tokens
//!                 - reserve multi-word spans, most-specific first
//!                 - split the remainder on whitespace
//!                               │
//!                               v
//!               decode (dispatch.rs), per token
//!                 - walk the rule library in priority order
//!                 - first matcher hit wins
//!                 - absence-marker results fall through to later rules
//!                               │
//!                               v
//!               Decoded { category, explanation, hint } | undecoded
//! ```
//!
//! Neither stage owns shared state: the same input against the same library
//! always produces the same output, and callers may run both from any number
//! of threads without coordination.
//!
//! ## Responsibilities by module
//!
//! - `segment.rs`: turns the raw report into tokens without breaking known
//!   multi-word grammar elements (`PK WND 28015/25`, `CIG 030 N`, ...).
//! - `dispatch.rs`: first-match-wins resolution of one token against the
//!   ordered rule library.

#[path = "engine/dispatch.rs"]
pub(crate) mod dispatch;
#[path = "engine/segment.rs"]
pub(crate) mod segment;
