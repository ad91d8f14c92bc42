//! Client-side enhancement layer for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and attached to an existing page. It
//! owns theme persistence, navigation behavior, scroll-linked section state,
//! contact form validation, and the decorative animations. The markup and
//! stylesheet are external; this crate only reads the DOM hooks they expose
//! and mutates them in response to browser events.
//!
//! All decisions are made by the pure [`page::Page`] core, which turns each
//! browser event into a list of [`effect::Effect`]s. The `browser` module
//! (behind the `browser` feature) binds the real DOM, registers listeners, and
//! executes those effects. Everything outside `browser` builds and tests
//! natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Top-level controller; one method per browser event |
//! | [`viewport`] | Current-section tracking and one-shot enter animations |
//! | [`nav`] | Mobile menu, smooth scroll targets, active-link highlighting |
//! | [`theme`] | Light/dark theme state and persistence |
//! | [`store`] | Preference store trait and in-memory implementation |
//! | [`form`] | Contact form validation |
//! | [`notify`] | Transient toast notifications |
//! | [`fx`] | Parallax, ripple, typed intro, lazy images, hover lift |
//! | [`effect`] | DOM mutation vocabulary shared by the core and the host |
//! | [`config`] | Runtime configuration with defaults |
//! | [`consts`] | Default timings, offsets, and storage keys |
//! | `browser` | DOM binding, listeners, timers (`browser` feature only) |

pub mod config;
pub mod consts;
pub mod effect;
pub mod form;
pub mod fx;
pub mod nav;
pub mod notify;
pub mod page;
pub mod store;
pub mod theme;
pub mod viewport;

#[cfg(feature = "browser")]
pub mod browser;
