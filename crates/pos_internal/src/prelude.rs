//! Prelude module for `pos_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use pos_internal::prelude::*;
//! ```

#[doc(inline)]
pub use pos_stream::prelude::*;

#[doc(inline)]
pub use pos_types::prelude::*;
