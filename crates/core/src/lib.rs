//! Core library for haystack
//!
//! This crate implements the **Functional Core** of the haystack application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The haystack project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`haystack_core`** (this crate): Pure transformation functions with zero I/O
//! - **`haystack`**: HTTP, terminal and process concerns (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no terminal probing, no clock reads
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`pinboard`]: Wire schema, domain model, normalization, tag ranking,
//!   post ordering and text rendering for the Pinboard API
//! - [`duration`]: Parsing of human-friendly timeout values
//! - [`error`]: Errors raised while normalizing wire data
//!
//! # Example Usage
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use haystack_core::pinboard::tags::tags_like;
//!
//! let vocabulary = BTreeMap::from([
//!     ("golang".to_string(), 5),
//!     ("goroutine".to_string(), 3),
//!     ("python".to_string(), 1),
//! ]);
//!
//! let ranked = tags_like(&vocabulary, &["go".to_string()]);
//!
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].tag, "golang");
//! ```

pub mod duration;
pub mod error;
pub mod pinboard;
