//! Core library for jsonlab
//!
//! This crate implements the **Functional Core** of the jsonlab application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The jsonlab project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`jsonlab_core`** (this crate): Record types and pure ranking rules with zero I/O
//! - **`jsonlab`**: HTTP fetching, the three orchestration styles and terminal output
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Deterministic**: Sorting is stable, so ties keep their source order
//!
//! # Module Organization
//!
//! - [`records`]: Posts, comments, users and todos as served by the REST API
//! - [`resource`]: The four collection endpoints and how their URLs are built
//! - [`collation`]: Locale-aware string ordering used to rank comments by name
//! - [`rank`]: The four fetch-transform-rank rules, each capped at [`rank::TOP_K`]
//!
//! # Example Usage
//!
//! ```rust
//! use jsonlab_core::rank::top_posts_by_title_length;
//! use jsonlab_core::records::Post;
//!
//! let posts = vec![
//!     Post { id: 1, user_id: 1, title: "a".into(), body: String::new() },
//!     Post { id: 2, user_id: 1, title: "abc".into(), body: String::new() },
//! ];
//!
//! let ranked = top_posts_by_title_length(posts);
//! assert_eq!(ranked[0].title, "abc");
//! ```

pub mod collation;
pub mod rank;
pub mod records;
pub mod resource;
