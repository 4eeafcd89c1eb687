//! Markdown display for plan results and their parts.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections that need their own header or empty-state message get a
//! newtype wrapper (see [`collections`]).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Display impls & │    │    Markdown     │
//! │ (PlanResult...) │───▶│    wrappers     │───▶│ (Terminal/MCP)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrappers ([`TaskList`])
//! - [`datetime`]: date/time formatting in the system time zone
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use jiff::Timestamp;
//! use stride_core::models::PlanResult;
//!
//! let failed = PlanResult::failure("Goal and timeframe are required", Timestamp::now());
//! assert!(failed.to_string().contains("Goal and timeframe are required"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;

pub use collections::TaskList;
pub use datetime::{LocalDate, LocalDateTime};
