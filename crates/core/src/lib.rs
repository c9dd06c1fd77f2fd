//! Core types for gamestore.
//!
//! Everything in this crate is pure: the repository contract, the record
//! types and the error taxonomy. Concrete backends live in the `gamestore`
//! crate.

pub mod storage;
