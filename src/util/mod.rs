//! Browser utilities and pure helpers shared across pages.

pub mod form;
pub mod storage;
