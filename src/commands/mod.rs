//! Command implementations for the ESPN league history extractor

pub mod extract;
