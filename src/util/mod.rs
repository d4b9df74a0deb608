//! Browser persistence glue.

pub mod cookies;
