//! # dotmatrix tool
//!
//! Command line front end for the [`dotmatrix`] crate.
#![warn(missing_docs)]

pub mod cli;
