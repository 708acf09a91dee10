//! Core library for the board-tools command line application.
//!
//! The library exposes the transform pipeline that powers the command-line
//! interface as well as the tests. The modules are structured to keep
//! responsibilities narrow and composable: the data representations live in
//! [`board::tools::model`], id resolution in [`board::tools::lookup`], the
//! hierarchy reconstruction in [`board::tools::hierarchy`], the table
//! flattening in [`board::tools::flatten`], format renderers under
//! [`board::tools::io`], and the end-to-end orchestration in
//! [`board::tools::sync`].

pub mod board;

pub use board::tools::{
    Result, ToolError, classify, error, flatten, hierarchy, io, lookup, model, sync,
};
