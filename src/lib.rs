// lib.rs
//
// pixlab: single-shot image transforms behind a browser image editor
//
// Design goals:
// - One decoded buffer, one operation, one result - nothing retained
// - Closed operation enum, matched exhaustively
// - Parameter validation at the dispatch boundary, never a library fault
// - The surrounding UI (upload widget, selector, renderer) stays outside

pub mod engine;
pub mod error;
pub mod ops;

pub use engine::{apply, decode_rgb, Histogram, Output};
pub use error::{ErrorCategory, Result, TransformError};
pub use ops::{FlipAxis, Operation, OperationContract, OperationEffect, OutputKind};
