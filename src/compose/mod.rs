//! # Receipt Composition Machinery
//!
//! Building blocks for turning order data into styled receipt lines:
//!
//! ```text
//! Order → ReceiptWriter (stateful style) → RenderedReceipt → text / bytes
//! ```
//!
//! The writer carries the current style (alignment + bold) across calls,
//! so a style set for one section stays in effect until changed. The
//! rendered receipt is an ordered op sequence that serializes either to
//! plain text (simulation artifact) or to printer bytes with a trailing
//! ESC/POS cut command (production dispatch).

mod ops;
mod style;
mod writer;

pub use ops::{CUT_BYTES, CUT_MARKER, HORIZONTAL_RULE, ReceiptOp, RenderedReceipt};
pub use style::{Alignment, LineStyle};
pub use writer::ReceiptWriter;
