//! Stateful fluent receipt writer.

use super::ops::{ReceiptOp, RenderedReceipt};
use super::style::{Alignment, LineStyle};

/// Fluent writer that accumulates receipt ops.
///
/// The current style is explicit state on the writer: alignment and bold
/// persist across `println` calls until changed, so sections rely on
/// style set by earlier calls not being reset implicitly.
///
/// ## Example
///
/// ```
/// use recibo::compose::ReceiptWriter;
///
/// let mut writer = ReceiptWriter::new();
/// writer
///     .align_center()
///     .bold(true)
///     .println("ACME CORP")
///     .bold(false)
///     .println("123 Main St")
///     .draw_line()
///     .cut();
/// let receipt = writer.finish();
/// assert!(receipt.to_text().contains("**ACME CORP**"));
/// ```
#[derive(Debug, Default)]
pub struct ReceiptWriter {
    receipt: RenderedReceipt,
    style: LineStyle,
}

impl ReceiptWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn align_left(&mut self) -> &mut Self {
        self.style.align = Alignment::Left;
        self
    }

    pub fn align_center(&mut self) -> &mut Self {
        self.style.align = Alignment::Center;
        self
    }

    pub fn align_right(&mut self) -> &mut Self {
        self.style.align = Alignment::Right;
        self
    }

    pub fn bold(&mut self, enabled: bool) -> &mut Self {
        self.style.bold = enabled;
        self
    }

    /// Emit one line with the current style.
    pub fn println(&mut self, text: impl Into<String>) -> &mut Self {
        self.receipt.push(ReceiptOp::Line {
            text: text.into(),
            style: self.style,
        });
        self
    }

    /// Emit a horizontal rule.
    pub fn draw_line(&mut self) -> &mut Self {
        self.receipt.push(ReceiptOp::Rule);
        self
    }

    /// Emit the cut instruction.
    pub fn cut(&mut self) -> &mut Self {
        self.receipt.push(ReceiptOp::Cut);
        self
    }

    /// Consume the writer, returning the accumulated receipt.
    pub fn finish(self) -> RenderedReceipt {
        self.receipt
    }
}
