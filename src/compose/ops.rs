//! Rendered receipt ops and serialization.

use super::style::LineStyle;

/// Horizontal rule separating receipt sections.
pub const HORIZONTAL_RULE: &str = "--------------------------------";

/// Textual cut sentinel, emitted in the joined line text.
pub const CUT_MARKER: &str = "=== CUT HERE ===";

/// ESC/POS full cut after feed (GS V 66 0), appended to the byte form
/// for physical printers.
pub const CUT_BYTES: [u8; 4] = [0x1D, 0x56, 0x42, 0x00];

/// One atomic receipt operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptOp {
    /// A text line with the style that was current when it was emitted.
    Line { text: String, style: LineStyle },
    /// Section separator. Emitted unstyled.
    Rule,
    /// Paper cut instruction. Emitted unstyled, always last.
    Cut,
}

/// An ordered receipt, fresh per request and discarded after
/// serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedReceipt {
    ops: Vec<ReceiptOp>,
}

impl RenderedReceipt {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn push(&mut self, op: ReceiptOp) {
        self.ops.push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReceiptOp> {
        self.ops.iter()
    }

    /// Serialize to plain text: each op becomes one line, joined with
    /// `\n`. This is what the simulation artifact holds.
    pub fn to_text(&self) -> String {
        let lines: Vec<String> = self
            .ops
            .iter()
            .map(|op| match op {
                ReceiptOp::Line { text, style } => style.apply(text),
                ReceiptOp::Rule => HORIZONTAL_RULE.to_string(),
                ReceiptOp::Cut => CUT_MARKER.to_string(),
            })
            .collect();
        lines.join("\n")
    }

    /// Serialize to printer bytes: the UTF-8 text followed by the
    /// ESC/POS cut command. This is what production mode base64-encodes
    /// for the print relay.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = self.to_text().into_bytes();
        data.extend_from_slice(&CUT_BYTES);
        data
    }
}

impl FromIterator<ReceiptOp> for RenderedReceipt {
    fn from_iter<T: IntoIterator<Item = ReceiptOp>>(iter: T) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RenderedReceipt {
    type Item = &'a ReceiptOp;
    type IntoIter = std::slice::Iter<'a, ReceiptOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Alignment;
    use pretty_assertions::assert_eq;

    fn line(text: &str) -> ReceiptOp {
        ReceiptOp::Line {
            text: text.to_string(),
            style: LineStyle::default(),
        }
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = RenderedReceipt::new();
        assert!(receipt.is_empty());
        assert_eq!(receipt.to_text(), "");
    }

    #[test]
    fn test_to_text_joins_with_newlines() {
        let receipt: RenderedReceipt =
            [line("first"), ReceiptOp::Rule, line("second")].into_iter().collect();
        assert_eq!(receipt.to_text(), format!("first\n{HORIZONTAL_RULE}\nsecond"));
    }

    #[test]
    fn test_rule_and_cut_ignore_current_style() {
        let styled = LineStyle {
            align: Alignment::Center,
            bold: true,
        };
        let receipt: RenderedReceipt = [
            ReceiptOp::Line {
                text: "title".to_string(),
                style: styled,
            },
            ReceiptOp::Rule,
            ReceiptOp::Cut,
        ]
        .into_iter()
        .collect();

        let text = receipt.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], HORIZONTAL_RULE);
        assert_eq!(lines[2], CUT_MARKER);
    }

    #[test]
    fn test_to_bytes_appends_cut_command() {
        let receipt: RenderedReceipt = [line("hello"), ReceiptOp::Cut].into_iter().collect();
        let bytes = receipt.to_bytes();
        assert!(bytes.ends_with(&CUT_BYTES));
        let text_len = receipt.to_text().len();
        assert_eq!(bytes.len(), text_len + CUT_BYTES.len());
    }
}
