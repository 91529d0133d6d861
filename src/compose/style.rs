//! Line styling: alignment and bold.
//!
//! The padding rules reproduce the upstream formatter exactly, quirks
//! included. Bold wraps the text in `**` markers first; alignment padding
//! is then computed from the wrapped length. Centering pads the line on
//! the left by `40 + len/2` spaces (not true centering), and right
//! alignment pads the line out to a total width of 80.

/// Horizontal alignment of a receipt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Total line width that right alignment pads to.
pub const RIGHT_ALIGN_WIDTH: usize = 80;

/// Style in effect when a line is emitted.
///
/// Captured per line from the writer's current state, so a style change
/// applies to every subsequent line until changed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineStyle {
    pub align: Alignment,
    pub bold: bool,
}

impl LineStyle {
    /// Render `text` with this style applied.
    pub fn apply(&self, text: &str) -> String {
        let formatted = if self.bold {
            format!("**{text}**")
        } else {
            text.to_string()
        };

        let len = formatted.chars().count();
        match self.align {
            Alignment::Left => formatted,
            Alignment::Center => {
                let pad = 40 + len / 2;
                format!("{}{}", " ".repeat(pad), formatted)
            }
            Alignment::Right => {
                if len >= RIGHT_ALIGN_WIDTH {
                    formatted
                } else {
                    format!("{}{}", " ".repeat(RIGHT_ALIGN_WIDTH - len), formatted)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_left_alignment_adds_no_padding() {
        let style = LineStyle::default();
        assert_eq!(style.apply("hello"), "hello");
    }

    #[test]
    fn test_center_pads_by_forty_plus_half_length() {
        let style = LineStyle {
            align: Alignment::Center,
            bold: false,
        };
        // len 10 -> 40 + 5 = 45 leading spaces
        let line = style.apply("0123456789");
        assert_eq!(line, format!("{}0123456789", " ".repeat(45)));
    }

    #[test]
    fn test_center_floors_odd_lengths() {
        let style = LineStyle {
            align: Alignment::Center,
            bold: false,
        };
        // len 5 -> 40 + 2 = 42 leading spaces
        let line = style.apply("abcde");
        assert_eq!(line.len(), 42 + 5);
    }

    #[test]
    fn test_right_pads_to_total_width_80() {
        let style = LineStyle {
            align: Alignment::Right,
            bold: false,
        };
        let line = style.apply("total");
        assert_eq!(line.chars().count(), 80);
        assert!(line.ends_with("total"));
    }

    #[test]
    fn test_right_leaves_long_lines_alone() {
        let style = LineStyle {
            align: Alignment::Right,
            bold: false,
        };
        let long = "x".repeat(90);
        assert_eq!(style.apply(&long), long);
    }

    #[test]
    fn test_bold_wraps_before_padding() {
        let style = LineStyle {
            align: Alignment::Center,
            bold: true,
        };
        // "**hi**" has len 6 -> 40 + 3 = 43 leading spaces
        let line = style.apply("hi");
        assert_eq!(line, format!("{}**hi**", " ".repeat(43)));
    }
}
