//! Greedy word wrapping against a measured width budget.

use unicode_width::UnicodeWidthStr;

#[cfg(test)]
#[path = "wrap_tests.rs"]
mod tests;

/// Visual indent prepended to continuation lines of a wrapped line.
pub const CONTINUATION_INDENT: &str = "     ";

/// Text width measurement seam.
///
/// The wrapping algorithm never assumes one column per character; the
/// measurer decides. Production code measures terminal cells; tests use a
/// fixed-width fake.
pub trait TextMeasure {
    /// Display width of `text` in budget units.
    fn width(&self, text: &str) -> usize;
}

/// Terminal cell measurement via Unicode width rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn width(&self, text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }
}

/// Wrap one logical line into display lines no wider than `budget`.
///
/// Words pack greedily left to right. When a word would overflow, the line
/// breaks and the word continues on a new line behind
/// [`CONTINUATION_INDENT`]. A single word wider than the remaining budget
/// splits at character granularity. An empty input yields one empty
/// display line so blank lines survive in scrollback.
pub fn wrap_line(line: &str, budget: usize, measure: &impl TextMeasure) -> Vec<String> {
    // Whitespace-only strings measure zero on some backends; probe an
    // underscore for the separator width.
    let space_w = measure.width("_").max(1);
    let indent_w = space_w * CONTINUATION_INDENT.len();

    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut has_content = false;
    let mut space_left = budget;

    for word in line.split_whitespace() {
        let word_w = measure.width(word);
        let sep_w = if has_content { space_w } else { 0 };

        if word_w + sep_w <= space_left {
            if has_content {
                current.push(' ');
            }
            current.push_str(word);
            space_left -= word_w + sep_w;
            has_content = true;
            continue;
        }

        // Word does not fit on the current line.
        if has_content {
            wrapped.push(std::mem::take(&mut current));
            has_content = false;
        }

        if word_w + indent_w <= budget {
            current = format!("{CONTINUATION_INDENT}{word}");
            space_left = budget - indent_w - word_w;
            has_content = true;
        } else {
            // Word wider than a whole line: split at character granularity.
            let (frag, frag_w) = split_long_word(word, budget, indent_w, &mut wrapped, measure);
            current = frag;
            space_left = budget.saturating_sub(frag_w);
            has_content = true;
        }
    }

    wrapped.push(current);
    wrapped
}

/// Emit full-width fragments of `word` into `out`; return the trailing
/// fragment and its width so following words can pack onto it.
fn split_long_word(
    word: &str,
    budget: usize,
    indent_w: usize,
    out: &mut Vec<String>,
    measure: &impl TextMeasure,
) -> (String, usize) {
    // The very first display line of the wrap stays unindented.
    let (mut frag, mut frag_w, mut base_w) = if out.is_empty() {
        (String::new(), 0, 0)
    } else {
        (CONTINUATION_INDENT.to_string(), indent_w, indent_w)
    };

    let mut scratch = [0u8; 4];
    for ch in word.chars() {
        let ch_w = measure.width(ch.encode_utf8(&mut scratch));
        // Always place at least one character per line so degenerate
        // budgets still terminate.
        if frag_w + ch_w > budget && frag_w > base_w {
            out.push(std::mem::take(&mut frag));
            frag.push_str(CONTINUATION_INDENT);
            frag_w = indent_w;
            base_w = indent_w;
        }
        frag.push(ch);
        frag_w += ch_w;
    }
    (frag, frag_w)
}
