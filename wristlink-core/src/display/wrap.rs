//! Pixel-width word wrapping for the body region

use heapless::Vec;

use super::fields::BodyLine;
use crate::config::BODY_LINES;
use crate::text::{bounded, push_bounded};
use crate::traits::TextMetrics;

/// Wrap `text` to the metrics' line width, producing at most `max_lines` rows
///
/// Words are packed greedily. A word wider than a whole row is split at the
/// character where it overflows. Explicit newlines start a new row. Output
/// stops once `max_lines` rows are produced.
pub fn wrap_text_to_pixels<M: TextMetrics>(
    text: &str,
    metrics: &M,
    max_lines: usize,
) -> Vec<BodyLine, BODY_LINES> {
    let max_lines = max_lines.min(BODY_LINES);
    let max_width = metrics.line_width();
    let mut lines: Vec<BodyLine, BODY_LINES> = Vec::new();

    if max_lines == 0 || text.is_empty() {
        return lines;
    }

    let fits = |line: &BodyLine| metrics.text_width(line) <= max_width;

    for paragraph in text.split('\n') {
        let mut line = BodyLine::new();

        for word in paragraph.split(' ').filter(|w| !w.is_empty()) {
            // Try the word on the current row
            let mut candidate = line.clone();
            let joined = (candidate.is_empty() || candidate.push(' ').is_ok())
                && push_bounded(&mut candidate, word);
            if joined && fits(&candidate) {
                line = candidate;
                continue;
            }

            // Start a new row with the word
            if !line.is_empty() {
                if lines.push(line).is_err() || lines.len() == max_lines {
                    return lines;
                }
                line = BodyLine::new();
            }

            let whole: BodyLine = bounded(word);
            if whole.len() == word.len() && fits(&whole) {
                line = whole;
                continue;
            }

            // Word is wider than a row: break it where it overflows
            for c in word.chars() {
                let mut candidate = line.clone();
                if candidate.push(c).is_ok() && (fits(&candidate) || line.is_empty()) {
                    line = candidate;
                    continue;
                }
                if lines.push(line).is_err() || lines.len() == max_lines {
                    return lines;
                }
                line = BodyLine::new();
                let _ = line.push(c);
            }
        }

        if lines.push(line).is_err() || lines.len() == max_lines {
            return lines;
        }
    }

    lines
}

/// Body rows for a notification
///
/// The message is wrapped to at most four rows. If that leaves room, the
/// source app id fills the next row, still within the four-row budget.
pub fn body_lines<M: TextMetrics>(
    message: &str,
    app_id: &str,
    metrics: &M,
) -> Vec<BodyLine, BODY_LINES> {
    let mut lines = wrap_text_to_pixels(message, metrics, BODY_LINES);
    if lines.len() < BODY_LINES && !app_id.is_empty() {
        let _ = lines.push(bounded(app_id));
    }
    lines
}
