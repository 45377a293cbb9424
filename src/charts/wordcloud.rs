//! Word Cloud Widget
//! Flow layout of title words, font size scaled by frequency.

use super::plotter::PALETTE;
use crate::stats::WordCount;
use egui::{FontId, Pos2, RichText, Sense, Vec2};

const MIN_FONT: f32 = 12.0;
const MAX_FONT: f32 = 48.0;
const WORD_GAP: f32 = 10.0;
const LINE_GAP: f32 = 4.0;

/// Font size for a word seen `count` times when the most frequent word is
/// seen `max_count` times. Square-root scaling keeps rare words legible.
pub fn font_size(count: usize, max_count: usize) -> f32 {
    if max_count == 0 {
        return MIN_FONT;
    }
    let ratio = (count.min(max_count) as f32 / max_count as f32).sqrt();
    MIN_FONT + (MAX_FONT - MIN_FONT) * ratio
}

/// Place boxes of the given sizes left to right, wrapping at `width`, each
/// line centred. Returns the top-left offset of every box and the total size.
pub fn flow_layout(sizes: &[Vec2], width: f32) -> (Vec<Vec2>, Vec2) {
    let mut offsets = vec![Vec2::ZERO; sizes.len()];
    let mut lines: Vec<(usize, usize, f32, f32)> = Vec::new(); // (start, end, line width, line height)

    let mut start = 0;
    let mut line_width = 0.0f32;
    let mut line_height = 0.0f32;
    for (i, size) in sizes.iter().enumerate() {
        let extra = if i == start { size.x } else { WORD_GAP + size.x };
        if i > start && line_width + extra > width {
            lines.push((start, i, line_width, line_height));
            start = i;
            line_width = size.x;
            line_height = size.y;
        } else {
            line_width += extra;
            line_height = line_height.max(size.y);
        }
    }
    if start < sizes.len() {
        lines.push((start, sizes.len(), line_width, line_height));
    }

    let mut y = 0.0f32;
    let mut widest = 0.0f32;
    for &(start, end, line_width, line_height) in &lines {
        let mut x = ((width - line_width) / 2.0).max(0.0);
        for i in start..end {
            // Baseline-align by pushing smaller words down
            offsets[i] = Vec2::new(x, y + line_height - sizes[i].y);
            x += sizes[i].x + WORD_GAP;
        }
        widest = widest.max(line_width);
        y += line_height + LINE_GAP;
    }
    let height = if lines.is_empty() { 0.0 } else { y - LINE_GAP };

    (offsets, Vec2::new(widest.min(width).max(0.0), height))
}

/// Draw the word cloud into the available width.
pub fn draw_word_cloud(ui: &mut egui::Ui, words: &[WordCount]) {
    if words.is_empty() {
        ui.label(RichText::new("No words to show").italics());
        return;
    }

    let max_count = words.iter().map(|w| w.count).max().unwrap_or(0);
    let width = ui.available_width();
    let painter = ui.painter().clone();

    let galleys: Vec<_> = words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let color = PALETTE[i % PALETTE.len()];
            painter.layout_no_wrap(
                w.word.clone(),
                FontId::proportional(font_size(w.count, max_count)),
                color,
            )
        })
        .collect();
    let sizes: Vec<Vec2> = galleys.iter().map(|g| g.size()).collect();
    let (offsets, total) = flow_layout(&sizes, width);

    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, total.y), Sense::hover());
    for ((galley, offset), i) in galleys.into_iter().zip(offsets).zip(0..) {
        let pos: Pos2 = rect.min + offset;
        painter.galley(pos, galley, PALETTE[i % PALETTE.len()]);
    }
}
