//! Text composition: styled blocks, joins, placement, borders.
//!
//! The compositor in `view` never touches the terminal. It builds frames
//! out of `Text<'static>` blocks using the functions here, then hands the
//! finished block to ratatui. Every function is pure and total: sizes that
//! would go negative are treated as zero, and content wider or taller than
//! a fixed box is clipped by [`fit`] rather than growing the box.
//!
//! Measurement is a separate seam ([`Measure`]) so layout decisions can be
//! tested with fixed sizes while assembly still works on real text.

use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthChar;

// ============================================================================
// MEASUREMENT
// ============================================================================

/// Size of rendered text, in terminal cells.
pub trait Measure {
    /// Widest line.
    fn width(&self, text: &Text<'_>) -> usize;
    /// Number of lines.
    fn height(&self, text: &Text<'_>) -> usize;
}

/// Measures text the way the terminal will draw it (unicode cell widths).
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl Measure for CellMeasure {
    fn width(&self, text: &Text<'_>) -> usize {
        text.width()
    }

    fn height(&self, text: &Text<'_>) -> usize {
        text.height()
    }
}

// ============================================================================
// ALIGNMENT
// ============================================================================

/// Position of a smaller block inside a larger span, on either axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

impl Align {
    /// Split `extra` cells into (before, after).
    fn split(self, extra: usize) -> (usize, usize) {
        match self {
            Align::Start => (0, extra),
            Align::Center => (extra / 2, extra - extra / 2),
            Align::End => (extra, 0),
        }
    }
}

// ============================================================================
// ROWS
// ============================================================================

// Internally a block is a list of rows of spans with fully resolved styles,
// so rows from different blocks can be concatenated without losing the
// text- or line-level style they inherited.
type Row = Vec<Span<'static>>;

fn into_rows(text: Text<'static>) -> Vec<Row> {
    let base = text.style;
    text.lines
        .into_iter()
        .map(|line| {
            let line_style = base.patch(line.style);
            line.spans
                .into_iter()
                .map(|span| {
                    let style = line_style.patch(span.style);
                    Span::styled(span.content, style)
                })
                .collect()
        })
        .collect()
}

fn from_rows(rows: Vec<Row>) -> Text<'static> {
    Text::from(rows.into_iter().map(Line::from).collect::<Vec<_>>())
}

fn row_width(row: &Row) -> usize {
    row.iter().map(Span::width).sum()
}

fn block_width(rows: &[Row]) -> usize {
    rows.iter().map(row_width).max().unwrap_or(0)
}

fn spaces(n: usize, style: Style) -> Span<'static> {
    Span::styled(" ".repeat(n), style)
}

fn blank_row(width: usize, style: Style) -> Row {
    if width == 0 {
        Vec::new()
    } else {
        vec![spaces(width, style)]
    }
}

fn pad_row(mut row: Row, width: usize, align: Align, style: Style) -> Row {
    let extra = width.saturating_sub(row_width(&row));
    let (before, after) = align.split(extra);
    if before > 0 {
        row.insert(0, spaces(before, style));
    }
    if after > 0 {
        row.push(spaces(after, style));
    }
    row
}

/// Cut a row down to at most `width` cells. A wide glyph that would
/// straddle the edge is dropped.
fn truncate_row(row: Row, width: usize) -> Row {
    let mut out = Vec::new();
    let mut used = 0;

    for span in row {
        if used >= width {
            break;
        }
        let span_width = span.width();
        if used + span_width <= width {
            used += span_width;
            out.push(span);
            continue;
        }

        let mut kept = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            kept.push(c);
        }
        if !kept.is_empty() {
            out.push(Span::styled(kept, span.style));
        }
        break;
    }

    out
}

// ============================================================================
// BUILDING BLOCKS
// ============================================================================

/// Single-style text. Newlines start new rows.
pub fn styled(content: impl Into<String>, style: Style) -> Text<'static> {
    let content = content.into();
    from_rows(
        content
            .split('\n')
            .map(|line| vec![Span::styled(line.to_string(), style)])
            .collect(),
    )
}

/// `height` rows of `width` spaces. Zero height yields an empty block.
pub fn blank(width: usize, height: usize, style: Style) -> Text<'static> {
    from_rows((0..height).map(|_| blank_row(width, style)).collect())
}

// ============================================================================
// JOINS
// ============================================================================

/// Stack blocks top to bottom. Narrower rows are padded to the widest,
/// positioned by `align`.
pub fn join_vertical(align: Align, parts: Vec<Text<'static>>) -> Text<'static> {
    let rows: Vec<Row> = parts.into_iter().flat_map(into_rows).collect();
    let width = block_width(&rows);
    from_rows(
        rows.into_iter()
            .map(|row| pad_row(row, width, align, Style::new()))
            .collect(),
    )
}

/// Place blocks side by side. Shorter blocks are padded to the tallest,
/// positioned by `align`; each block keeps its own width.
pub fn join_horizontal(align: Align, parts: Vec<Text<'static>>) -> Text<'static> {
    let blocks: Vec<Vec<Row>> = parts.into_iter().map(into_rows).collect();
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let mut joined: Vec<Row> = vec![Vec::new(); height];

    for rows in blocks {
        let width = block_width(&rows);
        let (top, bottom) = align.split(height - rows.len());

        let padded = std::iter::repeat_with(|| blank_row(width, Style::new()))
            .take(top)
            .chain(
                rows.into_iter()
                    .map(|row| pad_row(row, width, Align::Start, Style::new())),
            )
            .chain(std::iter::repeat_with(|| blank_row(width, Style::new())).take(bottom));

        for (target, row) in joined.iter_mut().zip(padded) {
            target.extend(row);
        }
    }

    from_rows(joined)
}

// ============================================================================
// PLACEMENT
// ============================================================================

/// Position a block inside a `width` x `height` canvas.
///
/// The block keeps its shape (short rows stay left-aligned within it).
/// A block larger than the canvas is returned at its own size.
pub fn place(
    width: usize,
    height: usize,
    horizontal: Align,
    vertical: Align,
    text: Text<'static>,
) -> Text<'static> {
    let rows = into_rows(text);
    let inner_width = block_width(&rows);
    let outer_width = width.max(inner_width);
    let (top, bottom) = vertical.split(height.saturating_sub(rows.len()));

    let mut placed = Vec::with_capacity(top + rows.len() + bottom);
    placed.extend((0..top).map(|_| blank_row(outer_width, Style::new())));
    placed.extend(rows.into_iter().map(|row| {
        let row = pad_row(row, inner_width, Align::Start, Style::new());
        pad_row(row, outer_width, horizontal, Style::new())
    }));
    placed.extend((0..bottom).map(|_| blank_row(outer_width, Style::new())));

    from_rows(placed)
}

/// Force a block to exactly `width` x `height`, padding or clipping.
pub fn fit(text: Text<'static>, width: usize, height: usize) -> Text<'static> {
    let mut rows: Vec<Row> = into_rows(text)
        .into_iter()
        .take(height)
        .map(|row| pad_row(truncate_row(row, width), width, Align::Start, Style::new()))
        .collect();
    while rows.len() < height {
        rows.push(blank_row(width, Style::new()));
    }
    from_rows(rows)
}

/// Draw a single-line border around a `width` x `height` interior.
///
/// The content is fitted to the interior first, so the result is always
/// `width + 2` by `height + 2`.
pub fn bordered(text: Text<'static>, width: usize, height: usize, style: Style) -> Text<'static> {
    let set = border::PLAIN;
    let interior = into_rows(fit(text, width, height));

    let mut rows = Vec::with_capacity(height + 2);
    rows.push(vec![Span::styled(
        format!(
            "{}{}{}",
            set.top_left,
            set.horizontal_top.repeat(width),
            set.top_right
        ),
        style,
    )]);
    for row in interior {
        let mut framed = Vec::with_capacity(row.len() + 2);
        framed.push(Span::styled(set.vertical_left, style));
        framed.extend(row);
        framed.push(Span::styled(set.vertical_right, style));
        rows.push(framed);
    }
    rows.push(vec![Span::styled(
        format!(
            "{}{}{}",
            set.bottom_left,
            set.horizontal_bottom.repeat(width),
            set.bottom_right
        ),
        style,
    )]);

    from_rows(rows)
}

/// Flatten to unstyled text, one `\n` between rows.
pub fn plain_text(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// TESTS
// ============================================================================
