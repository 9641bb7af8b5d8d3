//! Measure-then-layout sizing.
//!
//! Pass one renders a block and measures it; pass two (here) turns those
//! measurements into the size of the fillers that pad the panels out to
//! their quota. All arithmetic is integer floor division, and every filler
//! saturates at zero: content that overflows its panel is left for
//! [`super::compose::fit`] to clip.

use ratatui::text::Text;

use super::compose::Measure;

/// Fraction of the terminal (as a divisor) kept as margin around panels.
pub const MARGIN_DIVISOR: usize = 10;

/// Interior size allotted to each of the two panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSize {
    pub width: usize,
    pub height: usize,
}

/// `width/2 - width/10` by `height/2`.
pub fn panel_size(term_width: u16, term_height: u16) -> PanelSize {
    let (w, h) = (usize::from(term_width), usize::from(term_height));
    PanelSize {
        width: (w / 2).saturating_sub(w / MARGIN_DIVISOR),
        height: h / 2,
    }
}

/// Filler sizes for the input/status panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeftPanelLayout {
    /// Blank rows between the prompt and the status line.
    pub filler_height: usize,
    /// Bar-colored cells between the status text and the credit label.
    pub status_filler_width: usize,
}

pub fn plan_left_panel(
    panel: PanelSize,
    prompt: &Text<'_>,
    status: &Text<'_>,
    credit: &Text<'_>,
    measure: &impl Measure,
) -> LeftPanelLayout {
    LeftPanelLayout {
        filler_height: panel
            .height
            .saturating_sub(measure.height(prompt))
            .saturating_sub(measure.height(status)),
        status_filler_width: panel
            .width
            .saturating_sub(measure.width(status))
            .saturating_sub(measure.width(credit)),
    }
}

/// Filler size for the options/answers panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightPanelLayout {
    /// Blank rows between the option cells and the found answers.
    pub filler_height: usize,
}

pub fn plan_right_panel(
    panel: PanelSize,
    term_height: u16,
    options: &Text<'_>,
    answers: &Text<'_>,
    measure: &impl Measure,
) -> RightPanelLayout {
    RightPanelLayout {
        filler_height: panel
            .height
            .saturating_sub(measure.height(options))
            .saturating_sub(measure.height(answers))
            .saturating_sub(usize::from(term_height) / MARGIN_DIVISOR),
    }
}

// ============================================================================
// TESTS
// ============================================================================
