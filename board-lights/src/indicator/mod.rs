//! Output to a strip of indicator lights.
//!
//! The strip is addressed right to left: the nearest time slot is drawn on
//! the highest pixel, so a board reads like a countdown running towards the
//! end of the strip.

mod colour;
mod memory;
mod terminal;

pub use colour::Colour;
pub use memory::MemoryStrip;
pub use terminal::TerminalStrip;

use tracing::debug;

use crate::lights::Slots;

/// Errors from driving an indicator strip.
#[derive(Debug, thiserror::Error)]
pub enum IndicatorError {
    /// The strip does not have one pixel per slot
    #[error("strip has {strip} pixels but the display has {slots} slots")]
    LengthMismatch { strip: usize, slots: usize },

    /// Writing the frame failed
    #[error("failed to draw frame: {0}")]
    Io(#[from] std::io::Error),
}

/// A fixed-length strip of tri-colour indicators.
///
/// Pixels are staged with [`set_slot_color`](Self::set_slot_color) and only
/// become visible on [`commit_frame`](Self::commit_frame).
pub trait IndicatorStrip {
    /// Number of pixels on the strip.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage the colour of pixel `index`.
    fn set_slot_color(&mut self, index: usize, colour: Colour);

    /// Show the staged frame.
    fn commit_frame(&mut self) -> Result<(), IndicatorError>;
}

/// Draw a set of slots on a strip and commit the frame.
///
/// Nothing is staged if the strip and slot lengths differ.
pub fn render<S: IndicatorStrip + ?Sized>(
    slots: &Slots,
    strip: &mut S,
) -> Result<(), IndicatorError> {
    if strip.len() != slots.len() {
        return Err(IndicatorError::LengthMismatch {
            strip: strip.len(),
            slots: slots.len(),
        });
    }

    let last = slots.len().saturating_sub(1);
    for (slot, severity) in slots.iter().enumerate() {
        strip.set_slot_color(last - slot, Colour::from(severity));
    }

    debug!(pixels = strip.len(), "Committing frame");
    strip.commit_frame()
}
