//! In-memory indicator strip.

use super::{Colour, IndicatorError, IndicatorStrip};

/// A strip that keeps its last committed frame in memory.
///
/// Useful for embedding the board in a program that drives its own
/// hardware, and for tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStrip {
    staged: Vec<Colour>,
    committed: Option<Vec<Colour>>,
    commits: usize,
}

impl MemoryStrip {
    /// Create a strip of `len` pixels, all off.
    pub fn new(len: usize) -> Self {
        Self {
            staged: vec![Colour::Off; len],
            committed: None,
            commits: 0,
        }
    }

    /// The last committed frame, or `None` if nothing has been committed.
    pub fn frame(&self) -> Option<&[Colour]> {
        self.committed.as_deref()
    }

    /// Number of frames committed so far.
    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl IndicatorStrip for MemoryStrip {
    fn len(&self) -> usize {
        self.staged.len()
    }

    fn set_slot_color(&mut self, index: usize, colour: Colour) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = colour;
        }
    }

    fn commit_frame(&mut self) -> Result<(), IndicatorError> {
        self.committed = Some(self.staged.clone());
        self.commits += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staged_pixels_hidden_until_commit() {
        let mut strip = MemoryStrip::new(3);
        strip.set_slot_color(1, Colour::Green);
        assert_eq!(strip.frame(), None);

        strip.commit_frame().unwrap();
        assert_eq!(
            strip.frame(),
            Some(&[Colour::Off, Colour::Green, Colour::Off][..])
        );
        assert_eq!(strip.commits(), 1);
    }

    #[test]
    fn out_of_range_pixel_ignored() {
        let mut strip = MemoryStrip::new(2);
        strip.set_slot_color(5, Colour::Red);
        strip.commit_frame().unwrap();
        assert_eq!(strip.frame(), Some(&[Colour::Off, Colour::Off][..]));
    }
}
