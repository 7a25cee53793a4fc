//! Indicator strip drawn on a terminal.

use std::io::Write;

use super::{Colour, IndicatorError, IndicatorStrip};

/// A strip drawn as a row of coloured blocks on a terminal.
///
/// Each commit writes one line. Lit pixels use 24-bit ANSI colour; unlit
/// pixels are drawn as a dim dot so the strip length stays visible.
#[derive(Debug)]
pub struct TerminalStrip<W> {
    out: W,
    pixels: Vec<Colour>,
}

impl TerminalStrip<std::io::Stdout> {
    /// A strip of `len` pixels on standard output.
    pub fn stdout(len: usize) -> Self {
        Self::new(std::io::stdout(), len)
    }
}

impl TerminalStrip<std::io::Stderr> {
    /// A strip of `len` pixels on standard error, leaving stdout to the
    /// report.
    pub fn stderr(len: usize) -> Self {
        Self::new(std::io::stderr(), len)
    }
}

impl<W: Write> TerminalStrip<W> {
    pub fn new(out: W, len: usize) -> Self {
        Self {
            out,
            pixels: vec![Colour::Off; len],
        }
    }

    /// Consume the strip and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn draw(colour: Colour) -> String {
    if colour == Colour::Off {
        return "\x1b[2m·\x1b[0m".to_string();
    }
    let (r, g, b) = colour.rgb();
    format!(
        "\x1b[38;2;{};{};{}m●\x1b[0m",
        u16::from(r) * 255,
        u16::from(g) * 255,
        u16::from(b) * 255
    )
}

impl<W: Write> IndicatorStrip for TerminalStrip<W> {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_slot_color(&mut self, index: usize, colour: Colour) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = colour;
        }
    }

    fn commit_frame(&mut self) -> Result<(), IndicatorError> {
        let line: Vec<String> = self.pixels.iter().map(|&c| draw(c)).collect();
        writeln!(self.out, "{}", line.join(" "))?;
        self.out.flush()?;
        Ok(())
    }
}
