//! table printing

use std::io::Write;

use ansi_term::Style;
use read_strikes::{AvailableSizes, BitmapSize};

const HEADER: &str = "Index  Height  Width      Size    X ppem    Y ppem";

pub struct StrikePrinter<'a> {
    is_tty: bool,
    writer: &'a mut (dyn Write + 'a),
}

impl<'a> StrikePrinter<'a> {
    pub fn new(writer: &'a mut (dyn Write + 'a)) -> Self {
        StrikePrinter {
            is_tty: atty::is(atty::Stream::Stdout),
            writer,
        }
    }

    #[cfg(test)]
    fn plain(writer: &'a mut (dyn Write + 'a)) -> Self {
        StrikePrinter {
            is_tty: false,
            writer,
        }
    }

    pub fn print_sizes(&mut self, sizes: &AvailableSizes) -> std::io::Result<()> {
        if self.is_tty {
            writeln!(self.writer, "{}", Style::new().bold().paint(HEADER))?;
        } else {
            writeln!(self.writer, "{HEADER}")?;
        }
        writeln!(self.writer, "{}", "-".repeat(HEADER.len()))?;
        for (ix, strike) in sizes.iter().enumerate() {
            self.print_strike(ix, strike)?;
        }
        Ok(())
    }

    fn print_strike(&mut self, ix: usize, strike: &BitmapSize) -> std::io::Result<()> {
        writeln!(
            self.writer,
            "{ix:>5}  {:>6}  {:>5}  {:>8}  {:>8}  {:>8}",
            strike.height(),
            strike.width(),
            strike.size().to_string(),
            strike.x_ppem().to_string(),
            strike.y_ppem().to_string(),
        )
    }

    pub fn print_selection(
        &mut self,
        label: &str,
        ix: usize,
        strike: &BitmapSize,
    ) -> std::io::Result<()> {
        let text = format!(
            "{label}: strike {ix} ({}x{} ppem, raw {}x{})",
            strike.x_ppem(),
            strike.y_ppem(),
            strike.x_ppem_raw(),
            strike.y_ppem_raw()
        );
        if self.is_tty {
            writeln!(self.writer, "{}", Style::new().bold().paint(text))
        } else {
            writeln!(self.writer, "{text}")
        }
    }
}
