//! Print the bitmap strikes stored in a native sizes array.
//!
//! The input is a file containing consecutive strike records, as copied out
//! of a face's sizes array, in the byte order of the host. With `--hex` the
//! file is instead read as text containing the same bytes as hex digits.

use read_strikes::{types::F26Dot6, AvailableSizes, FontData};

mod input;
mod print;

use input::PixelSize;
use print::StrikePrinter;

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(Error::new)?;
    let bytes = input::load(&args.input, args.hex).map_err(Error)?;
    log::debug!("read {} bytes from '{}'", bytes.len(), args.input.display());

    let data = FontData::new(&bytes);
    let sizes = match args.count {
        Some(count) => AvailableSizes::new(data, count),
        None => AvailableSizes::read(data),
    }
    .map_err(Error::new)?;
    log::info!("found {} strikes", sizes.len());

    let stdout = std::io::stdout();
    let mut locked = stdout.lock();
    let mut printer = StrikePrinter::new(&mut locked);
    printer.print_sizes(&sizes).map_err(Error::new)?;

    if let Some(ppem) = args.ppem {
        match sizes.best_match(ppem_request(ppem)?) {
            Some(ix) => {
                let strike = sizes.strike(ix).map_err(Error::new)?;
                printer
                    .print_selection(&format!("best match for {ppem} ppem"), ix, strike)
                    .map_err(Error::new)?;
            }
            None => return Err(Error::new("no strikes to select from")),
        }
    }

    if let Some(PixelSize { width, height }) = args.exact {
        let ix = sizes.match_size(width, height).map_err(Error::new)?;
        let strike = sizes.strike(ix).map_err(Error::new)?;
        printer
            .print_selection(&format!("exact match for {width}x{height}"), ix, strike)
            .map_err(Error::new)?;
    }
    Ok(())
}

/// Convert a `--ppem` argument to a fixed point size.
fn ppem_request(ppem: f64) -> Result<F26Dot6, Error> {
    if !ppem.is_finite() || ppem <= 0.0 {
        return Err(Error(format!("ppem must be a positive number, got {ppem}")));
    }
    Ok(F26Dot6::from_f64(ppem))
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use super::PixelSize;
    use std::path::PathBuf;

    xflags::xflags! {
        /// Print the bitmap strikes in a file of native strike records
        cmd args {
            required input: PathBuf
            /// Read the input as text containing hex digits
            optional --hex
            /// The number of records to read (default: the whole file)
            optional -c, --count count: usize
            /// Report the best matching strike for this vertical ppem
            optional -p, --ppem ppem: f64
            /// Report the strike with exactly this pixel size (WxH)
            optional -e, --exact size: PixelSize
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn parse_args() {
        let args = flags::Args::from_vec(vec![
            "s.bin".into(),
            "--hex".into(),
            "--exact".into(),
            "12x16".into(),
            "--ppem".into(),
            "13".into(),
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("s.bin"));
        assert!(args.hex);
        assert_eq!(args.count, None);
        assert_eq!(args.ppem, Some(13.0));
        assert_eq!(
            args.exact,
            Some(PixelSize {
                width: 12,
                height: 16
            })
        );
    }

    #[test]
    fn parse_args_short_flags() {
        let args = flags::Args::from_vec(vec![
            "s.bin".into(),
            "-c".into(),
            "2".into(),
            "-e".into(),
            "24".into(),
        ])
        .unwrap();
        assert!(!args.hex);
        assert_eq!(args.count, Some(2));
        assert_eq!(args.ppem, None);
        assert_eq!(
            args.exact,
            Some(PixelSize {
                width: 24,
                height: 24
            })
        );
        assert!(flags::Args::from_vec(vec![]).is_err());
        assert!(flags::Args::from_vec(vec!["s.bin".into(), "-e".into(), "12x".into()]).is_err());
    }

    #[test]
    fn ppem_must_be_positive() {
        assert_eq!(ppem_request(13.0).unwrap(), F26Dot6::from_i32(13));
        assert_eq!(ppem_request(12.5).unwrap().to_bits(), 800);
        assert!(ppem_request(f64::NAN).is_err());
        assert!(ppem_request(f64::INFINITY).is_err());
        assert!(ppem_request(0.0).is_err());
        assert!(ppem_request(-4.0).is_err());
    }
}
