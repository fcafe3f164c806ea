//! loading and parsing command line inputs

use std::{path::Path, str::FromStr};

/// A pixel size, written `WIDTHxHEIGHT` or just `SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for PixelSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| format!("invalid pixel size '{}': {e}", s.escape_default()))
        };
        match s.split_once(['x', 'X']) {
            Some((width, height)) => Ok(PixelSize {
                width: parse(width)?,
                height: parse(height)?,
            }),
            None => {
                let size = parse(s)?;
                Ok(PixelSize {
                    width: size,
                    height: size,
                })
            }
        }
    }
}

/// Read the raw record bytes from `path`.
///
/// If `hex` is set, the file is text containing pairs of hex digits;
/// whitespace, commas and `0x` prefixes are ignored.
pub fn load(path: &Path, hex: bool) -> Result<Vec<u8>, String> {
    if !hex {
        return std::fs::read(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display()));
    }
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {e}", path.display()))?;
    decode_hex(&text)
}

pub fn decode_hex(text: &str) -> Result<Vec<u8>, String> {
    let digits = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .map(|word| {
            word.strip_prefix("0x")
                .or_else(|| word.strip_prefix("0X"))
                .unwrap_or(word)
        })
        .collect::<String>();
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()));
    }
    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex byte '{pair}': {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_sizes() {
        assert_eq!(
            "12x16".parse::<PixelSize>(),
            Ok(PixelSize {
                width: 12,
                height: 16
            })
        );
        assert_eq!(
            "24".parse::<PixelSize>(),
            Ok(PixelSize {
                width: 24,
                height: 24
            })
        );
        assert!("12x".parse::<PixelSize>().is_err());
        assert!("-3".parse::<PixelSize>().is_err());
    }

    #[test]
    fn hex() {
        assert_eq!(
            decode_hex("10 00 08 00\n0x00,0x10").unwrap(),
            [0x10, 0x00, 0x08, 0x00, 0x00, 0x10]
        );
        assert_eq!(decode_hex("400c0000").unwrap(), [0x40, 0x0c, 0x00, 0x00]);
        assert!(decode_hex("abc").is_err());
        assert!(decode_hex("zz").is_err());
    }
}
