//! Reading bitmap strike metrics
//!
//! A native font rasterizer describes each bitmap strike of a face (a set of
//! glyph bitmaps for one size and resolution) with a small fixed-layout
//! record, and exposes the strikes of a face as an array of those records.
//! This crate reads those records in place, without copying, from either a
//! bounds-checked byte slice or (with `unsafe`) a native address.
//!
//! Records are stored in host byte order, and fractional values use the
//! 26.6 fixed-point encoding provided by [`types::F26Dot6`].
//!
//! # Example
//!
//! ```
//! use read_strikes::{AvailableSizes, BitmapSize, FontData, types::F26Dot6};
//!
//! let strikes = [
//!     BitmapSize::new(13, 6, F26Dot6::from_i32(9), F26Dot6::from_i32(12), F26Dot6::from_i32(12)),
//!     BitmapSize::new(17, 8, F26Dot6::from_i32(12), F26Dot6::from_i32(16), F26Dot6::from_i32(16)),
//! ];
//! let bytes: Vec<u8> = strikes.iter().flat_map(|s| s.as_bytes().to_vec()).collect();
//!
//! let sizes = AvailableSizes::new(FontData::new(&bytes), 2).unwrap();
//! let index = sizes.best_match(F26Dot6::from_i32(14)).unwrap();
//! assert_eq!(sizes.strike(index).unwrap().height(), 17);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod available_sizes;
mod bitmap_size;
mod font_data;
mod read;

#[cfg(test)]
mod test_helpers;

/// Public re-export of the strike-types crate.
pub extern crate strike_types as types;

pub use available_sizes::AvailableSizes;
pub use bitmap_size::BitmapSize;
pub use font_data::FontData;
pub use read::ReadError;
