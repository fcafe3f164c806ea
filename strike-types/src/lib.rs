//! Scalar types used in native bitmap strike records
//!
//! Unlike OpenType table data, these records are laid out by a native
//! rasterizer in host memory, so every multi-byte value is stored in the
//! host's byte order.

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
#[macro_use]
extern crate core as std;

mod fixed;
mod raw;


pub use fixed::F26Dot6;
pub use raw::{FixedSize, NativeEndian, Scalar};
