//! The set of strikes available in a bitmap face.

use types::{F26Dot6, FixedSize};

use crate::{BitmapSize, FontData, ReadError};

/// The strikes available in a face: an array of [`BitmapSize`] records.
///
/// This borrows the array from its owner; the records are read in place and
/// are never copied.
#[derive(Clone, Copy, Debug, Default)]
pub struct AvailableSizes<'a> {
    sizes: &'a [BitmapSize],
}

impl<'a> AvailableSizes<'a> {
    /// Reads `num_fixed_sizes` consecutive records from the start of `data`.
    pub fn new(data: FontData<'a>, num_fixed_sizes: usize) -> Result<Self, ReadError> {
        let byte_len = num_fixed_sizes
            .checked_mul(BitmapSize::RAW_BYTE_LEN)
            .ok_or(ReadError::OutOfBounds)?;
        let sizes = data.read_array(..byte_len)?;
        if data.len() > byte_len {
            log::warn!(
                "ignoring {} trailing bytes after {num_fixed_sizes} strikes",
                data.len() - byte_len
            );
        }
        Ok(Self { sizes })
    }

    /// Reads as many whole records as fit in `data`.
    ///
    /// Returns an error if the length of the data is not a multiple of the
    /// record size.
    pub fn read(data: FontData<'a>) -> Result<Self, ReadError> {
        data.read_array(..).map(|sizes| Self { sizes })
    }

    /// Creates a new set of strikes from records that are already in memory.
    pub fn from_slice(sizes: &'a [BitmapSize]) -> Self {
        Self { sizes }
    }

    /// Creates a new set of strikes from a native face's sizes array.
    ///
    /// A null `ptr` is accepted if, and only if, `num_fixed_sizes` is zero;
    /// this is how faces without any strikes report their sizes.
    ///
    /// # Safety
    ///
    /// If `ptr` is not null, it must point to `num_fixed_sizes` consecutive
    /// records that stay valid, and are not written to, for the whole
    /// lifetime `'a`. The owning face must not be destroyed, and must not
    /// reallocate the array, while the result is in use.
    pub unsafe fn from_raw_parts(
        ptr: *const BitmapSize,
        num_fixed_sizes: usize,
    ) -> Result<Self, ReadError> {
        if num_fixed_sizes == 0 {
            return Ok(Self::default());
        }
        if ptr.is_null() {
            return Err(ReadError::NullPointer);
        }
        // SAFETY: non-null, alignment of one, and the length is upheld by
        // the caller
        let sizes = unsafe { std::slice::from_raw_parts(ptr, num_fixed_sizes) };
        Ok(Self { sizes })
    }

    /// Returns the number of available strikes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns true if there are no available strikes.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Returns the strike at the given index.
    pub fn get(&self, index: usize) -> Option<&'a BitmapSize> {
        self.sizes.get(index)
    }

    /// Returns the strike at the given index, or an error if there is none.
    pub fn strike(&self, index: usize) -> Result<&'a BitmapSize, ReadError> {
        self.get(index).ok_or(ReadError::InvalidStrikeIndex(index))
    }

    /// Returns an iterator over all available strikes.
    pub fn iter(&self) -> impl Iterator<Item = &'a BitmapSize> + 'a + Clone {
        self.sizes.iter()
    }

    /// Returns the underlying records.
    pub fn as_slice(&self) -> &'a [BitmapSize] {
        self.sizes
    }

    /// Returns the index of the first strike with the given nominal pixel
    /// size.
    ///
    /// A strike matches when its vertical ppem, rounded to whole pixels,
    /// equals `height` and its horizontal ppem, rounded the same way, equals
    /// `width`. If one of the two dimensions is zero the other is used for
    /// both.
    pub fn match_size(&self, width: u32, height: u32) -> Result<usize, ReadError> {
        let (w, h) = match (width, height) {
            (0, 0) => return Err(ReadError::NoMatchingStrike { width, height }),
            (0, h) => (h, h),
            (w, 0) => (w, w),
            (w, h) => (w, h),
        };
        let found = self.sizes.iter().position(|strike| {
            i64::from(strike.y_ppem().to_i32()) == i64::from(h)
                && i64::from(strike.x_ppem().to_i32()) == i64::from(w)
        });
        match found {
            Some(index) => Ok(index),
            None => {
                log::debug!("no strike of {w}x{h} pixels among {} strikes", self.len());
                Err(ReadError::NoMatchingStrike { width, height })
            }
        }
    }

    /// Returns the index of the best matching strike for the given vertical
    /// ppem.
    ///
    /// In this case, "best" means a strike of the exact size, nearest larger
    /// size, or nearest smaller size, in that order.
    pub fn best_match(&self, ppem: F26Dot6) -> Option<usize> {
        let (index, best) = self.sizes.iter().enumerate().fold(
            None,
            |best: Option<(usize, F26Dot6)>, (index, entry)| {
                let entry_size = entry.y_ppem();
                match best {
                    Some((_, best_size))
                        if (entry_size >= ppem && entry_size < best_size)
                            || (best_size < ppem && entry_size > best_size) =>
                    {
                        Some((index, entry_size))
                    }
                    Some(best) => Some(best),
                    None => Some((index, entry_size)),
                }
            },
        )?;
        if best != ppem {
            log::debug!("no strike at {ppem} ppem, falling back to {best}");
        }
        Some(index)
    }
}

impl<'a> IntoIterator for AvailableSizes<'a> {
    type Item = &'a BitmapSize;
    type IntoIter = std::slice::Iter<'a, BitmapSize>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.iter()
    }
}
