//! small utilities used in tests

use crate::FontData;
use types::Scalar;

/// A convenience type for generating a buffer of native-endian bytes.
#[derive(Debug, Clone, Default)]
pub struct NeBuffer {
    data: Vec<u8>,
}

impl NeBuffer {
    pub fn new() -> Self {
        Default::default()
    }

    /// The current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return a reference to the contents of the buffer
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Write any scalar to this buffer.
    pub fn push(mut self, item: impl Scalar) -> Self {
        self.data.extend(item.to_raw().as_ref());
        self
    }

    /// Overwrite the bytes at `offset` with the given scalar.
    pub fn write_at(&mut self, offset: usize, item: impl Scalar) {
        let raw = item.to_raw();
        let new_data: &[u8] = raw.as_ref();
        let data = &mut self.data[offset..];

        if data.len() < new_data.len() {
            panic!("not enough room left in buffer for the requested write.");
        }

        for (left, right) in data.iter_mut().zip(new_data) {
            *left = *right
        }
    }

    pub fn font_data(&self) -> FontData<'_> {
        FontData::new(&self.data)
    }
}
