//! The bitmap strike metrics record.

use std::ptr::NonNull;

use types::{F26Dot6, FixedSize, NativeEndian};

use crate::{FontData, ReadError};

/// Metrics of a bitmap strike (a set of glyphs for a given point size and
/// resolution) in a bitmap font.
///
/// This is the element type of a face's available sizes array. It is laid
/// out exactly as the native library lays it out, in host byte order, and is
/// read in place: every accessor decodes its field from the underlying bytes
/// on each call.
///
/// Windows FNT: the nominal size given in a FNT font is not reliable. When
/// the driver finds it incorrect, it sets `size` to some calculated value and
/// sets `x_ppem` and `y_ppem` to the pixel width and height given in the font.
///
/// TrueType embedded bitmaps: `size`, `width` and `height` are not contained
/// in the bitmap strike itself. They are computed from the global font
/// parameters.
#[derive(Clone, Copy, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C, packed)]
pub struct BitmapSize {
    /// The vertical distance, in pixels, between two consecutive baselines.
    pub height: NativeEndian<i16>,
    /// The average width, in pixels, of all glyphs in the strike.
    pub width: NativeEndian<i16>,
    /// The nominal size of the strike in 26.6 fractional points.
    pub size: NativeEndian<F26Dot6>,
    /// The horizontal ppem (nominal width) in 26.6 fractional pixels.
    pub x_ppem: NativeEndian<F26Dot6>,
    /// The vertical ppem (nominal height) in 26.6 fractional pixels.
    pub y_ppem: NativeEndian<F26Dot6>,
}

const _: () = assert!(std::mem::size_of::<BitmapSize>() == 16);

impl BitmapSize {
    /// Creates a new record from decoded field values.
    pub fn new(
        height: i16,
        width: i16,
        size: F26Dot6,
        x_ppem: F26Dot6,
        y_ppem: F26Dot6,
    ) -> Self {
        Self {
            height: height.into(),
            width: width.into(),
            size: size.into(),
            x_ppem: x_ppem.into(),
            y_ppem: y_ppem.into(),
        }
    }

    /// Interprets the start of `data` as a strike record.
    ///
    /// This is the only point where the length of the data is checked; any
    /// bytes past the end of the record are ignored.
    pub fn read<'a>(data: FontData<'a>) -> Result<&'a BitmapSize, ReadError> {
        data.read_ref_at(0)
    }

    /// Interprets the memory at `ptr` as a strike record.
    ///
    /// # Safety
    ///
    /// `ptr` must point to at least 16 readable bytes that stay valid, and
    /// are not written to, for the whole lifetime `'a`. For a record owned by
    /// a native face this means the face must outlive the returned reference
    /// and must not reallocate its sizes array.
    pub unsafe fn from_ptr<'a>(ptr: NonNull<u8>) -> &'a BitmapSize {
        // SAFETY: the type has an alignment of one and every bit pattern is
        // valid, so any readable address of the right length is acceptable.
        unsafe { ptr.cast::<BitmapSize>().as_ref() }
    }

    /// The vertical distance, in pixels, between two consecutive baselines.
    ///
    /// This is always positive for well-formed data, but the value is
    /// returned as stored.
    pub fn height(&self) -> i16 {
        self.height.get()
    }

    /// The average width, in pixels, of all glyphs in the strike.
    pub fn width(&self) -> i16 {
        self.width.get()
    }

    /// The nominal size of the strike in 26.6 fractional points.
    ///
    /// This field is not very useful.
    pub fn size(&self) -> F26Dot6 {
        self.size.get()
    }

    /// The horizontal ppem (nominal width) in 26.6 fractional pixels.
    pub fn x_ppem(&self) -> F26Dot6 {
        self.x_ppem.get()
    }

    /// The vertical ppem (nominal height) in 26.6 fractional pixels.
    pub fn y_ppem(&self) -> F26Dot6 {
        self.y_ppem.get()
    }

    /// The raw bits of [`size`](Self::size).
    pub fn size_raw(&self) -> i32 {
        self.size().to_bits()
    }

    /// The raw bits of [`x_ppem`](Self::x_ppem).
    pub fn x_ppem_raw(&self) -> i32 {
        self.x_ppem().to_bits()
    }

    /// The raw bits of [`y_ppem`](Self::y_ppem).
    pub fn y_ppem_raw(&self) -> i32 {
        self.y_ppem().to_bits()
    }

    /// The bytes of this record, as they are laid out in native memory.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Note: this requires `BitmapSize` to be `repr(packed)`.
impl FixedSize for BitmapSize {
    const RAW_BYTE_LEN: usize = std::mem::size_of::<Self>();
}

impl std::fmt::Debug for BitmapSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitmapSize")
            .field("height", &self.height())
            .field("width", &self.width())
            .field("size", &self.size())
            .field("x_ppem", &self.x_ppem())
            .field("y_ppem", &self.y_ppem())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;
    use crate::test_helpers::NeBuffer;

    fn sample() -> NeBuffer {
        NeBuffer::new()
            .push(16i16)
            .push(8i16)
            .push(4096i32)
            .push(3136i32)
            .push(3136i32)
    }

    #[test]
    fn layout() {
        assert_eq!(BitmapSize::RAW_BYTE_LEN, 16);
        assert_eq!(std::mem::align_of::<BitmapSize>(), 1);
        assert_eq!(offset_of!(BitmapSize, height), 0);
        assert_eq!(offset_of!(BitmapSize, width), 2);
        assert_eq!(offset_of!(BitmapSize, size), 4);
        assert_eq!(offset_of!(BitmapSize, x_ppem), 8);
        assert_eq!(offset_of!(BitmapSize, y_ppem), 12);
    }

    #[test]
    fn read_fields() {
        let buf = sample();
        let strike = BitmapSize::read(buf.font_data()).unwrap();
        assert_eq!(strike.height(), 16);
        assert_eq!(strike.width(), 8);
        assert_eq!(strike.size(), F26Dot6::from_i32(64));
        assert_eq!(strike.size_raw(), 4096);
        assert_eq!(strike.x_ppem_raw(), 3136);
        assert_eq!(strike.y_ppem_raw(), 3136);
        assert_eq!(strike.y_ppem().to_f64(), 49.0);
    }

    #[test]
    #[cfg(target_endian = "little")]
    fn little_endian_bytes() {
        #[rustfmt::skip]
        let bytes = [
            0x10, 0x00,             // height 16
            0x08, 0x00,             // width 8
            0x00, 0x10, 0x00, 0x00, // size 4096 (64pt)
            0x40, 0x0C, 0x00, 0x00, // x_ppem 3136 (49px)
            0x40, 0x0C, 0x00, 0x00, // y_ppem 3136 (49px)
        ];
        let strike = BitmapSize::read(FontData::new(&bytes)).unwrap();
        assert_eq!(strike.height(), 16);
        assert_eq!(strike.width(), 8);
        assert_eq!(strike.size_raw(), 4096);
        assert_eq!(strike.x_ppem_raw(), 3136);
        assert_eq!(strike.y_ppem_raw(), 3136);
        assert_eq!(strike.as_bytes(), &bytes);
    }

    #[test]
    fn negative_height_is_not_corrected() {
        let mut buf = sample();
        buf.write_at(0, -1i16);
        assert_eq!(&buf.as_slice()[..2], &[0xff, 0xff]);
        let strike = BitmapSize::read(buf.font_data()).unwrap();
        assert_eq!(strike.height(), -1);
    }

    #[test]
    fn sentinel_changes_one_field() {
        let original = sample();
        let fields = [0usize, 2, 4, 8, 12];
        for offset in fields {
            let mut buf = original.clone();
            if offset < 4 {
                buf.write_at(offset, 0x5a5ai16);
            } else {
                buf.write_at(offset, 0x5a5a_5a5ai32);
            }
            let before = BitmapSize::read(original.font_data()).unwrap();
            let after = BitmapSize::read(buf.font_data()).unwrap();
            let changed = [
                before.height() != after.height(),
                before.width() != after.width(),
                before.size() != after.size(),
                before.x_ppem() != after.x_ppem(),
                before.y_ppem() != after.y_ppem(),
            ];
            let expected: Vec<_> = fields.iter().map(|f| *f == offset).collect();
            assert_eq!(changed.to_vec(), expected, "sentinel at offset {offset}");
        }
    }

    #[test]
    fn rereading_is_stable() {
        let buf = sample();
        let strike = BitmapSize::read(buf.font_data()).unwrap();
        let first = (strike.height(), strike.width(), strike.size(), strike.y_ppem());
        for _ in 0..4 {
            assert_eq!(
                (strike.height(), strike.width(), strike.size(), strike.y_ppem()),
                first
            );
        }
    }

    #[test]
    fn independent_views() {
        let a = sample();
        let b = NeBuffer::new()
            .push(12i16)
            .push(6i16)
            .push(640i32)
            .push(768i32)
            .push(832i32);
        let strike_a = BitmapSize::read(a.font_data()).unwrap();
        let strike_b = BitmapSize::read(b.font_data()).unwrap();
        assert_eq!(strike_a.height(), 16);
        assert_eq!(strike_b.height(), 12);
        assert_eq!(strike_a.x_ppem_raw(), 3136);
        assert_eq!(strike_b.x_ppem_raw(), 768);
        assert_eq!(strike_b.y_ppem_raw(), 832);
        assert_eq!(strike_a.y_ppem_raw(), 3136);
    }

    #[test]
    fn short_data() {
        let buf = sample();
        let short = buf.font_data().slice(..15).unwrap();
        assert_eq!(BitmapSize::read(short), Err(ReadError::OutOfBounds));
    }

    #[test]
    fn new_matches_encoded() {
        let buf = sample();
        let strike = BitmapSize::new(
            16,
            8,
            F26Dot6::from_i32(64),
            F26Dot6::from_i32(49),
            F26Dot6::from_i32(49),
        );
        assert_eq!(strike.as_bytes(), buf.as_slice());
        assert_eq!(BitmapSize::read(buf.font_data()), Ok(&strike));
    }

    #[test]
    fn from_ptr() {
        let buf = sample();
        let ptr = NonNull::from(buf.as_slice()).cast::<u8>();
        // SAFETY: the buffer holds a full record and outlives the reference
        let strike = unsafe { BitmapSize::from_ptr(ptr) };
        assert_eq!(strike.height(), 16);
        assert_eq!(strike.y_ppem(), F26Dot6::from_i32(49));
    }

    #[test]
    fn debug() {
        let strike = BitmapSize::new(
            16,
            8,
            F26Dot6::from_i32(64),
            F26Dot6::from_f64(10.5),
            F26Dot6::from_i32(49),
        );
        assert_eq!(
            format!("{strike:?}"),
            "BitmapSize { height: 16, width: 8, size: 64.0, x_ppem: 10.5, y_ppem: 49.0 }"
        );
    }
}
