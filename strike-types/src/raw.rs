//! types for working with raw native-endian bytes

/// A trait for scalars stored in native records.
///
/// This is an internal trait for encoding and decoding bytes in the byte
/// order of the host, which is the byte order the native library was
/// compiled for.
///
/// You do not need to implement this trait directly; it is an implemention
/// detail of the [`NativeEndian`] wrapper.
pub trait Scalar: Sized {
    /// The raw byte representation of this type.
    type Raw: sealed::NeByteArray;

    /// Create an instance of this type from raw native-endian bytes
    fn from_raw(raw: Self::Raw) -> Self;

    /// Encode this type as raw native-endian bytes
    fn to_raw(self) -> Self::Raw;

    /// Attempt to read a scalar from a slice.
    ///
    /// This will always succeed if `slice.len() == Self::RAW_BYTE_LEN`, and will
    /// always return `None` otherwise.
    fn read(slice: &[u8]) -> Option<Self> {
        sealed::NeByteArray::from_slice(slice).map(Self::from_raw)
    }
}

/// A trait for types that have a known, constant size.
pub trait FixedSize: Sized {
    /// The raw size of this type, in bytes.
    ///
    /// This is the size required to represent this type in a native record,
    /// which may differ from the size of the native type.
    const RAW_BYTE_LEN: usize;
}

/// A wrapper around raw native-endian bytes for some type.
///
/// Because the wrapper is only ever a byte array it has an alignment of one,
/// which means records built from these fields can be read from any
/// position in a buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct NativeEndian<T: Scalar>(pub(crate) T::Raw);

// # SAFETY:
//
// `NativeEndian<T>` has the bound `T: Scalar`, and contains only a single value,
// `<T as Scalar>::Raw` which is only ever a byte array.
#[cfg(feature = "bytemuck")]
unsafe impl<T> bytemuck::Zeroable for NativeEndian<T> where T: Scalar + Copy {}
#[cfg(feature = "bytemuck")]
unsafe impl<T> bytemuck::Pod for NativeEndian<T> where T: Scalar + Copy + 'static {}

impl<T: Scalar> NativeEndian<T> {
    /// construct a new `NativeEndian<T>` from raw bytes
    pub const fn new(raw: T::Raw) -> NativeEndian<T> {
        NativeEndian(raw)
    }

    /// Attempt to construct a new raw value from this slice.
    ///
    /// This will fail if `slice.len() != T::RAW_BYTE_LEN`.
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        sealed::NeByteArray::from_slice(slice).map(Self)
    }

    /// Convert this raw type to its native representation.
    #[inline(always)]
    pub fn get(&self) -> T {
        T::from_raw(self.0)
    }

    /// Set the value, overwriting the bytes.
    pub fn set(&mut self, value: T) {
        self.0 = value.to_raw();
    }

    /// Get the raw native-endian bytes.
    pub fn ne_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl<T: Scalar> From<T> for NativeEndian<T> {
    #[inline]
    fn from(val: T) -> Self {
        NativeEndian(val.to_raw())
    }
}

impl<T: Scalar + Default> Default for NativeEndian<T> {
    fn default() -> Self {
        Self::from(T::default())
    }
}

// NOTE: do to the orphan rules, we cannot impl the inverse of this, e.g.
// impl<T> PartialEq<NativeEndian<T>> for T (<https://doc.rust-lang.org/error_codes/E0210.html>)
impl<T: Scalar + Copy + PartialEq> PartialEq<T> for NativeEndian<T> {
    fn eq(&self, other: &T) -> bool {
        self.get() == *other
    }
}

impl<T: Scalar> FixedSize for NativeEndian<T> {
    const RAW_BYTE_LEN: usize = std::mem::size_of::<T::Raw>();
}

impl<T: std::fmt::Debug + Scalar + Copy> std::fmt::Debug for NativeEndian<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.get().fmt(f)
    }
}

impl<T: std::fmt::Display + Scalar + Copy> std::fmt::Display for NativeEndian<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.get().fmt(f)
    }
}

macro_rules! int_scalar {
    ($ty:ty, $raw:ty) => {
        impl crate::raw::Scalar for $ty {
            type Raw = $raw;
            fn to_raw(self) -> $raw {
                self.to_ne_bytes()
            }

            #[inline(always)]
            fn from_raw(raw: $raw) -> $ty {
                Self::from_ne_bytes(raw)
            }
        }

        impl crate::raw::FixedSize for $ty {
            const RAW_BYTE_LEN: usize = std::mem::size_of::<$raw>();
        }
    };
}

int_scalar!(u8, [u8; 1]);
int_scalar!(i8, [u8; 1]);
int_scalar!(u16, [u8; 2]);
int_scalar!(i16, [u8; 2]);
int_scalar!(u32, [u8; 4]);
int_scalar!(i32, [u8; 4]);
int_scalar!(i64, [u8; 8]);

pub(crate) mod sealed {
    /// A trait representing any fixed-size native-endian byte array.
    ///
    /// This is only used in `Scalar`, as a way of expressing the condition that the
    /// `Raw` type is always a fixed-size byte array.
    #[cfg(not(feature = "bytemuck"))]
    pub trait NeByteArray: Copy + AsRef<[u8]> {
        /// Must always succeed for `[u8; N]` if `slice.len() == N`, must fail otherwise
        fn from_slice(slice: &[u8]) -> Option<Self>;
    }

    #[cfg(feature = "bytemuck")]
    pub trait NeByteArray: Copy + AsRef<[u8]> + bytemuck::Pod {
        /// Must always succeed for `[u8; N]` if `slice.len() == N`, must fail otherwise
        fn from_slice(slice: &[u8]) -> Option<Self>;
    }

    impl<const N: usize> NeByteArray for [u8; N] {
        fn from_slice(slice: &[u8]) -> Option<Self> {
            slice.try_into().ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_host_order() {
        let raw = 0x0c40_i32.to_ne_bytes();
        assert_eq!(i32::read(&raw), Some(3136));
        assert_eq!(NativeEndian::<i32>::new(raw).get(), 3136);
    }

    #[test]
    fn read_wrong_len() {
        assert!(i16::read(&[1]).is_none());
        assert!(i16::read(&[1, 2, 3]).is_none());
        assert!(NativeEndian::<i32>::from_slice(&[0, 0]).is_none());
    }

    #[test]
    fn set_overwrites_bytes() {
        let mut val = NativeEndian::<i16>::from(16);
        val.set(-1);
        assert_eq!(val.ne_bytes(), &[0xff, 0xff]);
        assert_eq!(val, -1);
    }

    #[test]
    fn raw_byte_len() {
        assert_eq!(NativeEndian::<i16>::RAW_BYTE_LEN, 2);
        assert_eq!(NativeEndian::<i32>::RAW_BYTE_LEN, 4);
        assert_eq!(std::mem::align_of::<NativeEndian<i32>>(), 1);
    }
}
