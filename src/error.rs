use core::fmt;

/// An error related to array shape or bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShapeError
{
    repr: ErrorKind,
}

impl ShapeError
{
    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }

    /// Create a new `ShapeError`
    pub fn from_kind(kind: ErrorKind) -> Self
    {
        ShapeError { repr: kind }
    }
}

/// Error code for an error related to array shape or bounds.
///
/// This enumeration is not exhaustive. The representation of the enum
/// is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind
{
    /// element count does not match the product of the axis sizes
    IncompatibleShape,
    /// index or span outside the axis's current extent
    OutOfBounds,
}

impl fmt::Display for ShapeError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::IncompatibleShape => "incompatible shapes",
            ErrorKind::OutOfBounds => "index or span out of bounds",
        };
        f.write_str(description)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShapeError {}
