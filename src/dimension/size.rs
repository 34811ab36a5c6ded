use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use crate::dimension::{Dimension, DimensionIndex};

/// A count of elements along one tagged axis.
///
/// Behaves like a `usize` in arithmetic and ordering, but two sizes with
/// different tags are distinct types: a frequency count is rejected where a
/// time count is required, at compile time.
///
/// The product of two sizes with *different* tags is a plain `usize` — an
/// element count with no single-axis meaning.
///
/// ```
/// use astroarray::{DimensionSize, Time, Frequency};
///
/// let samples = DimensionSize::<Time>::new(10);
/// let channels = DimensionSize::<Frequency>::new(512);
/// let elements: usize = samples * channels;
/// assert_eq!(elements, 5120);
/// ```
pub struct DimensionSize<D>
{
    size: usize,
    dim: PhantomData<D>,
}

copy_and_clone! { [D] DimensionSize<D> }

impl<D: Dimension> DimensionSize<D>
{
    /// Create a size of `size` elements along axis `D`.
    #[inline]
    pub const fn new(size: usize) -> Self
    {
        DimensionSize {
            size,
            dim: PhantomData,
        }
    }

    /// The untagged count.
    #[inline]
    pub const fn value(self) -> usize
    {
        self.size
    }

    /// Iterate over all in-bounds indexes along this axis, in order.
    pub fn indices(self) -> impl Iterator<Item = DimensionIndex<D>>
    {
        (0..self.size).map(DimensionIndex::new)
    }
}

impl<D: Dimension> Default for DimensionSize<D>
{
    fn default() -> Self
    {
        DimensionSize::new(0)
    }
}

impl<D: Dimension> From<usize> for DimensionSize<D>
{
    #[inline]
    fn from(size: usize) -> Self
    {
        DimensionSize::new(size)
    }
}

impl<D: Dimension> From<DimensionSize<D>> for usize
{
    #[inline]
    fn from(size: DimensionSize<D>) -> usize
    {
        size.size
    }
}

impl<D> PartialEq for DimensionSize<D>
{
    fn eq(&self, rhs: &Self) -> bool
    {
        self.size == rhs.size
    }
}

impl<D> Eq for DimensionSize<D> {}

impl<D> PartialOrd for DimensionSize<D>
{
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering>
    {
        Some(self.cmp(rhs))
    }
}

impl<D> Ord for DimensionSize<D>
{
    fn cmp(&self, rhs: &Self) -> Ordering
    {
        self.size.cmp(&rhs.size)
    }
}

impl<D> PartialEq<usize> for DimensionSize<D>
{
    fn eq(&self, rhs: &usize) -> bool
    {
        self.size == *rhs
    }
}

impl<D> PartialOrd<usize> for DimensionSize<D>
{
    fn partial_cmp(&self, rhs: &usize) -> Option<Ordering>
    {
        self.size.partial_cmp(rhs)
    }
}

impl<D: Dimension> Add for DimensionSize<D>
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self
    {
        DimensionSize::new(self.size + rhs.size)
    }
}

impl<D: Dimension> Add<usize> for DimensionSize<D>
{
    type Output = Self;

    fn add(self, rhs: usize) -> Self
    {
        DimensionSize::new(self.size + rhs)
    }
}

impl<D: Dimension> AddAssign for DimensionSize<D>
{
    fn add_assign(&mut self, rhs: Self)
    {
        self.size += rhs.size;
    }
}

impl<D: Dimension> AddAssign<usize> for DimensionSize<D>
{
    fn add_assign(&mut self, rhs: usize)
    {
        self.size += rhs;
    }
}

impl<D: Dimension> Sub for DimensionSize<D>
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self
    {
        DimensionSize::new(self.size - rhs.size)
    }
}

impl<D: Dimension> Sub<usize> for DimensionSize<D>
{
    type Output = Self;

    fn sub(self, rhs: usize) -> Self
    {
        DimensionSize::new(self.size - rhs)
    }
}

/// `bound - start`: the number of elements between an index and a size on the
/// same axis.
impl<D: Dimension> Sub<DimensionIndex<D>> for DimensionSize<D>
{
    type Output = Self;

    fn sub(self, rhs: DimensionIndex<D>) -> Self
    {
        DimensionSize::new(self.size - rhs.value())
    }
}

impl<D: Dimension> SubAssign for DimensionSize<D>
{
    fn sub_assign(&mut self, rhs: Self)
    {
        self.size -= rhs.size;
    }
}

/// Cross-axis (or same-axis) product: a plain element count.
impl<D: Dimension, E: Dimension> Mul<DimensionSize<E>> for DimensionSize<D>
{
    type Output = usize;

    fn mul(self, rhs: DimensionSize<E>) -> usize
    {
        self.size * rhs.value()
    }
}

impl<D: Dimension> Mul<usize> for DimensionSize<D>
{
    type Output = Self;

    fn mul(self, rhs: usize) -> Self
    {
        DimensionSize::new(self.size * rhs)
    }
}

impl<D: Dimension> Div<usize> for DimensionSize<D>
{
    type Output = Self;

    fn div(self, rhs: usize) -> Self
    {
        DimensionSize::new(self.size / rhs)
    }
}

impl<D: Dimension> fmt::Debug for DimensionSize<D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "DimensionSize<{}>({})", D::LABEL, self.size)
    }
}

impl<D: Dimension> fmt::Display for DimensionSize<D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(&self.size, f)
    }
}
