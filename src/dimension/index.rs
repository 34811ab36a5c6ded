use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub};

use crate::dimension::{Dimension, DimensionSize};

/// A position along one tagged axis.
///
/// Indexes and sizes on the same axis combine the obvious way:
/// `index + size -> index`, `index - index -> size`. An index must be smaller
/// than the axis's current size when used to address an element; direct
/// element access checks this.
pub struct DimensionIndex<D>
{
    index: usize,
    dim: PhantomData<D>,
}

copy_and_clone! { [D] DimensionIndex<D> }

impl<D: Dimension> DimensionIndex<D>
{
    /// Create an index at position `index` along axis `D`.
    #[inline]
    pub const fn new(index: usize) -> Self
    {
        DimensionIndex {
            index,
            dim: PhantomData,
        }
    }

    /// The untagged position.
    #[inline]
    pub const fn value(self) -> usize
    {
        self.index
    }
}

impl<D: Dimension> Default for DimensionIndex<D>
{
    fn default() -> Self
    {
        DimensionIndex::new(0)
    }
}

impl<D: Dimension> From<usize> for DimensionIndex<D>
{
    #[inline]
    fn from(index: usize) -> Self
    {
        DimensionIndex::new(index)
    }
}

impl<D: Dimension> From<DimensionIndex<D>> for usize
{
    #[inline]
    fn from(index: DimensionIndex<D>) -> usize
    {
        index.index
    }
}

impl<D> PartialEq for DimensionIndex<D>
{
    fn eq(&self, rhs: &Self) -> bool
    {
        self.index == rhs.index
    }
}

impl<D> Eq for DimensionIndex<D> {}

impl<D> PartialOrd for DimensionIndex<D>
{
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering>
    {
        Some(self.cmp(rhs))
    }
}

impl<D> Ord for DimensionIndex<D>
{
    fn cmp(&self, rhs: &Self) -> Ordering
    {
        self.index.cmp(&rhs.index)
    }
}

impl<D> PartialEq<usize> for DimensionIndex<D>
{
    fn eq(&self, rhs: &usize) -> bool
    {
        self.index == *rhs
    }
}

impl<D> PartialOrd<usize> for DimensionIndex<D>
{
    fn partial_cmp(&self, rhs: &usize) -> Option<Ordering>
    {
        self.index.partial_cmp(rhs)
    }
}

/// `index < size` comparisons against the axis extent.
impl<D: Dimension> PartialEq<DimensionSize<D>> for DimensionIndex<D>
{
    fn eq(&self, rhs: &DimensionSize<D>) -> bool
    {
        self.index == rhs.value()
    }
}

impl<D: Dimension> PartialOrd<DimensionSize<D>> for DimensionIndex<D>
{
    fn partial_cmp(&self, rhs: &DimensionSize<D>) -> Option<Ordering>
    {
        self.index.partial_cmp(&rhs.value())
    }
}

impl<D: Dimension> Add<DimensionSize<D>> for DimensionIndex<D>
{
    type Output = Self;

    fn add(self, rhs: DimensionSize<D>) -> Self
    {
        DimensionIndex::new(self.index + rhs.value())
    }
}

impl<D: Dimension> AddAssign<DimensionSize<D>> for DimensionIndex<D>
{
    fn add_assign(&mut self, rhs: DimensionSize<D>)
    {
        self.index += rhs.value();
    }
}

/// The distance between two positions on the same axis is a size.
impl<D: Dimension> Sub for DimensionIndex<D>
{
    type Output = DimensionSize<D>;

    fn sub(self, rhs: Self) -> DimensionSize<D>
    {
        DimensionSize::new(self.index - rhs.index)
    }
}

impl<D: Dimension> fmt::Debug for DimensionIndex<D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "DimensionIndex<{}>({})", D::LABEL, self.index)
    }
}

impl<D: Dimension> fmt::Display for DimensionIndex<D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        fmt::Display::fmt(&self.index, f)
    }
}
