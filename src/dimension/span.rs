use core::fmt;
use core::ops::{Range, RangeInclusive};

use crate::dimension::{Dimension, DimensionIndex, DimensionSize};

/// A contiguous half-open sub-range along one tagged axis: a start position
/// plus a length.
///
/// Spans convert from ranges, which is usually the most readable way to build
/// them:
///
/// ```
/// use astroarray::{DimensionIndex, DimensionSpan, Time};
///
/// let span = DimensionSpan::<Time>::from(2..6);
/// assert_eq!(span.start(), DimensionIndex::new(2));
/// assert_eq!(span.length(), 4);
///
/// // inclusive end
/// let span = DimensionSpan::<Time>::from(2..=5);
/// assert_eq!(span.length(), 4);
/// ```
pub struct DimensionSpan<D>
{
    start: DimensionIndex<D>,
    length: DimensionSize<D>,
}

copy_and_clone! { [D] DimensionSpan<D> }

impl<D: Dimension> DimensionSpan<D>
{
    /// Create a span of `length` elements starting at `start`.
    #[inline]
    pub fn new(start: DimensionIndex<D>, length: DimensionSize<D>) -> Self
    {
        DimensionSpan { start, length }
    }

    /// The position of the first element in the span.
    #[inline]
    pub fn start(self) -> DimensionIndex<D>
    {
        self.start
    }

    /// The number of elements in the span.
    #[inline]
    pub fn length(self) -> DimensionSize<D>
    {
        self.length
    }

    /// One past the last position in the span.
    #[inline]
    pub fn end(self) -> DimensionIndex<D>
    {
        self.start + self.length
    }

    pub fn is_empty(self) -> bool
    {
        self.length.value() == 0
    }

    /// Iterate over the positions covered by the span, in order.
    pub fn indices(self) -> impl Iterator<Item = DimensionIndex<D>>
    {
        (self.start.value()..self.end().value()).map(DimensionIndex::new)
    }

    /// Clamp the span so it fits within `bound` elements: the start is capped
    /// at `bound` and the length shrunk so `start + length <= bound`. A span
    /// starting at or past the bound becomes a zero-length span at `bound`.
    ///
    /// This silent clamping is the documented range policy for span
    /// narrowing; an out-of-range request yields an empty span, never an
    /// out-of-bounds one.
    #[must_use = "trim returns the adjusted span"]
    pub fn trim(mut self, bound: DimensionSize<D>) -> Self
    {
        if self.start >= bound {
            self.start = DimensionIndex::new(bound.value());
            self.length = DimensionSize::new(0);
            return self;
        }
        let available = bound - self.start;
        if self.length > available {
            self.length = available;
        }
        self
    }
}

/// A span over a whole axis extent: starts at zero.
impl<D: Dimension> From<DimensionSize<D>> for DimensionSpan<D>
{
    fn from(length: DimensionSize<D>) -> Self
    {
        DimensionSpan::new(DimensionIndex::new(0), length)
    }
}

impl<D: Dimension> From<Range<DimensionIndex<D>>> for DimensionSpan<D>
{
    fn from(r: Range<DimensionIndex<D>>) -> Self
    {
        DimensionSpan::new(r.start, r.end - r.start)
    }
}

impl<D: Dimension> From<RangeInclusive<DimensionIndex<D>>> for DimensionSpan<D>
{
    fn from(r: RangeInclusive<DimensionIndex<D>>) -> Self
    {
        let (start, end) = r.into_inner();
        DimensionSpan::new(start, end - start + 1)
    }
}

impl<D: Dimension> From<Range<usize>> for DimensionSpan<D>
{
    fn from(r: Range<usize>) -> Self
    {
        DimensionSpan::new(DimensionIndex::new(r.start), DimensionSize::new(r.end - r.start))
    }
}

impl<D: Dimension> From<RangeInclusive<usize>> for DimensionSpan<D>
{
    fn from(r: RangeInclusive<usize>) -> Self
    {
        let (start, end) = r.into_inner();
        DimensionSpan::new(DimensionIndex::new(start), DimensionSize::new(end - start + 1))
    }
}

impl<D> PartialEq for DimensionSpan<D>
{
    fn eq(&self, rhs: &Self) -> bool
    {
        self.start == rhs.start && self.length == rhs.length
    }
}

impl<D> Eq for DimensionSpan<D> {}

impl<D: Dimension> fmt::Debug for DimensionSpan<D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "DimensionSpan<{}>({}..{})", D::LABEL, self.start, self.end())
    }
}
