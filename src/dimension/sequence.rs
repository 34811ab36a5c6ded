//! Type-level sequences of axis tags.
//!
//! An axis list is a nested tuple, outermost axis first: `(Time, (Frequency,
//! ()))`, usually written with the [`dims!`](crate::dims) macro. The list
//! drives every rank-generic operation in the crate: size bookkeeping,
//! bottom-up stride composition, per-tag lookup, rank reduction and the
//! element-order traversal arithmetic. All of it resolves at compile time;
//! the only runtime state per axis is a span and a stride.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use crate::dimension::{Dimension, DimensionIndex, DimensionSize, DimensionSpan};

/// Selector for a tag found at the head of an axis list.
///
/// Together with [`There`], this lets the compiler locate a tag inside a
/// list without overlapping impls. Methods that look an axis up by tag take
/// a selector type parameter which is always inferred; call them as
/// `array.size::<Time, _>()`.
pub enum Here {}

/// Selector for a tag found in the tail of an axis list.
pub struct There<I>(PhantomData<I>);

/// One resolved axis of a view: the selected span plus the storage stride of
/// a unit step along the axis.
///
/// The stride is the product of the parent array's full sizes of all axes
/// nested inside this one, fixed when the view is created; narrowing an
/// outer axis never changes it.
pub struct AxisSpan<D>
{
    pub(crate) span: DimensionSpan<D>,
    pub(crate) stride: usize,
}

copy_and_clone! { [D] AxisSpan<D> }

impl<D: Dimension> AxisSpan<D>
{
    /// The selected span, in parent-array coordinates.
    pub fn span(&self) -> DimensionSpan<D>
    {
        self.span
    }

    /// Storage elements per unit step along this axis.
    pub fn stride(&self) -> usize
    {
        self.stride
    }

    pub(crate) fn len(&self) -> usize
    {
        self.span.length().value()
    }
}

impl<D: Dimension> fmt::Debug for AxisSpan<D>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(
            f,
            "AxisSpan<{}>({}..{}, stride {})",
            D::LABEL,
            self.span.start(),
            self.span.end(),
            self.stride
        )
    }
}

/// An ordered type-level list of axis tags, outermost first.
///
/// Implemented for `()` and `(D, Tail)`; not implementable outside the
/// crate. The unsafe code in the view types relies on the invariants
/// maintained here: every offset addressable through an axis set derived
/// from an array's sizes lies inside that array's storage.
pub trait DimensionList: 'static
{
    /// Number of axes in the list.
    const RANK: usize;

    /// Per-axis sizes, as a nested tuple of `DimensionSize`.
    type Sizes: Copy + PartialEq + fmt::Debug;
    /// Per-axis view state, as a nested tuple of [`AxisSpan`].
    type Axes: Copy + fmt::Debug;
    /// Per-axis traversal counters, as a nested tuple of `usize`.
    type Counters: Copy;

    private_decl! {}

    /// Product of all axis sizes: the number of elements a full array holds.
    fn total_size(sizes: &Self::Sizes) -> usize;

    /// Full-extent axis set for an array of the given sizes, with strides
    /// composed bottom-up (the innermost axis has the identity stride).
    fn full_axes(sizes: &Self::Sizes) -> Self::Axes
    {
        Self::axes_and_total(sizes).0
    }

    #[doc(hidden)]
    fn axes_and_total(sizes: &Self::Sizes) -> (Self::Axes, usize);

    /// Product of the span lengths: the number of elements a view selects.
    fn data_size(axes: &Self::Axes) -> usize;

    /// Counters positioned at the first element.
    fn start_counters() -> Self::Counters;

    /// Advance one element in element order. Returns false when the walk has
    /// rolled over the outermost axis; the counters are then reset and `pos`
    /// is left at the start of the outermost axis's last selected block (the
    /// iterator jumps to its sentinel instead of reading `pos` again).
    #[doc(hidden)]
    fn advance(axes: &Self::Axes, counters: &mut Self::Counters, pos: &mut usize) -> bool;

    /// Distance from this list's block start to the start of its last
    /// selected sub-block, as left behind by an exhausted `advance`.
    #[doc(hidden)]
    fn retreat_span(axes: &Self::Axes) -> usize;

    /// Distance from the first selected element to the end sentinel: the
    /// outermost axis's span length times its stride.
    #[doc(hidden)]
    fn end_span(axes: &Self::Axes) -> usize;

    /// Elements already traversed for the given counter state.
    #[doc(hidden)]
    fn consumed(axes: &Self::Axes, counters: &Self::Counters) -> usize;

    #[doc(hidden)]
    fn push_sizes(sizes: &Self::Sizes, out: &mut Vec<usize>);

    #[doc(hidden)]
    fn read_sizes(input: &[usize]) -> Option<Self::Sizes>;

    #[doc(hidden)]
    fn fmt_axes(axes: &Self::Axes, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    #[doc(hidden)]
    fn fmt_sizes(sizes: &Self::Sizes, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl DimensionList for ()
{
    const RANK: usize = 0;

    type Sizes = ();
    type Axes = ();
    type Counters = ();

    private_impl! {}

    // empty product
    fn total_size(_: &()) -> usize
    {
        1
    }

    fn axes_and_total(_: &()) -> ((), usize)
    {
        ((), 1)
    }

    fn data_size(_: &()) -> usize
    {
        1
    }

    fn start_counters() {}

    fn advance(_: &(), _: &mut (), _: &mut usize) -> bool
    {
        false
    }

    fn retreat_span(_: &()) -> usize
    {
        0
    }

    fn end_span(_: &()) -> usize
    {
        0
    }

    fn consumed(_: &(), _: &()) -> usize
    {
        0
    }

    fn push_sizes(_: &(), _: &mut Vec<usize>) {}

    fn read_sizes(input: &[usize]) -> Option<()>
    {
        if input.is_empty() {
            Some(())
        } else {
            None
        }
    }

    fn fmt_axes(_: &(), _: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        Ok(())
    }

    fn fmt_sizes(_: &(), _: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        Ok(())
    }
}

impl<D, T> DimensionList for (D, T)
where
    D: Dimension,
    T: DimensionList,
{
    const RANK: usize = 1 + T::RANK;

    type Sizes = (DimensionSize<D>, T::Sizes);
    type Axes = (AxisSpan<D>, T::Axes);
    type Counters = (usize, T::Counters);

    private_impl! {}

    fn total_size(sizes: &Self::Sizes) -> usize
    {
        sizes.0.value() * T::total_size(&sizes.1)
    }

    fn axes_and_total(sizes: &Self::Sizes) -> (Self::Axes, usize)
    {
        let (tail, tail_total) = T::axes_and_total(&sizes.1);
        let axis = AxisSpan {
            span: DimensionSpan::from(sizes.0),
            stride: tail_total,
        };
        ((axis, tail), sizes.0.value() * tail_total)
    }

    fn data_size(axes: &Self::Axes) -> usize
    {
        axes.0.len() * T::data_size(&axes.1)
    }

    fn start_counters() -> Self::Counters
    {
        (0, T::start_counters())
    }

    fn advance(axes: &Self::Axes, counters: &mut Self::Counters, pos: &mut usize) -> bool
    {
        if T::advance(&axes.1, &mut counters.1, pos) {
            return true;
        }
        // inner axes rolled over and left pos at the start of their last
        // selected sub-block; pull it back to this level's block start
        *pos -= T::retreat_span(&axes.1);
        counters.0 += 1;
        if counters.0 < axes.0.len() {
            *pos += axes.0.stride;
            return true;
        }
        counters.0 = 0;
        false
    }

    fn retreat_span(axes: &Self::Axes) -> usize
    {
        axes.0.len().saturating_sub(1) * axes.0.stride
    }

    fn end_span(axes: &Self::Axes) -> usize
    {
        axes.0.len() * axes.0.stride
    }

    fn consumed(axes: &Self::Axes, counters: &Self::Counters) -> usize
    {
        counters.0 * T::data_size(&axes.1) + T::consumed(&axes.1, &counters.1)
    }

    fn push_sizes(sizes: &Self::Sizes, out: &mut Vec<usize>)
    {
        out.push(sizes.0.value());
        T::push_sizes(&sizes.1, out);
    }

    fn read_sizes(input: &[usize]) -> Option<Self::Sizes>
    {
        let (&first, rest) = input.split_first()?;
        Some((DimensionSize::new(first), T::read_sizes(rest)?))
    }

    fn fmt_axes(axes: &Self::Axes, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}: {}..{}", D::LABEL, axes.0.span.start(), axes.0.span.end())?;
        if T::RANK > 0 {
            f.write_str(", ")?;
        }
        T::fmt_axes(&axes.1, f)
    }

    fn fmt_sizes(sizes: &Self::Sizes, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}: {}", D::LABEL, sizes.0)?;
        if T::RANK > 0 {
            f.write_str(", ")?;
        }
        T::fmt_sizes(&sizes.1, f)
    }
}

/// An axis list with at least one axis.
///
/// Rank reduction bottoms out here: `index_axis` is only available while the
/// reduced list still has an axis to offer, so the rank-1 view is a distinct
/// terminal form whose element access returns plain references.
pub trait NonEmpty: DimensionList
{
    private_decl! {}
}

impl<D, T> NonEmpty for (D, T)
where
    D: Dimension,
    T: DimensionList,
{
    private_impl! {}
}

/// Compile-time lookup of the axis tagged `D` inside an axis list.
///
/// `I` is the selector ([`Here`] or [`There`]) locating the tag; it is
/// always inferred. A tag the list does not carry, or carries twice, fails
/// to resolve — requesting the wrong axis is a build error, not a runtime
/// one.
pub trait HasDimension<D: Dimension, I>: DimensionList
{
    /// The list with axis `D` removed.
    type Reduced: DimensionList;

    private_decl! {}

    /// Size of axis `D` in a size set.
    fn size_of(sizes: &Self::Sizes) -> DimensionSize<D>;

    /// Replace the size of axis `D` in a size set.
    fn set_size(sizes: &mut Self::Sizes, size: DimensionSize<D>);

    /// Span of axis `D` in an axis set.
    fn span_of(axes: &Self::Axes) -> DimensionSpan<D>;

    /// Stride of axis `D` in an axis set.
    fn stride_of(axes: &Self::Axes) -> usize;

    /// Fix axis `D` at `index` (local to the current span): returns the
    /// element offset of the selected block relative to the view's origin,
    /// and the remaining axes. The caller checks `index` against the span
    /// length.
    fn remove_axis(axes: &Self::Axes, index: DimensionIndex<D>)
        -> (usize, <Self::Reduced as DimensionList>::Axes);

    /// Narrow axis `D` to `span` (local to the current span, trimmed against
    /// its length): returns the element offset of the narrowed block
    /// relative to the view's origin.
    fn narrow_axis(axes: &mut Self::Axes, span: DimensionSpan<D>) -> usize;
}

impl<D, T> HasDimension<D, Here> for (D, T)
where
    D: Dimension,
    T: DimensionList,
{
    type Reduced = T;

    private_impl! {}

    fn size_of(sizes: &Self::Sizes) -> DimensionSize<D>
    {
        sizes.0
    }

    fn set_size(sizes: &mut Self::Sizes, size: DimensionSize<D>)
    {
        sizes.0 = size;
    }

    fn span_of(axes: &Self::Axes) -> DimensionSpan<D>
    {
        axes.0.span
    }

    fn stride_of(axes: &Self::Axes) -> usize
    {
        axes.0.stride
    }

    fn remove_axis(axes: &Self::Axes, index: DimensionIndex<D>) -> (usize, T::Axes)
    {
        (index.value() * axes.0.stride, axes.1)
    }

    fn narrow_axis(axes: &mut Self::Axes, span: DimensionSpan<D>) -> usize
    {
        let current = axes.0.span;
        let request = span.trim(current.length());
        axes.0.span = DimensionSpan::new(
            current.start() + DimensionSize::new(request.start().value()),
            request.length(),
        );
        request.start().value() * axes.0.stride
    }
}

impl<D, E, T, I> HasDimension<D, There<I>> for (E, T)
where
    D: Dimension,
    E: Dimension,
    T: HasDimension<D, I>,
{
    type Reduced = (E, T::Reduced);

    private_impl! {}

    fn size_of(sizes: &Self::Sizes) -> DimensionSize<D>
    {
        T::size_of(&sizes.1)
    }

    fn set_size(sizes: &mut Self::Sizes, size: DimensionSize<D>)
    {
        T::set_size(&mut sizes.1, size);
    }

    fn span_of(axes: &Self::Axes) -> DimensionSpan<D>
    {
        T::span_of(&axes.1)
    }

    fn stride_of(axes: &Self::Axes) -> usize
    {
        T::stride_of(&axes.1)
    }

    fn remove_axis(
        axes: &Self::Axes, index: DimensionIndex<D>,
    ) -> (usize, <Self::Reduced as DimensionList>::Axes)
    {
        let (offset, tail) = T::remove_axis(&axes.1, index);
        (offset, (axes.0, tail))
    }

    fn narrow_axis(axes: &mut Self::Axes, span: DimensionSpan<D>) -> usize
    {
        T::narrow_axis(&mut axes.1, span)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    dimension! {
        A, "a";
        B, "b";
        C, "c";
    }

    type L3 = dims![A, B, C];

    fn sizes(a: usize, b: usize, c: usize) -> <L3 as DimensionList>::Sizes
    {
        (DimensionSize::new(a), (DimensionSize::new(b), (DimensionSize::new(c), ())))
    }

    #[test]
    fn strides_compose_bottom_up()
    {
        let sizes = sizes(10, 20, 30);
        let axes = L3::full_axes(&sizes);
        assert_eq!(axes.0.stride(), 600);
        assert_eq!((axes.1).0.stride(), 30);
        assert_eq!(((axes.1).1).0.stride(), 1);
        assert_eq!(L3::total_size(&sizes), 6000);
        assert_eq!(L3::data_size(&axes), 6000);
    }

    #[test]
    fn advance_walks_in_storage_order()
    {
        let sizes = sizes(2, 2, 3);
        let axes = L3::full_axes(&sizes);
        let mut counters = L3::start_counters();
        let mut pos = 0;
        let mut seen = alloc::vec![0];
        while L3::advance(&axes, &mut counters, &mut pos) {
            seen.push(pos);
        }
        assert_eq!(seen, (0..12).collect::<Vec<_>>());
        // rolled over: pos at the last outer block's start, counters reset
        assert_eq!(pos, L3::retreat_span(&axes));
        assert_eq!(L3::consumed(&axes, &counters), 0);
    }

    #[test]
    fn advance_skips_unselected_elements()
    {
        // spans b = 1..3 of 4, c = 2..3 of 3 inside a 2 x 4 x 3 array
        let sizes = sizes(2, 4, 3);
        let mut axes = L3::full_axes(&sizes);
        let offset = <L3 as HasDimension<B, _>>::narrow_axis(&mut axes, DimensionSpan::from(1..3))
            + <L3 as HasDimension<C, _>>::narrow_axis(&mut axes, DimensionSpan::from(2..3));
        assert_eq!(offset, 5);
        let mut counters = L3::start_counters();
        let mut pos = offset;
        let mut seen = alloc::vec![pos];
        while L3::advance(&axes, &mut counters, &mut pos) {
            seen.push(pos);
        }
        // (a, b, c) with a in 0..2, b in 1..3, c == 2
        assert_eq!(seen, alloc::vec![5, 8, 17, 20]);
        assert_eq!(L3::data_size(&axes), 4);
    }

    #[test]
    fn remove_axis_drops_the_right_level()
    {
        let sizes = sizes(10, 20, 30);
        let axes = L3::full_axes(&sizes);
        let (offset, reduced) =
            <L3 as HasDimension<B, _>>::remove_axis(&axes, DimensionIndex::new(3));
        assert_eq!(offset, 90);
        assert_eq!(reduced.0.stride(), 600);
        assert_eq!((reduced.1).0.stride(), 1);
        assert_eq!(<dims![A, C] as DimensionList>::data_size(&reduced), 300);
    }
}
