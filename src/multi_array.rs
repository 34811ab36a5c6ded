use alloc::vec::Vec;
use core::fmt;
use core::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::argument_traits::{ApplySpans, IntoNested, SizeArgs, UpdateSizes};
use crate::data_buffer::DataBuffer;
use crate::dimension::{
    Dimension, DimensionIndex, DimensionList, DimensionSize, DimensionSpan, HasDimension,
    NonEmpty,
};
use crate::error::{ErrorKind, ShapeError};
use crate::slice::{Slice, SliceMut};

/// An *n*-dimensional array whose axes are named by marker types.
///
/// `MultiArray<A, L>` owns one contiguous, row-major buffer of
/// `Π size(axis)` elements; `L` is the axis list, outermost (slowest
/// varying) axis first, written with the [`dims!`](crate::dims) macro. Axis
/// arguments — construction sizes, resize sizes, slicing spans — are matched
/// to axes by tag, so they can be passed in any order, and an argument for
/// an axis the array does not have is a compile error.
///
/// ```
/// use astroarray::{dims, DimensionIndex, DimensionSize, MultiArray, Time, Frequency};
///
/// let mut block = MultiArray::<u16, dims![Time, Frequency]>::zeros((
///     DimensionSize::<Frequency>::new(4),
///     DimensionSize::<Time>::new(3),
/// ));
/// assert_eq!(block.size::<Time, _>(), 3);
/// assert_eq!(block.data_size(), 12);
///
/// // fix the time axis: a zero-copy spectrum view
/// let mut spectrum = block.index_axis_mut(DimensionIndex::<Time>::new(1));
/// spectrum[DimensionIndex::<Frequency>::new(2)] = 99;
/// assert_eq!(block.as_slice()[6], 99);
/// ```
pub struct MultiArray<A, L: DimensionList>
{
    pub(crate) data: DataBuffer<A>,
    pub(crate) sizes: L::Sizes,
}

impl<A, L: DimensionList> MultiArray<A, L>
{
    /// Create an array from one size per axis, in any order, filled with
    /// `A::default()`.
    pub fn new<Sh, I>(sizes: Sh) -> Self
    where
        A: Default,
        Sh: IntoNested,
        Sh::Nested: SizeArgs<L, I>,
    {
        let sizes = sizes.into_nested().build_sizes();
        let mut v = Vec::new();
        v.resize_with(L::total_size(&sizes), A::default);
        MultiArray {
            data: DataBuffer::from_vec(v),
            sizes,
        }
    }

    /// Create an array from one size per axis, in any order, filled with
    /// clones of `elem`.
    pub fn from_elem<Sh, I>(sizes: Sh, elem: A) -> Self
    where
        A: Clone,
        Sh: IntoNested,
        Sh::Nested: SizeArgs<L, I>,
    {
        let sizes = sizes.into_nested().build_sizes();
        let data = DataBuffer::from_elem(L::total_size(&sizes), elem);
        MultiArray { data, sizes }
    }

    /// Create an array filled with zeros.
    pub fn zeros<Sh, I>(sizes: Sh) -> Self
    where
        A: Clone + Zero,
        Sh: IntoNested,
        Sh::Nested: SizeArgs<L, I>,
    {
        Self::from_elem(sizes, A::zero())
    }

    /// Create an array from existing elements in row-major order.
    ///
    /// **Errors** if the element count does not match the product of the
    /// sizes.
    pub fn from_shape_vec<Sh, I>(sizes: Sh, data: Vec<A>) -> Result<Self, ShapeError>
    where
        Sh: IntoNested,
        Sh::Nested: SizeArgs<L, I>,
    {
        Self::from_raw_parts(sizes.into_nested().build_sizes(), data)
    }

    pub(crate) fn from_raw_parts(sizes: L::Sizes, data: Vec<A>) -> Result<Self, ShapeError>
    {
        if data.len() != L::total_size(&sizes) {
            return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape));
        }
        Ok(MultiArray {
            data: DataBuffer::from_vec(data),
            sizes,
        })
    }

    /// The current extent of axis `D`, found by tag regardless of
    /// declaration order.
    ///
    /// The selector parameter is inferred: `array.size::<Time, _>()`.
    pub fn size<D, I>(&self) -> DimensionSize<D>
    where
        D: Dimension,
        L: HasDimension<D, I>,
    {
        L::size_of(&self.sizes)
    }

    /// Same as [`size`](MultiArray::size).
    pub fn dimension<D, I>(&self) -> DimensionSize<D>
    where
        D: Dimension,
        L: HasDimension<D, I>,
    {
        L::size_of(&self.sizes)
    }

    /// The total number of elements, over all axes.
    pub fn data_size(&self) -> usize
    {
        self.data.len()
    }

    /// True when both arrays have the same extent along every axis.
    pub fn equal_size(&self, rhs: &Self) -> bool
    {
        self.sizes == rhs.sizes
    }

    /// The elements in storage (row-major) order.
    pub fn as_slice(&self) -> &[A]
    {
        self.data.as_slice()
    }

    /// The elements in storage (row-major) order, mutably.
    pub fn as_slice_mut(&mut self) -> &mut [A]
    {
        self.data.as_mut_slice()
    }

    /// Iterate all elements in storage order.
    pub fn iter(&self) -> core::slice::Iter<'_, A>
    {
        self.as_slice().iter()
    }

    /// Iterate all elements in storage order, mutably.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, A>
    {
        self.as_slice_mut().iter_mut()
    }

    /// Move the elements out in storage order.
    pub fn into_raw_vec(self) -> Vec<A>
    {
        self.data.into_vec()
    }

    /// A shared view of the whole array.
    pub fn view(&self) -> Slice<'_, A, L>
    {
        Slice::from_raw(self.data.as_slice(), 0, L::full_axes(&self.sizes))
    }

    /// An exclusive view of the whole array.
    pub fn view_mut(&mut self) -> SliceMut<'_, A, L>
    {
        let len = self.data.len();
        let axes = L::full_axes(&self.sizes);
        let ptr = self.data.as_nonnull();
        // unique borrow of self; axes derived from our own sizes
        unsafe { SliceMut::from_raw(ptr, len, 0, axes) }
    }

    /// Fix axis `D` at `index`: a shared view one rank lower, spanning the
    /// full extent of every other axis. Works for any axis, not just the
    /// outermost.
    ///
    /// **Panics** if `index` is out of bounds.
    #[track_caller]
    pub fn index_axis<D, I>(&self, index: DimensionIndex<D>) -> Slice<'_, A, L::Reduced>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        L::Reduced: NonEmpty,
    {
        self.view().index_axis(index)
    }

    /// Fix axis `D` at `index`, erroring instead of panicking when the index
    /// is out of bounds.
    pub fn try_index_axis<D, I>(
        &self, index: DimensionIndex<D>,
    ) -> Result<Slice<'_, A, L::Reduced>, ShapeError>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        L::Reduced: NonEmpty,
    {
        self.view().try_index_axis(index)
    }

    /// Fix axis `D` at `index`: an exclusive view one rank lower.
    ///
    /// **Panics** if `index` is out of bounds.
    #[track_caller]
    pub fn index_axis_mut<D, I>(&mut self, index: DimensionIndex<D>) -> SliceMut<'_, A, L::Reduced>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        L::Reduced: NonEmpty,
    {
        self.view_mut().index_axis(index)
    }

    /// Fix axis `D` at `index`, erroring instead of panicking when the index
    /// is out of bounds.
    pub fn try_index_axis_mut<D, I>(
        &mut self, index: DimensionIndex<D>,
    ) -> Result<SliceMut<'_, A, L::Reduced>, ShapeError>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        L::Reduced: NonEmpty,
    {
        self.view_mut().try_index_axis(index)
    }

    /// A full-rank shared view narrowed by the given spans — one span per
    /// axis to restrict, in any order; omitted axes keep their full extent.
    /// Requests are trimmed to the array's bounds.
    pub fn slice<Sp, I>(&self, spans: Sp) -> Slice<'_, A, L>
    where
        Sp: IntoNested,
        Sp::Nested: ApplySpans<L, I>,
    {
        self.view().slice(spans)
    }

    /// A full-rank exclusive view narrowed by the given spans.
    pub fn slice_mut<Sp, I>(&mut self, spans: Sp) -> SliceMut<'_, A, L>
    where
        Sp: IntoNested,
        Sp::Nested: ApplySpans<L, I>,
    {
        self.view_mut().slice(spans)
    }

    /// Narrow one axis of a full-rank shared view.
    pub fn slice_axis<D, I, S>(&self, span: S) -> Slice<'_, A, L>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        S: Into<DimensionSpan<D>>,
    {
        self.view().slice_axis(span)
    }

    /// Narrow one axis of a full-rank exclusive view.
    pub fn slice_axis_mut<D, I, S>(&mut self, span: S) -> SliceMut<'_, A, L>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        S: Into<DimensionSpan<D>>,
    {
        self.view_mut().slice_axis(span)
    }

    /// Update the named axis sizes (any subset, any order) and reallocate to
    /// the new total, filling new slots with `A::default()`.
    ///
    /// Existing elements survive in storage order only — they are *not*
    /// reflowed into the new shape. Resize before filling, not to preserve
    /// contents.
    pub fn resize<Sh, I>(&mut self, sizes: Sh)
    where
        A: Default,
        Sh: IntoNested,
        Sh::Nested: UpdateSizes<L, I>,
    {
        sizes.into_nested().update_sizes(&mut self.sizes);
        self.data.resize_default(L::total_size(&self.sizes));
    }

    /// Like [`resize`](MultiArray::resize), filling new slots with clones of
    /// `value`.
    pub fn resize_with<Sh, I>(&mut self, sizes: Sh, value: A)
    where
        A: Clone,
        Sh: IntoNested,
        Sh::Nested: UpdateSizes<L, I>,
    {
        sizes.into_nested().update_sizes(&mut self.sizes);
        self.data.resize(L::total_size(&self.sizes), value);
    }
}

/// Direct element access on rank-1 arrays; higher ranks go through
/// [`index_axis`](MultiArray::index_axis) views.
impl<A, D: Dimension> MultiArray<A, (D, ())>
{
    pub fn get(&self, index: DimensionIndex<D>) -> Option<&A>
    {
        self.as_slice().get(index.value())
    }

    pub fn get_mut(&mut self, index: DimensionIndex<D>) -> Option<&mut A>
    {
        self.as_slice_mut().get_mut(index.value())
    }
}

impl<A, D: Dimension> Index<DimensionIndex<D>> for MultiArray<A, (D, ())>
{
    type Output = A;

    #[track_caller]
    fn index(&self, index: DimensionIndex<D>) -> &A
    {
        let length = self.size::<D, _>();
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "index {} is out of bounds for axis {} of length {}",
                index,
                D::LABEL,
                length
            ),
        }
    }
}

impl<A, D: Dimension> IndexMut<DimensionIndex<D>> for MultiArray<A, (D, ())>
{
    #[track_caller]
    fn index_mut(&mut self, index: DimensionIndex<D>) -> &mut A
    {
        let length = self.size::<D, _>();
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!(
                "index {} is out of bounds for axis {} of length {}",
                index,
                D::LABEL,
                length
            ),
        }
    }
}

/// Deep copy: the whole buffer is cloned.
impl<A: Clone, L: DimensionList> Clone for MultiArray<A, L>
{
    fn clone(&self) -> Self
    {
        MultiArray {
            data: self.data.clone(),
            sizes: self.sizes,
        }
    }
}

/// Arrays are equal when every axis extent matches and the elements compare
/// equal in storage order.
impl<A: PartialEq, L: DimensionList> PartialEq for MultiArray<A, L>
{
    fn eq(&self, rhs: &Self) -> bool
    {
        self.sizes == rhs.sizes && self.as_slice() == rhs.as_slice()
    }
}

impl<A: Eq, L: DimensionList> Eq for MultiArray<A, L> {}

impl<A: fmt::Debug, L: DimensionList> fmt::Debug for MultiArray<A, L>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str("MultiArray { ")?;
        L::fmt_sizes(&self.sizes, f)?;
        f.write_str(", data: ")?;
        fmt::Debug::fmt(&self.data, f)?;
        f.write_str(" }")
    }
}

impl<'a, A, L: DimensionList> IntoIterator for &'a MultiArray<A, L>
{
    type Item = &'a A;
    type IntoIter = core::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl<'a, A, L: DimensionList> IntoIterator for &'a mut MultiArray<A, L>
{
    type Item = &'a mut A;
    type IntoIter = core::slice::IterMut<'a, A>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter_mut()
    }
}
