//! Borrowed views over a sub-rectangle of a [`MultiArray`](crate::MultiArray).
//!
//! A view holds, per remaining axis, the selected span and that axis's
//! storage stride, plus one offset marking its first selected element. All
//! narrowing is constant-time span/offset arithmetic; element data is never
//! copied. The borrow checker enforces the validity rule: a view cannot
//! outlive its array, and no mutation (including `resize`) can happen while
//! a view exists.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use core::ptr::NonNull;

use rawpointer::PointerExt;

use crate::argument_traits::{ApplySpans, IntoNested};
use crate::dimension::{
    Dimension, DimensionIndex, DimensionList, DimensionSize, DimensionSpan, HasDimension,
    NonEmpty,
};
use crate::error::{ErrorKind, ShapeError};
use crate::iterators::{SliceIter, SliceIterMut};

/// A shared view of a sub-rectangle of a [`MultiArray`](crate::MultiArray).
///
/// Narrow it one axis at a time — [`index_axis`](Slice::index_axis) fixes an
/// axis and drops to one rank lower, [`slice_axis`](Slice::slice_axis) keeps
/// the rank and shrinks one span — or several axes at once with
/// [`slice`](Slice::slice). Axes are always named by tag; the narrowing
/// order is free.
///
/// A rank-1 view is the terminal form: it has no `index_axis`, and indexes
/// directly to element references instead.
pub struct Slice<'a, A, L: DimensionList>
{
    data: &'a [A],
    offset: usize,
    axes: L::Axes,
}

copy_and_clone! { ['a, A, L: DimensionList] Slice<'a, A, L> }

impl<'a, A, L: DimensionList> Slice<'a, A, L>
{
    /// `axes` must only address offsets below `data.len()` when based at
    /// `offset`; all constructors in the crate derive them from the parent
    /// array's sizes, which guarantees it.
    pub(crate) fn from_raw(data: &'a [A], offset: usize, axes: L::Axes) -> Self
    {
        Slice { data, offset, axes }
    }

    /// The number of elements the view selects: the product of its span
    /// lengths.
    pub fn data_size(&self) -> usize
    {
        L::data_size(&self.axes)
    }

    /// The extent of the view along axis `D`.
    ///
    /// The selector parameter is inferred: `slice.size::<Time, _>()`.
    pub fn size<D, I>(&self) -> DimensionSize<D>
    where
        D: Dimension,
        L: HasDimension<D, I>,
    {
        L::span_of(&self.axes).length()
    }

    /// Same as [`size`](Slice::size).
    pub fn dimension<D, I>(&self) -> DimensionSize<D>
    where
        D: Dimension,
        L: HasDimension<D, I>,
    {
        self.size::<D, I>()
    }

    /// The view's span along axis `D`, in parent-array coordinates.
    pub fn span<D, I>(&self) -> DimensionSpan<D>
    where
        D: Dimension,
        L: HasDimension<D, I>,
    {
        L::span_of(&self.axes)
    }

    /// Fix axis `D` at `index` (relative to this view) and drop to a view
    /// one rank lower.
    ///
    /// **Panics** if `index` is out of bounds.
    #[track_caller]
    pub fn index_axis<D, I>(&self, index: DimensionIndex<D>) -> Slice<'a, A, L::Reduced>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        L::Reduced: NonEmpty,
    {
        match self.try_index_axis(index) {
            Ok(slice) => slice,
            Err(_) => index_out_of_bounds::<D>(index, L::span_of(&self.axes).length()),
        }
    }

    /// Fix axis `D` at `index`, erroring instead of panicking when the index
    /// is out of bounds.
    pub fn try_index_axis<D, I>(
        &self, index: DimensionIndex<D>,
    ) -> Result<Slice<'a, A, L::Reduced>, ShapeError>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        L::Reduced: NonEmpty,
    {
        if index >= L::span_of(&self.axes).length() {
            return Err(ShapeError::from_kind(ErrorKind::OutOfBounds));
        }
        let (delta, axes) = L::remove_axis(&self.axes, index);
        Ok(Slice::from_raw(self.data, self.offset + delta, axes))
    }

    /// Narrow axis `D` to `span` (relative to this view), keeping the rank.
    ///
    /// The request is trimmed against the current extent, so an out-of-range
    /// span silently empties rather than overruns.
    pub fn slice_axis<D, I, S>(&self, span: S) -> Slice<'a, A, L>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        S: Into<DimensionSpan<D>>,
    {
        let mut axes = self.axes;
        let delta = L::narrow_axis(&mut axes, span.into());
        Slice::from_raw(self.data, self.offset + delta, axes)
    }

    /// Narrow several axes at once: pass a span per axis to restrict, in any
    /// order; omitted axes keep their extent.
    pub fn slice<Sp, I>(&self, spans: Sp) -> Slice<'a, A, L>
    where
        Sp: IntoNested,
        Sp::Nested: ApplySpans<L, I>,
    {
        let mut axes = self.axes;
        let delta = spans.into_nested().apply_spans(&mut axes);
        Slice::from_raw(self.data, self.offset + delta, axes)
    }

    /// Iterate the selected elements in element order: the first axis is the
    /// outermost loop, the last the innermost.
    pub fn iter(&self) -> SliceIter<'a, A, L>
    {
        SliceIter::new(self.data, self.offset, self.axes)
    }
}

/// Element access on the terminal rank-1 view.
impl<'a, A, D: Dimension> Slice<'a, A, (D, ())>
{
    /// A reference to the element at `index` (relative to this view), or
    /// `None` if out of bounds. The reference borrows the underlying array,
    /// not the view.
    pub fn get(&self, index: DimensionIndex<D>) -> Option<&'a A>
    {
        let axis = &self.axes.0;
        if index >= axis.span().length() {
            return None;
        }
        Some(&self.data[self.offset + index.value() * axis.stride()])
    }
}

impl<'a, A, D: Dimension> Index<DimensionIndex<D>> for Slice<'a, A, (D, ())>
{
    type Output = A;

    #[track_caller]
    fn index(&self, index: DimensionIndex<D>) -> &A
    {
        match self.get(index) {
            Some(element) => element,
            None => index_out_of_bounds::<D>(index, self.axes.0.span().length()),
        }
    }
}

impl<'a, A, L: DimensionList> IntoIterator for Slice<'a, A, L>
{
    type Item = &'a A;
    type IntoIter = SliceIter<'a, A, L>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl<'a, 'b, A, L: DimensionList> IntoIterator for &'b Slice<'a, A, L>
{
    type Item = &'a A;
    type IntoIter = SliceIter<'a, A, L>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

/// Views are equal when they select the same number of elements and an
/// element-order traversal matches.
impl<'a, 'b, A, L> PartialEq<Slice<'b, A, L>> for Slice<'a, A, L>
where
    A: PartialEq,
    L: DimensionList,
{
    fn eq(&self, rhs: &Slice<'b, A, L>) -> bool
    {
        self.data_size() == rhs.data_size() && self.iter().eq(rhs.iter())
    }
}

impl<'a, A, L: DimensionList> fmt::Debug for Slice<'a, A, L>
where A: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str("Slice { ")?;
        L::fmt_axes(&self.axes, f)?;
        f.write_str(", data: ")?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(" }")
    }
}

/// An exclusive view of a sub-rectangle of a [`MultiArray`](crate::MultiArray).
///
/// The narrowing operations consume the view (it is a unique borrow);
/// [`reborrow`](SliceMut::reborrow) hands out a shorter-lived copy when the
/// original must stay usable afterwards, and [`view`](SliceMut::view) a
/// shared one.
pub struct SliceMut<'a, A, L: DimensionList>
{
    ptr: NonNull<A>,
    len: usize,
    offset: usize,
    axes: L::Axes,
    life: PhantomData<&'a mut A>,
}

impl<'a, A, L: DimensionList> SliceMut<'a, A, L>
{
    /// Caller guarantees `ptr..ptr+len` is uniquely borrowed for `'a` and
    /// that `axes` based at `offset` only addresses offsets below `len`.
    pub(crate) unsafe fn from_raw(ptr: NonNull<A>, len: usize, offset: usize, axes: L::Axes)
        -> Self
    {
        SliceMut {
            ptr,
            len,
            offset,
            axes,
            life: PhantomData,
        }
    }

    /// A shared view of the same selection, borrowing this one.
    pub fn view(&self) -> Slice<'_, A, L>
    {
        // shared reborrow of our unique borrow
        let data = unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) };
        Slice::from_raw(data, self.offset, self.axes)
    }

    /// An exclusive view of the same selection, borrowing this one.
    pub fn reborrow(&mut self) -> SliceMut<'_, A, L>
    {
        SliceMut {
            ptr: self.ptr,
            len: self.len,
            offset: self.offset,
            axes: self.axes,
            life: PhantomData,
        }
    }

    /// The number of elements the view selects.
    pub fn data_size(&self) -> usize
    {
        L::data_size(&self.axes)
    }

    /// The extent of the view along axis `D`.
    pub fn size<D, I>(&self) -> DimensionSize<D>
    where
        D: Dimension,
        L: HasDimension<D, I>,
    {
        L::span_of(&self.axes).length()
    }

    /// Same as [`size`](SliceMut::size).
    pub fn dimension<D, I>(&self) -> DimensionSize<D>
    where
        D: Dimension,
        L: HasDimension<D, I>,
    {
        self.size::<D, I>()
    }

    /// The view's span along axis `D`, in parent-array coordinates.
    pub fn span<D, I>(&self) -> DimensionSpan<D>
    where
        D: Dimension,
        L: HasDimension<D, I>,
    {
        L::span_of(&self.axes)
    }

    /// Fix axis `D` at `index` (relative to this view) and drop to a view
    /// one rank lower. Consumes the view; `reborrow` first to keep it.
    ///
    /// **Panics** if `index` is out of bounds.
    #[track_caller]
    pub fn index_axis<D, I>(self, index: DimensionIndex<D>) -> SliceMut<'a, A, L::Reduced>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        L::Reduced: NonEmpty,
    {
        let length = L::span_of(&self.axes).length();
        match self.try_index_axis(index) {
            Ok(slice) => slice,
            Err(_) => index_out_of_bounds::<D>(index, length),
        }
    }

    /// Fix axis `D` at `index`, erroring instead of panicking when the index
    /// is out of bounds.
    pub fn try_index_axis<D, I>(
        self, index: DimensionIndex<D>,
    ) -> Result<SliceMut<'a, A, L::Reduced>, ShapeError>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        L::Reduced: NonEmpty,
    {
        if index >= L::span_of(&self.axes).length() {
            return Err(ShapeError::from_kind(ErrorKind::OutOfBounds));
        }
        let (delta, axes) = L::remove_axis(&self.axes, index);
        // same storage, narrowed selection
        Ok(unsafe { SliceMut::from_raw(self.ptr, self.len, self.offset + delta, axes) })
    }

    /// Narrow axis `D` to `span` (relative to this view), keeping the rank.
    /// The request is trimmed against the current extent.
    pub fn slice_axis<D, I, S>(self, span: S) -> SliceMut<'a, A, L>
    where
        D: Dimension,
        L: HasDimension<D, I>,
        S: Into<DimensionSpan<D>>,
    {
        let mut axes = self.axes;
        let delta = L::narrow_axis(&mut axes, span.into());
        unsafe { SliceMut::from_raw(self.ptr, self.len, self.offset + delta, axes) }
    }

    /// Narrow several axes at once, in any order; omitted axes keep their
    /// extent.
    pub fn slice<Sp, I>(self, spans: Sp) -> SliceMut<'a, A, L>
    where
        Sp: IntoNested,
        Sp::Nested: ApplySpans<L, I>,
    {
        let mut axes = self.axes;
        let delta = spans.into_nested().apply_spans(&mut axes);
        unsafe { SliceMut::from_raw(self.ptr, self.len, self.offset + delta, axes) }
    }

    /// Iterate the selected elements in element order.
    pub fn iter(&self) -> SliceIter<'_, A, L>
    {
        self.view().iter()
    }

    /// Iterate the selected elements mutably, in element order.
    pub fn iter_mut(&mut self) -> SliceIterMut<'_, A, L>
    {
        unsafe { SliceIterMut::new(self.ptr, self.len, self.offset, self.axes) }
    }

    /// Clone `value` into every selected element.
    pub fn fill(&mut self, value: A)
    where A: Clone
    {
        for element in self.iter_mut() {
            *element = value.clone();
        }
    }
}

/// Element access on the terminal rank-1 view.
impl<'a, A, D: Dimension> SliceMut<'a, A, (D, ())>
{
    pub fn get(&self, index: DimensionIndex<D>) -> Option<&A>
    {
        let axis = &self.axes.0;
        if index >= axis.span().length() {
            return None;
        }
        let position = self.offset + index.value() * axis.stride();
        debug_assert!(position < self.len);
        Some(unsafe { &*PointerExt::add(self.ptr, position).as_ptr() })
    }

    pub fn get_mut(&mut self, index: DimensionIndex<D>) -> Option<&mut A>
    {
        let axis = &self.axes.0;
        if index >= axis.span().length() {
            return None;
        }
        let position = self.offset + index.value() * axis.stride();
        debug_assert!(position < self.len);
        Some(unsafe { &mut *PointerExt::add(self.ptr, position).as_ptr() })
    }
}

impl<'a, A, D: Dimension> Index<DimensionIndex<D>> for SliceMut<'a, A, (D, ())>
{
    type Output = A;

    #[track_caller]
    fn index(&self, index: DimensionIndex<D>) -> &A
    {
        match self.get(index) {
            Some(element) => element,
            None => index_out_of_bounds::<D>(index, self.axes.0.span().length()),
        }
    }
}

impl<'a, A, D: Dimension> IndexMut<DimensionIndex<D>> for SliceMut<'a, A, (D, ())>
{
    #[track_caller]
    fn index_mut(&mut self, index: DimensionIndex<D>) -> &mut A
    {
        let length = self.axes.0.span().length();
        match self.get_mut(index) {
            Some(element) => element,
            None => index_out_of_bounds::<D>(index, length),
        }
    }
}

impl<'a, A, L: DimensionList> IntoIterator for SliceMut<'a, A, L>
{
    type Item = &'a mut A;
    type IntoIter = SliceIterMut<'a, A, L>;

    fn into_iter(self) -> Self::IntoIter
    {
        unsafe { SliceIterMut::new(self.ptr, self.len, self.offset, self.axes) }
    }
}

impl<'a, 'b, A, L> PartialEq<SliceMut<'b, A, L>> for SliceMut<'a, A, L>
where
    A: PartialEq,
    L: DimensionList,
{
    fn eq(&self, rhs: &SliceMut<'b, A, L>) -> bool
    {
        self.view() == rhs.view()
    }
}

impl<'a, 'b, A, L> PartialEq<Slice<'b, A, L>> for SliceMut<'a, A, L>
where
    A: PartialEq,
    L: DimensionList,
{
    fn eq(&self, rhs: &Slice<'b, A, L>) -> bool
    {
        self.view() == *rhs
    }
}

impl<'a, 'b, A, L> PartialEq<SliceMut<'b, A, L>> for Slice<'a, A, L>
where
    A: PartialEq,
    L: DimensionList,
{
    fn eq(&self, rhs: &SliceMut<'b, A, L>) -> bool
    {
        *self == rhs.view()
    }
}

impl<'a, A, L: DimensionList> fmt::Debug for SliceMut<'a, A, L>
where A: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str("SliceMut { ")?;
        L::fmt_axes(&self.axes, f)?;
        f.write_str(", data: ")?;
        f.debug_list().entries(self.iter()).finish()?;
        f.write_str(" }")
    }
}

unsafe impl<'a, A, L: DimensionList> Send for SliceMut<'a, A, L> where A: Send {}
unsafe impl<'a, A, L: DimensionList> Sync for SliceMut<'a, A, L> where A: Sync {}

#[track_caller]
#[inline(never)]
fn index_out_of_bounds<D: Dimension>(index: DimensionIndex<D>, length: DimensionSize<D>) -> !
{
    panic!(
        "index {} is out of bounds for axis {} of length {}",
        index,
        D::LABEL,
        length
    )
}
