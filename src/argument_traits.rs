//! Traits that let the array surface accept flat tuples of tagged arguments
//! in any axis order: construction sizes, resize sizes and slicing spans are
//! all matched to their axes by tag, at compile time.

use crate::dimension::{Dimension, DimensionSize, DimensionSpan};
use crate::dimension::sequence::{DimensionList, HasDimension, Here, There};

/// Conversion from a flat argument tuple to the nested list the recursive
/// traits below walk. Implemented for tuples up to six elements and for bare
/// size/span values (a one-argument call needs no tuple).
pub trait IntoNested
{
    type Nested;
    fn into_nested(self) -> Self::Nested;
}

impl<D: Dimension> IntoNested for DimensionSize<D>
{
    type Nested = (Self, ());

    fn into_nested(self) -> Self::Nested
    {
        (self, ())
    }
}

impl<D: Dimension> IntoNested for DimensionSpan<D>
{
    type Nested = (Self, ());

    fn into_nested(self) -> Self::Nested
    {
        (self, ())
    }
}

macro_rules! impl_into_nested {
    (@nest) => { () };
    (@nest $head:ident $($rest:ident)*) => { ($head, impl_into_nested!(@nest $($rest)*)) };
    ($($name:ident)*) => {
        impl<$($name),*> IntoNested for ($($name,)*)
        {
            type Nested = impl_into_nested!(@nest $($name)*);

            #[allow(non_snake_case)]
            fn into_nested(self) -> Self::Nested
            {
                let ($($name,)*) = self;
                impl_into_nested!(@nest $($name)*)
            }
        }
    };
}

impl_into_nested! { T1 }
impl_into_nested! { T1 T2 }
impl_into_nested! { T1 T2 T3 }
impl_into_nested! { T1 T2 T3 T4 }
impl_into_nested! { T1 T2 T3 T4 T5 }
impl_into_nested! { T1 T2 T3 T4 T5 T6 }

/// Extract the size tagged `D` from a nested argument list, leaving the
/// rest. A duplicated tag makes the selector ambiguous and fails to compile.
pub trait TakeSize<D: Dimension, I>
{
    type Rest;
    fn take(self) -> (DimensionSize<D>, Self::Rest);
}

impl<D: Dimension, T> TakeSize<D, Here> for (DimensionSize<D>, T)
{
    type Rest = T;

    fn take(self) -> (DimensionSize<D>, T)
    {
        (self.0, self.1)
    }
}

impl<D: Dimension, H, T, I> TakeSize<D, There<I>> for (H, T)
where
    T: TakeSize<D, I>,
{
    type Rest = (H, T::Rest);

    fn take(self) -> (DimensionSize<D>, Self::Rest)
    {
        let (size, rest) = <T as TakeSize<D, I>>::take(self.1);
        (size, (self.0, rest))
    }
}

/// A complete set of construction sizes for the axis list `L`: one size per
/// axis, in any order. Missing or duplicated axes fail to compile.
pub trait SizeArgs<L: DimensionList, I>
{
    fn build_sizes(self) -> L::Sizes;
}

impl SizeArgs<(), ()> for ()
{
    fn build_sizes(self) {}
}

impl<D, T, Args, IH, IT> SizeArgs<(D, T), (IH, IT)> for Args
where
    D: Dimension,
    T: DimensionList,
    Args: TakeSize<D, IH>,
    Args::Rest: SizeArgs<T, IT>,
{
    fn build_sizes(self) -> <(D, T) as DimensionList>::Sizes
    {
        let (size, rest) = <Args as TakeSize<D, IH>>::take(self);
        (size, <Args::Rest as SizeArgs<T, IT>>::build_sizes(rest))
    }
}

/// A partial set of sizes updating the axis list `L`: each named axis is
/// replaced, the rest keep their extent.
pub trait UpdateSizes<L: DimensionList, I>
{
    fn update_sizes(self, sizes: &mut L::Sizes);
}

impl<L: DimensionList> UpdateSizes<L, ()> for ()
{
    fn update_sizes(self, _: &mut L::Sizes) {}
}

impl<D, L, T, IH, IT> UpdateSizes<L, (IH, IT)> for (DimensionSize<D>, T)
where
    D: Dimension,
    L: HasDimension<D, IH>,
    T: UpdateSizes<L, IT>,
{
    fn update_sizes(self, sizes: &mut L::Sizes)
    {
        L::set_size(sizes, self.0);
        <T as UpdateSizes<L, IT>>::update_sizes(self.1, sizes);
    }
}

/// A partial set of spans narrowing the axis list `L`: each named axis is
/// narrowed (relative to its current span, trimmed to fit), the rest keep
/// their full extent. Returns the element offset of the narrowed block
/// relative to the view's origin.
pub trait ApplySpans<L: DimensionList, I>
{
    fn apply_spans(self, axes: &mut L::Axes) -> usize;
}

impl<L: DimensionList> ApplySpans<L, ()> for ()
{
    fn apply_spans(self, _: &mut L::Axes) -> usize
    {
        0
    }
}

impl<D, L, T, IH, IT> ApplySpans<L, (IH, IT)> for (DimensionSpan<D>, T)
where
    D: Dimension,
    L: HasDimension<D, IH>,
    T: ApplySpans<L, IT>,
{
    fn apply_spans(self, axes: &mut L::Axes) -> usize
    {
        L::narrow_axis(axes, self.0) + <T as ApplySpans<L, IT>>::apply_spans(self.1, axes)
    }
}
