// Copy and clone must be implemented by hand for types that carry a
// `PhantomData` axis tag: a derive would demand the (uninhabited) tag type
// itself be `Copy`.
macro_rules! copy_and_clone {
    ([$($parm:tt)*] $type_:ty) => {
        impl<$($parm)*> Copy for $type_ {}
        impl<$($parm)*> Clone for $type_ {
            #[inline(always)]
            fn clone(&self) -> Self {
                *self
            }
        }
    };
    ($type_:ty) => {
        copy_and_clone! { [] $type_ }
    };
}

/// Declare one or more axis tag types.
///
/// Each tag is an uninhabited `enum` implementing [`Dimension`](crate::Dimension);
/// it has no runtime form and exists only to distinguish axes at compile time.
/// An optional string sets the label used in debug output (the default is the
/// type name).
///
/// ```
/// use astroarray::{dimension, DimensionSize};
///
/// dimension! {
///     /// Antenna beam number.
///     pub Beam;
///     pub Baseline, "baseline";
/// }
///
/// let size = DimensionSize::<Beam>::new(8);
/// assert_eq!(size, 8);
/// ```
#[macro_export]
macro_rules! dimension {
    () => {};
    ($(#[$meta:meta])* $vis:vis $name:ident; $($rest:tt)*) => {
        $(#[$meta])*
        $vis enum $name {}
        impl $crate::Dimension for $name {
            const LABEL: &'static str = stringify!($name);
        }
        $crate::dimension! { $($rest)* }
    };
    ($(#[$meta:meta])* $vis:vis $name:ident, $label:expr; $($rest:tt)*) => {
        $(#[$meta])*
        $vis enum $name {}
        impl $crate::Dimension for $name {
            const LABEL: &'static str = $label;
        }
        $crate::dimension! { $($rest)* }
    };
}

/// Build the type-level axis list for a [`MultiArray`](crate::MultiArray) or
/// view from a comma-separated list of tags, outermost first.
///
/// `dims![Time, Frequency]` expands to `(Time, (Frequency, ()))`.
///
/// ```
/// use astroarray::{dims, MultiArray, Time, Frequency};
///
/// type Block = MultiArray<u16, dims![Time, Frequency]>;
/// ```
#[macro_export]
macro_rules! dims {
    [] => { () };
    [$head:ty $(, $rest:ty)* $(,)?] => {
        ($head, $crate::dims![$($rest),*])
    };
}
