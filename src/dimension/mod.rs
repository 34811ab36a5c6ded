//! Axis tags and the tagged value types built on them.

pub use self::index::DimensionIndex;
pub use self::sequence::{
    AxisSpan, DimensionList, HasDimension, Here, NonEmpty, There,
};
pub use self::size::DimensionSize;
pub use self::span::DimensionSpan;

mod index;
pub mod sequence;
mod size;
mod span;

/// An axis tag: a marker type identifying one dimension of an array.
///
/// Tags carry no data and are never instantiated — declare them as
/// uninhabited enums, most conveniently with the
/// [`dimension!`](macro@crate::dimension) macro. Two values tagged with different axes are different types, so
/// mixing them up is a compile error:
///
/// ```compile_fail
/// use astroarray::{DimensionSize, Time, Frequency};
///
/// fn spectra(count: DimensionSize<Time>) -> usize { count.value() }
///
/// let channels = DimensionSize::<Frequency>::new(512);
/// spectra(channels); // frequency count where a time count is required
/// ```
pub trait Dimension: 'static
{
    /// Short human-readable axis name, used in debug output.
    const LABEL: &'static str;
}
