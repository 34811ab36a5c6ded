//! Built-in axis tags and type aliases for common ranks.

use crate::multi_array::MultiArray;
use crate::slice::{Slice, SliceMut};

dimension! {
    /// The sampling-time axis of a data block.
    pub Time, "time";
    /// The frequency-channel axis of a data block.
    pub Frequency, "frequency";
    /// The polarization axis of a data block.
    pub Polarization, "polarization";
}

/// one axis
pub type Dims1<D1> = dims![D1];
/// two axes
pub type Dims2<D1, D2> = dims![D1, D2];
/// three axes
pub type Dims3<D1, D2, D3> = dims![D1, D2, D3];
/// four axes
pub type Dims4<D1, D2, D3, D4> = dims![D1, D2, D3, D4];
/// five axes
pub type Dims5<D1, D2, D3, D4, D5> = dims![D1, D2, D3, D4, D5];
/// six axes
pub type Dims6<D1, D2, D3, D4, D5, D6> = dims![D1, D2, D3, D4, D5, D6];

/// one-dimensional array
pub type MultiArray1<A, D1> = MultiArray<A, Dims1<D1>>;
/// two-dimensional array
pub type MultiArray2<A, D1, D2> = MultiArray<A, Dims2<D1, D2>>;
/// three-dimensional array
pub type MultiArray3<A, D1, D2, D3> = MultiArray<A, Dims3<D1, D2, D3>>;
/// four-dimensional array
pub type MultiArray4<A, D1, D2, D3, D4> = MultiArray<A, Dims4<D1, D2, D3, D4>>;

/// one-dimensional shared view
pub type Slice1<'a, A, D1> = Slice<'a, A, Dims1<D1>>;
/// two-dimensional shared view
pub type Slice2<'a, A, D1, D2> = Slice<'a, A, Dims2<D1, D2>>;
/// three-dimensional shared view
pub type Slice3<'a, A, D1, D2, D3> = Slice<'a, A, Dims3<D1, D2, D3>>;

/// one-dimensional exclusive view
pub type SliceMut1<'a, A, D1> = SliceMut<'a, A, Dims1<D1>>;
/// two-dimensional exclusive view
pub type SliceMut2<'a, A, D1, D2> = SliceMut<'a, A, Dims2<D1, D2>>;
/// three-dimensional exclusive view
pub type SliceMut3<'a, A, D1, D2, D3> = SliceMut<'a, A, Dims3<D1, D2, D3>>;
