//! The astroarray prelude.
//!
//! ```
//! use astroarray::prelude::*;
//! ```

pub use crate::dims;

pub use crate::{Dimension, DimensionIndex, DimensionSize, DimensionSpan};

pub use crate::{MultiArray, MultiArray1, MultiArray2, MultiArray3, MultiArray4};

pub use crate::{Slice, SliceMut};

pub use crate::{Frequency, FrequencyTime, Polarization, Time, TimeFrequency};
