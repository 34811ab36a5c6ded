#![cfg_attr(not(feature = "std"), no_std)]

//! The `astroarray` crate provides [`MultiArray`], an *n*-dimensional
//! container for numerical data — radio-telescope time–frequency blocks and
//! their relatives — in which every axis is named by a marker type. Code
//! that addresses the frequency axis cannot be applied to the time axis by
//! accident: the mistake does not compile.
//!
//! - Zero-copy [`Slice`]/[`SliceMut`] views of any contiguous
//!   sub-rectangle, narrowed axis by axis in any order.
//! - Rank reduction: fixing a single index yields a view with one axis
//!   fewer, down to a rank-1 view whose element access is a plain
//!   reference.
//! - Element-order iteration over arbitrarily narrowed (hence
//!   non-contiguous) selections, with exact size information.
//! - Views are borrow-checked: none survives a `resize` or outlives its
//!   array.
//!
//! ```
//! use astroarray::{dims, DimensionIndex, DimensionSize, DimensionSpan, MultiArray};
//! use astroarray::{Frequency, Time};
//!
//! // ten spectra of 512 channels, time-major
//! type Block = MultiArray<u16, dims![Time, Frequency]>;
//! let mut block = Block::zeros((
//!     DimensionSize::<Time>::new(10),
//!     DimensionSize::<Frequency>::new(512),
//! ));
//!
//! // narrow both axes and set the selection, without copying anything
//! block
//!     .slice_mut((
//!         DimensionSpan::<Time>::from(2..6),
//!         DimensionSpan::<Frequency>::from(128..256),
//!     ))
//!     .fill(1);
//!
//! let spectrum = block.index_axis(DimensionIndex::<Time>::new(3));
//! assert_eq!(spectrum[DimensionIndex::<Frequency>::new(128)], 1);
//! assert_eq!(spectrum[DimensionIndex::<Frequency>::new(0)], 0);
//! assert_eq!(spectrum.iter().filter(|&&value| value == 1).count(), 128);
//! ```
//!
//! ## Crate features
//!
//! - `std`: enabled by default; without it the crate is `no_std` + `alloc`.
//! - `serde`: serialization of arrays as (shape, data) pairs.

extern crate alloc;

#[macro_use]
mod macros;
#[macro_use]
mod private;

mod aliases;
mod argument_traits;
#[cfg(feature = "serde")]
mod array_serde;
mod data_buffer;
mod dimension;
mod error;
mod iterators;
mod multi_array;
mod slice;
mod time_frequency;

pub use crate::aliases::*;
pub use crate::argument_traits::{ApplySpans, IntoNested, SizeArgs, TakeSize, UpdateSizes};
pub use crate::data_buffer::DataBuffer;
pub use crate::dimension::{
    AxisSpan, Dimension, DimensionIndex, DimensionList, DimensionSize, DimensionSpan,
    HasDimension, Here, NonEmpty, There,
};
pub use crate::error::{ErrorKind, ShapeError};
pub use crate::iterators::{SliceIter, SliceIterMut};
pub use crate::multi_array::MultiArray;
pub use crate::slice::{Slice, SliceMut};
pub use crate::time_frequency::{
    Channel, ChannelMut, FrequencyTime, Spectrum, SpectrumMut, TimeFrequency,
};

pub mod prelude;
