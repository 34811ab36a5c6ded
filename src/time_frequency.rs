//! Time–frequency data blocks: the arrays this crate exists for.
//!
//! A [`TimeFrequency`] block stores complete spectra contiguously (time is
//! the outer axis); a [`FrequencyTime`] block stores complete channels
//! contiguously. Both expose the same spectrum/channel accessors — one of
//! the two directions is a contiguous run, the other a strided walk, and
//! the view engine makes the difference invisible.

use crate::aliases::{Dims1, Dims2, Frequency, Time};
use crate::dimension::DimensionIndex;
use crate::multi_array::MultiArray;
use crate::slice::{Slice, SliceMut};

/// Values associated with a time and a frequency, such as Stokes parameters
/// or voltages, stored as a contiguous block of complete spectra.
pub type TimeFrequency<A> = MultiArray<A, Dims2<Time, Frequency>>;

/// Values associated with a time and a frequency, stored as contiguous
/// channels in time.
pub type FrequencyTime<A> = MultiArray<A, Dims2<Frequency, Time>>;

/// All channels at one sampling time.
pub type Spectrum<'a, A> = Slice<'a, A, Dims1<Frequency>>;
/// All channels at one sampling time, mutable.
pub type SpectrumMut<'a, A> = SliceMut<'a, A, Dims1<Frequency>>;
/// One frequency channel across time.
pub type Channel<'a, A> = Slice<'a, A, Dims1<Time>>;
/// One frequency channel across time, mutable.
pub type ChannelMut<'a, A> = SliceMut<'a, A, Dims1<Time>>;

impl<A> TimeFrequency<A>
{
    /// The spectrum at sample `time`.
    ///
    /// **Panics** if `time` is out of bounds.
    pub fn spectrum(&self, time: DimensionIndex<Time>) -> Spectrum<'_, A>
    {
        self.index_axis(time)
    }

    /// The spectrum at sample `time`, mutable.
    pub fn spectrum_mut(&mut self, time: DimensionIndex<Time>) -> SpectrumMut<'_, A>
    {
        self.index_axis_mut(time)
    }

    /// The channel at frequency `channel`, across all samples.
    ///
    /// **Panics** if `channel` is out of bounds.
    pub fn channel(&self, channel: DimensionIndex<Frequency>) -> Channel<'_, A>
    {
        self.index_axis(channel)
    }

    /// The channel at frequency `channel`, mutable.
    pub fn channel_mut(&mut self, channel: DimensionIndex<Frequency>) -> ChannelMut<'_, A>
    {
        self.index_axis_mut(channel)
    }
}

impl<A> FrequencyTime<A>
{
    /// The spectrum at sample `time`.
    ///
    /// **Panics** if `time` is out of bounds.
    pub fn spectrum(&self, time: DimensionIndex<Time>) -> Spectrum<'_, A>
    {
        self.index_axis(time)
    }

    /// The spectrum at sample `time`, mutable.
    pub fn spectrum_mut(&mut self, time: DimensionIndex<Time>) -> SpectrumMut<'_, A>
    {
        self.index_axis_mut(time)
    }

    /// The channel at frequency `channel`, across all samples.
    ///
    /// **Panics** if `channel` is out of bounds.
    pub fn channel(&self, channel: DimensionIndex<Frequency>) -> Channel<'_, A>
    {
        self.index_axis(channel)
    }

    /// The channel at frequency `channel`, mutable.
    pub fn channel_mut(&mut self, channel: DimensionIndex<Frequency>) -> ChannelMut<'_, A>
    {
        self.index_axis_mut(channel)
    }
}
