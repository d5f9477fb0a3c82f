pub type Real = f64;
pub type SampleIndex = usize;
pub type Nanoseconds = u32;

pub const SAMPLES_PER_WAVEFORM: usize = 8192;
pub const NS_PER_SAMPLE: Nanoseconds = 4;
pub const DYNAMIC_RANGE: u32 = 4096;

/// Time of a sample relative to the waveform start.
pub fn sample_time_ns(sample: SampleIndex, ns_per_sample: Nanoseconds) -> Nanoseconds {
    (sample as Nanoseconds) * ns_per_sample
}
