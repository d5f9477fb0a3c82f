//! Loading and decoding of digitiser wavedump files.
//!
//! A wavedump file is plain text with one ADC sample per line and the
//! traces of consecutive events concatenated with no delimiters or
//! headers. The number of samples per waveform is a property of the
//! digitiser configuration and must be supplied by the caller.

pub mod loader;

pub use loader::{LoaderError, Waveform, WavedumpFile, decode_wavedump, load_wavedump_file};
