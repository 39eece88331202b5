//! Frame decoder for the UNI-T UT70B digital multimeter.
//!
//! The meter streams its display over a serial link as fixed 11 byte
//! frames. This library decodes those frames into typed measurements and
//! ships a small reader for the serial side of the link.

pub mod frame;
#[cfg(feature = "serial")]
pub mod serial;

// Re-export common types for easier access
pub use frame::structs::{AcDc, Measurement, Mode, DISPLAY_HEADER};
pub use frame::{decode, DecodeError, FRAME_LEN};
