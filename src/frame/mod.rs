//! Decoder for the meter's 11 byte display frames.
//!
//! The UT70B streams a snapshot of its display roughly twice a second:
//! one range byte, four ASCII digits, a function code, a status byte, two
//! option bytes and a CR LF terminator. [`decode`] turns one such frame
//! into a [`Measurement`]; it is a pure function and keeps no state
//! between calls.

use thiserror::Error;

pub mod definitions;
pub mod structs;

use definitions::{get_base_unit, get_mode, get_range_table, range_index};
use structs::{AcDc, Measurement};

/// Number of bytes in one display frame, CR LF terminator included.
pub const FRAME_LEN: usize = 11;

#[derive(Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("Expected an 11 byte frame, got {0} bytes")]
    Malformed(usize),
    #[error("Digit bytes are not ASCII decimal digits")]
    BadDigits,
    #[error("Unknown function code {code} (judge bit {judge})")]
    UnknownFunction { code: u8, judge: bool },
    #[error("Unknown range code {0:#04x}")]
    UnknownRange(u8),
}

/// Decodes one display frame into a [`Measurement`].
///
/// Every frame the closed code tables do not cover is rejected with a
/// [`DecodeError`]; there are no fallback modes or ranges. Malformed input
/// never panics.
pub fn decode(frame: &[u8]) -> Result<Measurement, DecodeError> {
    if frame.len() != FRAME_LEN {
        return Err(DecodeError::Malformed(frame.len()));
    }

    let status = frame[6];
    let option1 = frame[7];
    let option2 = frame[8];

    let over_limit = status & 0x01 != 0;
    let low_battery = status & 0x02 != 0;
    let sign = if status & 0x04 != 0 { -1.0 } else { 1.0 };
    let judge = status & 0x08 != 0;

    let vahz = option1 & 0x01 != 0;
    let zero = option1 & 0x02 != 0;
    let min_hold = option1 & 0x04 != 0;
    let max_hold = option1 & 0x08 != 0;

    let auto_power_off = option2 & 0x01 != 0;
    let auto_range = option2 & 0x02 != 0;
    let acdc = if option2 & 0x04 != 0 {
        Some(AcDc::Ac)
    } else if option2 & 0x08 != 0 {
        Some(AcDc::Dc)
    } else {
        None
    };

    // digit3 comes first on the wire
    let mut magnitude: u32 = 0;
    for &digit in &frame[1..5] {
        if !digit.is_ascii_digit() {
            return Err(DecodeError::BadDigits);
        }
        magnitude = magnitude * 10 + u32::from(digit - b'0');
    }

    let mode = get_mode(frame[5], judge).ok_or(DecodeError::UnknownFunction {
        code: frame[5],
        judge,
    })?;

    let step = range_index(frame[0])
        .and_then(|idx| get_range_table(mode).get(idx))
        .ok_or(DecodeError::UnknownRange(frame[0]))?;

    let value = f64::from(magnitude) / step.divisor * sign;

    Ok(Measurement {
        mode,
        acdc,
        value,
        unit: step.unit,
        normalized_value: value * step.normalization,
        normalized_unit: get_base_unit(mode),
        over_limit,
        low_battery,
        vahz,
        zero,
        min_hold,
        max_hold,
        auto_power_off,
        auto_range,
    })
}
