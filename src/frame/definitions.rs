use super::structs::Mode;

/// One entry of a mode's range table: how to scale the four raw digits at
/// this range setting and which unit labels apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStep {
    /// Divisor placing the decimal point in the 4 digit readout
    pub divisor: f64,
    /// Unit shown next to the reading
    pub unit: &'static str,
    /// Factor from `unit` to the mode's base unit
    pub normalization: f64,
}

/// The eight range codes the meter emits, in table order.
pub const RANGE_CODES: [u8; 8] = [
    0b0110000, 0b0110001, 0b0110010, 0b0110011, 0b0110100, 0b0110101, 0b0110110, 0b0110111,
];

/// Offset of a range code within [`RANGE_CODES`], if it is one of them.
pub fn range_index(code: u8) -> Option<usize> {
    RANGE_CODES.iter().position(|&c| c == code)
}

/// Resolves the measurement mode from the function code and the status
/// byte's Judge bit. Codes 50 and 52 each carry two modes (Frequency/RPM
/// and the two temperature scales); any other pairing is unknown.
pub fn get_mode(function: u8, judge: bool) -> Option<Mode> {
    match (function, judge) {
        (59, false) => Some(Mode::Voltage),
        (51, false) => Some(Mode::Resistance),
        (53, false) => Some(Mode::Continuity),
        (49, false) => Some(Mode::Diode),
        (54, false) => Some(Mode::Capacitance),
        (50, false) => Some(Mode::Frequency),
        (50, true) => Some(Mode::Rpm),
        (52, true) => Some(Mode::TemperatureC),
        (52, false) => Some(Mode::TemperatureF),
        (61, false) => Some(Mode::CurrentMicroA),
        (57, false) => Some(Mode::CurrentMilliA),
        (63, false) => Some(Mode::CurrentA),
        (62, false) => Some(Mode::Adp0),
        (60, false) => Some(Mode::Adp1),
        (56, false) => Some(Mode::Adp2),
        (58, false) => Some(Mode::Adp3),
        _ => None,
    }
}

/// Base unit each mode's readings normalize to for cross range comparison.
pub fn get_base_unit(mode: Mode) -> &'static str {
    match mode {
        Mode::Voltage | Mode::Diode => "mV",
        Mode::CurrentMicroA | Mode::CurrentMilliA | Mode::CurrentA => "µA",
        Mode::Resistance | Mode::Continuity => "Ω",
        Mode::Frequency => "Hz",
        Mode::Rpm => "RPM",
        Mode::Capacitance => "nF",
        // °F readings are not converted, only relabeled
        Mode::TemperatureC | Mode::TemperatureF => "°C",
        // adapter modes define no ranges, so no reading reaches normalization
        Mode::Adp0 | Mode::Adp1 | Mode::Adp2 | Mode::Adp3 => "",
    }
}

/// Range table of a mode, indexed by range code offset. A shorter table
/// leaves the higher range codes undefined for that mode.
pub fn get_range_table(mode: Mode) -> &'static [RangeStep] {
    match mode {
        Mode::Voltage => &[
            RangeStep { divisor: 10.0, unit: "mV", normalization: 1.0 },
            RangeStep { divisor: 1000.0, unit: "V", normalization: 1000.0 },
            RangeStep { divisor: 100.0, unit: "V", normalization: 1000.0 },
            RangeStep { divisor: 10.0, unit: "V", normalization: 1000.0 },
            RangeStep { divisor: 1.0, unit: "V", normalization: 1000.0 },
        ],
        Mode::CurrentA => &[
            RangeStep { divisor: 10.0, unit: "A", normalization: 1_000_000.0 },
        ],
        Mode::CurrentMilliA => &[
            RangeStep { divisor: 100.0, unit: "mA", normalization: 1000.0 },
            RangeStep { divisor: 10.0, unit: "mA", normalization: 1000.0 },
        ],
        Mode::CurrentMicroA => &[
            RangeStep { divisor: 10.0, unit: "µA", normalization: 1.0 },
            RangeStep { divisor: 1.0, unit: "µA", normalization: 1.0 },
        ],
        Mode::Resistance => &[
            RangeStep { divisor: 10.0, unit: "Ω", normalization: 1.0 },
            RangeStep { divisor: 1000.0, unit: "KΩ", normalization: 1000.0 },
            RangeStep { divisor: 100.0, unit: "KΩ", normalization: 1000.0 },
            RangeStep { divisor: 10.0, unit: "KΩ", normalization: 1000.0 },
            RangeStep { divisor: 1000.0, unit: "MΩ", normalization: 1_000_000.0 },
            RangeStep { divisor: 100.0, unit: "MΩ", normalization: 1_000_000.0 },
        ],
        Mode::Frequency => &[
            RangeStep { divisor: 1000.0, unit: "kHz", normalization: 1000.0 },
            RangeStep { divisor: 100.0, unit: "kHz", normalization: 1000.0 },
            RangeStep { divisor: 10.0, unit: "kHz", normalization: 1000.0 },
            RangeStep { divisor: 1000.0, unit: "MHz", normalization: 1_000_000.0 },
            RangeStep { divisor: 100.0, unit: "MHz", normalization: 1_000_000.0 },
            RangeStep { divisor: 10.0, unit: "MHz", normalization: 1_000_000.0 },
        ],
        Mode::Rpm => &[
            RangeStep { divisor: 100.0, unit: "kRPM", normalization: 1000.0 },
            RangeStep { divisor: 10.0, unit: "kRPM", normalization: 1000.0 },
            RangeStep { divisor: 1000.0, unit: "MRPM", normalization: 1_000_000.0 },
            RangeStep { divisor: 100.0, unit: "MRPM", normalization: 1_000_000.0 },
            RangeStep { divisor: 10.0, unit: "MRPM", normalization: 1_000_000.0 },
            // the meter's top tachometer range is labeled MHz
            RangeStep { divisor: 1.0, unit: "MHz", normalization: 1_000_000.0 },
        ],
        Mode::Capacitance => &[
            RangeStep { divisor: 1000.0, unit: "nF", normalization: 1.0 },
            RangeStep { divisor: 100.0, unit: "nF", normalization: 1.0 },
            RangeStep { divisor: 10.0, unit: "nF", normalization: 1.0 },
            RangeStep { divisor: 1000.0, unit: "µF", normalization: 1000.0 },
            RangeStep { divisor: 100.0, unit: "µF", normalization: 1000.0 },
            RangeStep { divisor: 10.0, unit: "µF", normalization: 1000.0 },
            RangeStep { divisor: 1000.0, unit: "mF", normalization: 1_000_000.0 },
            RangeStep { divisor: 100.0, unit: "mF", normalization: 1_000_000.0 },
        ],
        Mode::Continuity => &[
            RangeStep { divisor: 10.0, unit: "Ω", normalization: 1.0 },
        ],
        Mode::Diode => &[
            RangeStep { divisor: 1.0, unit: "V", normalization: 1000.0 },
        ],
        Mode::TemperatureC => &[
            RangeStep { divisor: 1.0, unit: "°C", normalization: 1.0 },
        ],
        Mode::TemperatureF => &[
            RangeStep { divisor: 1.0, unit: "°F", normalization: 1.0 },
        ],
        Mode::Adp0 | Mode::Adp1 | Mode::Adp2 | Mode::Adp3 => &[],
    }
}
