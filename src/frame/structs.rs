use serde::Serialize;
use std::fmt;

/// Measurement mode shown on the meter's display. Function codes 50 and 52
/// are shared between two modes each and split by the Judge bit.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Mode {
    Voltage,
    Resistance,
    Continuity,
    Diode,
    Capacitance,
    Frequency,
    Rpm,
    TemperatureC,
    TemperatureF,
    CurrentMicroA,
    CurrentMilliA,
    CurrentA,
    Adp0,
    Adp1,
    Adp2,
    Adp3,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Voltage => "Voltage",
            Mode::Resistance => "Resistance",
            Mode::Continuity => "Continuity",
            Mode::Diode => "Diode",
            Mode::Capacitance => "Capacitance",
            Mode::Frequency => "Frequency",
            Mode::Rpm => "RPM",
            Mode::TemperatureC => "Temperature (C)",
            Mode::TemperatureF => "Temperature (F)",
            Mode::CurrentMicroA => "Current µA",
            Mode::CurrentMilliA => "Current mA",
            Mode::CurrentA => "Current A",
            Mode::Adp0 => "ADP0",
            Mode::Adp1 => "ADP1",
            Mode::Adp2 => "ADP2",
            Mode::Adp3 => "ADP3",
        };
        f.write_str(name)
    }
}

/// Coupling reported in option byte 2. The meter sets at most one of the
/// two bits; modes without an AC/DC selector set neither.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AcDc {
    Ac,
    Dc,
}

impl fmt::Display for AcDc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcDc::Ac => f.write_str("AC"),
            AcDc::Dc => f.write_str("DC"),
        }
    }
}

/// One decoded display reading. Built once per frame and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    /// Measurement mode resolved from the function code and Judge bit
    pub mode: Mode,
    /// AC/DC coupling, for modes that report one
    pub acdc: Option<AcDc>,
    /// Signed reading as shown on the display, in `unit`
    pub value: f64,
    /// Display unit of the active range
    pub unit: &'static str,
    /// Reading rescaled to the mode's base unit
    pub normalized_value: f64,
    /// Base unit shared by every range of the mode
    pub normalized_unit: &'static str,
    /// Reading exceeds the selected range (display shows OL)
    pub over_limit: bool,
    /// Battery low indicator
    pub low_battery: bool,
    /// Frequency-of-signal display while measuring volts or amps
    pub vahz: bool,
    /// Relative (zero) mode active
    pub zero: bool,
    /// Minimum hold active
    pub min_hold: bool,
    /// Maximum hold active
    pub max_hold: bool,
    /// Auto power off armed
    pub auto_power_off: bool,
    /// Automatic range selection active
    pub auto_range: bool,
}

/// Column order of the text rendering below.
pub const DISPLAY_HEADER: &str = "mode, acdc, value, unit, normalized_value, normalized_unit, over_limit, low_battery, vahz, zero, min_hold, max_hold, auto_power_off, auto_range";

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let acdc = match self.acdc {
            Some(AcDc::Ac) => "AC",
            Some(AcDc::Dc) => "DC",
            None => "none",
        };
        write!(
            f,
            "{}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}",
            self.mode,
            acdc,
            self.value,
            self.unit,
            self.normalized_value,
            self.normalized_unit,
            self.over_limit,
            self.low_battery,
            self.vahz,
            self.zero,
            self.min_hold,
            self.max_hold,
            self.auto_power_off,
            self.auto_range
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Measurement {
        Measurement {
            mode: Mode::Voltage,
            acdc: None,
            value: 0.05,
            unit: "V",
            normalized_value: 50.0,
            normalized_unit: "mV",
            over_limit: false,
            low_battery: false,
            vahz: false,
            zero: false,
            min_hold: false,
            max_hold: false,
            auto_power_off: false,
            auto_range: false,
        }
    }

    #[test]
    fn test_measurement_display() {
        let m = sample();
        assert_eq!(
            m.to_string(),
            "Voltage, none, 0.05, V, 50, mV, false, false, false, false, false, false, false, false"
        );
    }

    #[test]
    fn test_display_matches_header() {
        let m = sample();
        let columns = DISPLAY_HEADER.split(", ").count();
        assert_eq!(m.to_string().split(", ").count(), columns);
    }

    #[test]
    fn test_measurement_json_labels() {
        let mut m = sample();
        m.acdc = Some(AcDc::Dc);
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(v["mode"], "Voltage");
        assert_eq!(v["acdc"], "DC");
        assert_eq!(v["unit"], "V");
        assert_eq!(v["normalized_unit"], "mV");
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::TemperatureC.to_string(), "Temperature (C)");
        assert_eq!(Mode::CurrentMicroA.to_string(), "Current µA");
        assert_eq!(Mode::Rpm.to_string(), "RPM");
        assert_eq!(Mode::Adp2.to_string(), "ADP2");
    }
}
