use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder written into a table cell when a column has no value for
/// that row. Part of the output contract; downstream consumers match on
/// the literal string.
pub const ABSENT: &str = "<does not exist>";

/// The closed P&ID component taxonomy.
///
/// Variant declaration order is the output column order (`Drawing_Name`
/// first, then the 20 tag classes), and `Ord` follows declaration order,
/// so a `BTreeMap<Category, _>` iterates in column order. Classification
/// priority is a separate ordering and lives in the pattern table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    DrawingName,
    ControlValve,
    Equipment,
    FlowElement,
    FlowIndicator,
    FlowTransmitter,
    HighSwitch,
    Ipf,
    InjectionPoint,
    LevelGauge,
    LevelTransmitter,
    LineNumber,
    Orifice,
    Pid,
    PressureGauge,
    PressureTransmitter,
    Psv,
    SetPoint,
    TemperatureElement,
    TemperatureTransmitter,
    ThermalWeld,
}

impl Category {
    /// Every category, in column order.
    pub const ALL: [Category; 21] = [
        Category::DrawingName,
        Category::ControlValve,
        Category::Equipment,
        Category::FlowElement,
        Category::FlowIndicator,
        Category::FlowTransmitter,
        Category::HighSwitch,
        Category::Ipf,
        Category::InjectionPoint,
        Category::LevelGauge,
        Category::LevelTransmitter,
        Category::LineNumber,
        Category::Orifice,
        Category::Pid,
        Category::PressureGauge,
        Category::PressureTransmitter,
        Category::Psv,
        Category::SetPoint,
        Category::TemperatureElement,
        Category::TemperatureTransmitter,
        Category::ThermalWeld,
    ];

    /// The exact column label expected by downstream consumers.
    ///
    /// "Orfice #" keeps the spelling of the established sheet format.
    pub fn label(&self) -> &'static str {
        match self {
            Category::DrawingName => "Drawing_Name",
            Category::ControlValve => "CV #",
            Category::Equipment => "Equipment #",
            Category::FlowElement => "Flow Element #",
            Category::FlowIndicator => "Flow Indicator #",
            Category::FlowTransmitter => "Flow Transmitter #",
            Category::HighSwitch => "High Switch #",
            Category::Ipf => "IPF #",
            Category::InjectionPoint => "Injection Point #",
            Category::LevelGauge => "Level Gauge #",
            Category::LevelTransmitter => "Level Transmitter #",
            Category::LineNumber => "Line #",
            Category::Orifice => "Orfice #",
            Category::Pid => "PID #",
            Category::PressureGauge => "Pressure Gauge #",
            Category::PressureTransmitter => "Pressure Transmitter #",
            Category::Psv => "PSV #",
            Category::SetPoint => "SP #",
            Category::TemperatureElement => "Temperature Element #",
            Category::TemperatureTransmitter => "Temperature Transmitter #",
            Category::ThermalWeld => "Thermal Weld #",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
