use plotters::style::RGBColor;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const SUNDIAL_BLUE: RGBColor = hexcolour!(0x4372C4);
const TWOPL_YELLOW: RGBColor = hexcolour!(0xFFC003);
const TIGON_BLACK: RGBColor = hexcolour!(0x000000);
const MOTOR_ORANGE: RGBColor = hexcolour!(0xED7D31);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    TriangleRight,
}

/// Parameters shared by every series on a panel, merged with the per-series
/// colour, marker and fill settings at draw time. Sizes are in pixels at the
/// figure's native scale.
#[derive(Clone, Copy, Debug)]
pub struct StylePreset {
    pub marker_size: i32,
    pub marker_stroke: u32,
    pub mark_every: usize,
    pub line_width: u32,
}

pub const DEFAULT_PRESET: StylePreset = StylePreset {
    marker_size: 7,
    marker_stroke: 2,
    mark_every: 1,
    line_width: 2,
};

#[derive(Clone, Copy)]
pub struct SeriesStyle {
    /// Column name in the results table.
    pub column: &'static str,
    /// Name shown in the legend.
    pub label: &'static str,
    pub colour: RGBColor,
    pub marker: Marker,
    pub filled: bool,
}

/// Fixed configuration for one panel: axis semantics plus the ordered series
/// list. List order is draw order and legend order.
#[derive(Clone, Copy)]
pub struct PanelSpec {
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub y_max: f64,
    pub series: &'static [SeriesStyle],
    pub preset: StylePreset,
}

/// Both panels clamp to the same y-range so magnitudes compare across panels.
pub const Y_MAX: f64 = 800_000.0;

const X_LABEL: &str = "Multi-partition Transaction Percentage (%)";
const Y_LABEL: &str = "Throughput (txns/sec)";

const NETWORK_SERIES: [SeriesStyle; 4] = [
    SeriesStyle {
        column: "Sundial-NET",
        label: "Sundial",
        colour: SUNDIAL_BLUE,
        marker: Marker::TriangleUp,
        filled: false,
    },
    SeriesStyle {
        column: "TwoPL-NET",
        label: "DS2PL",
        colour: TWOPL_YELLOW,
        marker: Marker::TriangleRight,
        filled: false,
    },
    SeriesStyle {
        column: "Tigon-NET",
        label: "Tigon",
        colour: TIGON_BLACK,
        marker: Marker::Square,
        filled: true,
    },
    SeriesStyle {
        column: "Motor",
        label: "Motor",
        colour: MOTOR_ORANGE,
        marker: Marker::Circle,
        filled: false,
    },
];

// Motor repeats here with the same style on purpose: it is the shared
// baseline both panels are compared against.
const CXL_SERIES: [SeriesStyle; 4] = [
    SeriesStyle {
        column: "Tigon",
        label: "Tigon",
        colour: TIGON_BLACK,
        marker: Marker::Square,
        filled: true,
    },
    SeriesStyle {
        column: "Sundial-CXL-improved",
        label: "Sundial+",
        colour: SUNDIAL_BLUE,
        marker: Marker::TriangleUp,
        filled: false,
    },
    SeriesStyle {
        column: "TwoPL-CXL-improved",
        label: "DS2PL+",
        colour: TWOPL_YELLOW,
        marker: Marker::TriangleRight,
        filled: false,
    },
    SeriesStyle {
        column: "Motor",
        label: "Motor",
        colour: MOTOR_ORANGE,
        marker: Marker::Circle,
        filled: false,
    },
];

pub const NETWORK_PANEL: PanelSpec = PanelSpec {
    title: "(a) Without CXL (Network-based)",
    x_label: X_LABEL,
    y_label: Y_LABEL,
    y_max: Y_MAX,
    series: &NETWORK_SERIES,
    preset: DEFAULT_PRESET,
};

pub const CXL_PANEL: PanelSpec = PanelSpec {
    title: "(b) With CXL Memory",
    x_label: X_LABEL,
    y_label: Y_LABEL,
    y_max: Y_MAX,
    series: &CXL_SERIES,
    preset: DEFAULT_PRESET,
};
