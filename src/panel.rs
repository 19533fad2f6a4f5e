use plotters::coord::Shift;
use plotters::element::{
    ComposedElement, DashedPathElement, Drawable, DynElement, IntoDynElement, PointCollection,
};
use plotters_backend::DrawingErrorKind;
use plotters::prelude::*;
use plotters::style::FontStyle;

use log::debug;

use crate::data::ResultTable;
use crate::error::{Error, Result};
use crate::style::{Marker, PanelSpec, SeriesStyle, StylePreset};

const TITLE_FONT: (&str, u32) = ("sans-serif", 22);
const AXIS_FONT: (&str, u32) = ("sans-serif", 16);
const TICK_FONT: (&str, u32) = ("sans-serif", 14);
const LEGEND_FONT: (&str, u32) = ("sans-serif", 15);

/// Gridline spacing on the clamped throughput axis.
const GRID_STEP: f64 = 100_000.0;

/// Tick labels in thousands: 250000 -> "250K". Zero stays a bare "0".
pub fn format_kilo(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}K", (value / 1000.0).round() as i64)
    }
}

/// Draws one panel into `area`: clamped axes, dashed horizontal gridlines,
/// one connected-marker line per configured series, and a framed legend in
/// configuration order.
pub fn render_panel(
    area: &DrawingArea<SVGBackend, Shift>,
    spec: &PanelSpec,
    table: &ResultTable,
) -> Result<()> {
    debug!("rendering panel {:?}", spec.title);

    let x = table.x();
    let (x_min, x_max) = if x.is_empty() {
        (0.0, 1.0)
    } else {
        x.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
    };
    let pad = ((x_max - x_min) * 0.05).max(0.5);

    let mut chart = ChartBuilder::on(area)
        .caption(spec.title, TITLE_FONT.into_font().style(FontStyle::Bold))
        .margin(12)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d((x_min - pad)..(x_max + pad), 0.0..spec.y_max)
        .map_err(|e| Error::Draw(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(spec.x_label)
        .y_desc(spec.y_label)
        .axis_desc_style(AXIS_FONT)
        .label_style(TICK_FONT)
        .y_labels(9)
        .y_label_formatter(&|v| format_kilo(*v))
        .draw()
        .map_err(|e| Error::Draw(e.to_string()))?;

    // Horizontal-only gridlines; plotters mesh lines cannot be dashed, so
    // they are drawn by hand at every labelled tick.
    let mut tick = GRID_STEP;
    while tick < spec.y_max + GRID_STEP / 2.0 {
        chart
            .draw_series(std::iter::once(DashedPathElement::new(
                vec![(x_min - pad, tick), (x_max + pad, tick)],
                6,
                4,
                BLACK.mix(0.3).stroke_width(1),
            )))
            .map_err(|e| Error::Draw(e.to_string()))?;
        tick += GRID_STEP;
    }

    for &style in spec.series {
        let ys = table.series(style.column)?;
        let points: Vec<(f64, f64)> = x.iter().copied().zip(ys.iter().copied()).collect();
        let preset = spec.preset;

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                style.colour.stroke_width(preset.line_width),
            ))
            .map_err(|e| Error::Draw(e.to_string()))?
            .label(style.label)
            .legend(move |coord| legend_element(&style, &preset, coord));

        for coord in points.iter().copied().step_by(preset.mark_every) {
            chart
                .plotting_area()
                .draw(&marker_element(&style, &preset, coord))
                .map_err(|e| Error::Draw(e.to_string()))?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.filled())
        .border_style(BLACK.stroke_width(1))
        .label_font(LEGEND_FONT)
        .draw()
        .map_err(|e| Error::Draw(e.to_string()))?;

    Ok(())
}

fn marker_element<'a, DB: DrawingBackend + 'a>(
    style: &'a SeriesStyle,
    preset: &'a StylePreset,
    coord: (f64, f64),
) -> DynElement<'a, DB, (f64, f64)> {
    let s = preset.marker_size;
    let shape = if style.filled {
        style.colour.filled()
    } else {
        style.colour.stroke_width(preset.marker_stroke)
    };
    match style.marker {
        Marker::Circle => Circle::new(coord, s, shape).into_dyn(),
        Marker::Square => {
            (EmptyElement::at(coord) + Rectangle::new([(-s, -s), (s, s)], shape)).into_dyn()
        }
        Marker::TriangleUp => TriangleMarker::new(coord, s, shape).into_dyn(),
        Marker::TriangleRight => {
            let outline = vec![(-s, -s), (s, 0), (-s, s), (-s, -s)];
            if style.filled {
                (EmptyElement::at(coord) + Polygon::new(outline, shape)).into_dyn()
            } else {
                (EmptyElement::at(coord) + PathElement::new(outline, shape)).into_dyn()
            }
        }
    }
}

/// A legend glyph composed of a line segment plus one marker shape. The
/// `.legend()` API cannot accept `DynElement` with a non-`'static` backend
/// (its `IntoDynElement` blanket impl requires `'static` through an HRTB),
/// so the marker variants are dispatched through this concrete enum instead.
enum LegendGlyph<DB: DrawingBackend> {
    Circle(ComposedElement<(i32, i32), DB, PathElement<(i32, i32)>, Circle<(i32, i32), i32>>),
    Square(ComposedElement<(i32, i32), DB, PathElement<(i32, i32)>, Rectangle<(i32, i32)>>),
    TriangleUp(
        ComposedElement<(i32, i32), DB, PathElement<(i32, i32)>, TriangleMarker<(i32, i32), i32>>,
    ),
    FilledTriangleRight(
        ComposedElement<(i32, i32), DB, PathElement<(i32, i32)>, Polygon<(i32, i32)>>,
    ),
    OutlineTriangleRight(
        ComposedElement<(i32, i32), DB, PathElement<(i32, i32)>, PathElement<(i32, i32)>>,
    ),
}

impl<'a, DB: DrawingBackend> PointCollection<'a, (i32, i32)> for &'a LegendGlyph<DB> {
    type Point = &'a (i32, i32);
    type IntoIter = std::iter::Once<&'a (i32, i32)>;
    fn point_iter(self) -> Self::IntoIter {
        match self {
            LegendGlyph::Circle(e) => e.point_iter(),
            LegendGlyph::Square(e) => e.point_iter(),
            LegendGlyph::TriangleUp(e) => e.point_iter(),
            LegendGlyph::FilledTriangleRight(e) => e.point_iter(),
            LegendGlyph::OutlineTriangleRight(e) => e.point_iter(),
        }
    }
}

impl<DB: DrawingBackend> Drawable<DB> for LegendGlyph<DB> {
    fn draw<I: Iterator<Item = (i32, i32)>>(
        &self,
        pos: I,
        backend: &mut DB,
        parent_dim: (u32, u32),
    ) -> std::result::Result<(), DrawingErrorKind<DB::ErrorType>> {
        match self {
            LegendGlyph::Circle(e) => e.draw(pos, backend, parent_dim),
            LegendGlyph::Square(e) => e.draw(pos, backend, parent_dim),
            LegendGlyph::TriangleUp(e) => e.draw(pos, backend, parent_dim),
            LegendGlyph::FilledTriangleRight(e) => e.draw(pos, backend, parent_dim),
            LegendGlyph::OutlineTriangleRight(e) => e.draw(pos, backend, parent_dim),
        }
    }
}

/// Legend glyph: a line segment with the series' marker on it, so legend
/// entries identify series the same way the plotted lines do.
fn legend_element<DB: DrawingBackend>(
    style: &SeriesStyle,
    preset: &StylePreset,
    (x, y): (i32, i32),
) -> LegendGlyph<DB> {
    let s = preset.marker_size;
    let shape = if style.filled {
        style.colour.filled()
    } else {
        style.colour.stroke_width(preset.marker_stroke)
    };
    let base = EmptyElement::at((x, y))
        + PathElement::new(
            vec![(0, 0), (20, 0)],
            style.colour.stroke_width(preset.line_width),
        );
    match style.marker {
        Marker::Circle => LegendGlyph::Circle(base + Circle::new((10, 0), s, shape)),
        Marker::Square => {
            LegendGlyph::Square(base + Rectangle::new([(10 - s, -s), (10 + s, s)], shape))
        }
        Marker::TriangleUp => {
            LegendGlyph::TriangleUp(base + TriangleMarker::new((10, 0), s, shape))
        }
        Marker::TriangleRight => {
            let outline = vec![(10 - s, -s), (10 + s, 0), (10 - s, s), (10 - s, -s)];
            if style.filled {
                LegendGlyph::FilledTriangleRight(base + Polygon::new(outline, shape))
            } else {
                LegendGlyph::OutlineTriangleRight(base + PathElement::new(outline, shape))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::NETWORK_PANEL;

    fn sample_table() -> ResultTable {
        let columns = crate::data::REQUIRED_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, &name)| {
                if name == crate::data::X_COLUMN {
                    (name.to_string(), vec![0.0, 10.0, 20.0])
                } else {
                    let base = 50_000.0 * i as f64;
                    (name.to_string(), vec![base, base + 1_000.0, base + 2_000.0])
                }
            })
            .collect::<Vec<_>>();
        ResultTable::from_columns(columns).unwrap()
    }

    fn render_to_string(spec: &PanelSpec, table: &ResultTable) -> Result<String> {
        let mut document = String::new();
        {
            let root = SVGBackend::with_string(&mut document, (700, 450)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            render_panel(&root, spec, table)?;
            root.present().unwrap();
        }
        Ok(document)
    }

    #[test]
    fn formats_thousands_with_suffix() {
        assert_eq!(format_kilo(0.0), "0");
        assert_eq!(format_kilo(250_000.0), "250K");
        assert_eq!(format_kilo(800_000.0), "800K");
        assert_eq!(format_kilo(799_999.0), "800K");
    }

    #[test]
    fn renders_panel_with_title_and_clamped_axis() {
        let document = render_to_string(&NETWORK_PANEL, &sample_table()).unwrap();
        assert!(document.contains("(a) Without CXL (Network-based)"));
        // the top tick exists even though the data peaks well below it
        assert!(document.contains("800K"));
        assert!(document.contains("Sundial"));
        assert!(document.contains("Motor"));
    }

    #[test]
    fn legend_entries_carry_series_markers() {
        let document = render_to_string(&NETWORK_PANEL, &sample_table()).unwrap();
        // Motor is the only circle-marker series: one circle per data point
        // plus one on the legend glyph
        let data_points = sample_table().rows();
        assert_eq!(document.matches("<circle").count(), data_points + 1);
    }

    #[test]
    fn configured_series_missing_from_table_is_render_error() {
        let columns = vec![
            (crate::data::X_COLUMN.to_string(), vec![0.0, 10.0]),
            ("Motor".to_string(), vec![1.0, 2.0]),
        ];
        let table = ResultTable::from_columns(columns).unwrap();
        let err = render_to_string(&NETWORK_PANEL, &table).err().unwrap();
        assert!(matches!(err, Error::MissingSeries(_)));
    }
}
