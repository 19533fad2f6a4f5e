use plotters::prelude::*;

use log::debug;

use crate::data::ResultTable;
use crate::error::{Error, Result};
use crate::panel::render_panel;
use crate::style::{CXL_PANEL, NETWORK_PANEL};

/// Figure bounds in logical pixels, two panels side by side.
pub const FIGURE_SIZE: (u32, u32) = (1400, 450);

/// Renders both panels into one figure and returns it as an SVG document.
/// Pure with respect to the filesystem; export happens elsewhere.
pub fn compose(table: &ResultTable) -> Result<String> {
    debug!("composing {}x{} figure", FIGURE_SIZE.0, FIGURE_SIZE.1);
    let mut document = String::new();
    {
        let root = SVGBackend::with_string(&mut document, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(|e| Error::Draw(e.to_string()))?;

        let panels = root.split_evenly((1, 2));
        render_panel(&panels[0], &NETWORK_PANEL, table)?;
        render_panel(&panels[1], &CXL_PANEL, table)?;

        root.present().map_err(|e| Error::Draw(e.to_string()))?;
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{REQUIRED_COLUMNS, X_COLUMN};

    fn sample_table() -> ResultTable {
        let columns = REQUIRED_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, &name)| {
                if name == X_COLUMN {
                    (name.to_string(), vec![0.0, 10.0, 20.0])
                } else {
                    let base = 100_000.0 * i as f64;
                    (name.to_string(), vec![base, base + 5_000.0, base + 9_000.0])
                }
            })
            .collect::<Vec<_>>();
        ResultTable::from_columns(columns).unwrap()
    }

    #[test]
    fn composes_two_titled_panels() {
        let document = compose(&sample_table()).unwrap();
        assert!(document.contains("<svg"));
        assert!(document.contains("(a) Without CXL (Network-based)"));
        assert!(document.contains("(b) With CXL Memory"));
    }

    #[test]
    fn axis_is_clamped_regardless_of_magnitude() {
        // values far above the fixed range still produce the same top tick
        let columns = REQUIRED_COLUMNS
            .iter()
            .map(|&name| {
                if name == X_COLUMN {
                    (name.to_string(), vec![0.0, 50.0, 100.0])
                } else {
                    (name.to_string(), vec![5e6, 6e6, 7e6])
                }
            })
            .collect::<Vec<_>>();
        let table = ResultTable::from_columns(columns).unwrap();
        let document = compose(&table).unwrap();
        assert!(document.contains("800K"));
    }
}
