use std::fs;
use std::path::PathBuf;

use tpcc_plot::{export, figure, Error, ResultTable};

const RESULTS_CSV: &str = "\
Remote_Ratio,Tigon,Sundial-CXL-improved,TwoPL-CXL-improved,Motor,Sundial-NET,TwoPL-NET,Tigon-NET
0,700000,650000,600000,400000,300000,250000,350000
10,600000,550000,500000,350000,250000,200000,300000
20,500000,450000,400000,300000,200000,150000,250000
";

fn scratch_root(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("tpcc-plot-e2e-{}-{}", std::process::id(), name))
}

#[test]
fn csv_in_pdf_out() {
    let root = scratch_root("ok");
    let dir = root.join("tpcc");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("tpcc.csv"), RESULTS_CSV).unwrap();

    let table = ResultTable::from_csv(&dir.join("tpcc.csv")).unwrap();
    let document = figure::compose(&table).unwrap();
    export::export_pdf(&document, &dir.join("tpcc.pdf")).unwrap();

    let pdf = fs::read(dir.join("tpcc.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn load_failure_leaves_no_output() {
    let root = scratch_root("bad");
    let dir = root.join("tpcc");
    fs::create_dir_all(&dir).unwrap();
    // drop one required series column entirely
    let truncated = RESULTS_CSV.replace("Tigon-NET", "Tigon-Net");
    fs::write(dir.join("tpcc.csv"), truncated).unwrap();

    let err = ResultTable::from_csv(&dir.join("tpcc.csv")).err().unwrap();
    assert!(matches!(err, Error::MissingColumn("Tigon-NET")));
    assert!(!dir.join("tpcc.pdf").exists());

    let _ = fs::remove_dir_all(&root);
}
