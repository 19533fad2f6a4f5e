use log::{error, info};

use tpcc_plot::config::{Config, NAME, VERSION};
use tpcc_plot::logger::Logger;
use tpcc_plot::{export, figure, ResultTable};

fn main() {
    let config = Config::new();

    Logger::new()
        .label(NAME)
        .level(config.logging())
        .init()
        .expect("Failed to initialize logger");

    info!("{} {} initializing...", NAME, VERSION);
    info!("results root: {}", config.root().display());

    if let Err(e) = run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> tpcc_plot::Result<()> {
    let table = ResultTable::from_csv(&config.csv_path())?;
    let document = figure::compose(&table)?;
    export::export_pdf(&document, &config.pdf_path())
}
