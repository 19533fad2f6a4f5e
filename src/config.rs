use std::path::{Path, PathBuf};

use clap::{App, Arg};
use log::Level;

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run configuration resolved from the commandline. Wrong argument counts are
/// handled by clap: usage on stderr and a non-zero exit, before any file I/O.
pub struct Config {
    root: PathBuf,
    logging: Level,
}

fn app() -> App<'static, 'static> {
    App::new(NAME)
        .version(VERSION)
        .about("Plots TPC-C throughput comparison figures from benchmark results")
        .arg(
            Arg::with_name("RESULT_ROOT_DIR")
                .help("Directory holding the benchmark results")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Increase verbosity by one level. Can be used more than once")
                .multiple(true),
        )
}

impl Config {
    pub fn new() -> Config {
        let matches = app().get_matches();

        let root = PathBuf::from(matches.value_of("RESULT_ROOT_DIR").unwrap_or("."));
        let logging = match matches.occurrences_of("verbose") {
            0 => Level::Info,
            1 => Level::Debug,
            _ => Level::Trace,
        };

        Config { root, logging }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn csv_path(&self) -> PathBuf {
        self.root.join("tpcc").join("tpcc.csv")
    }

    pub fn pdf_path(&self) -> PathBuf {
        self.root.join("tpcc").join("tpcc.pdf")
    }

    pub fn logging(&self) -> Level {
        self.logging
    }
}
