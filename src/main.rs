use boca2testsys::filter::{strip_long_lines, DEFAULT_MAX_LINE_LEN};
use boca2testsys::import_boca::{import_str, ImportError};
use boca2testsys::testsys::TestsysWriter;
use boca2testsys::verdict::VerdictTable;
use log::info;
use std::fs::File;
use std::io;
use std::io::{BufReader, BufWriter};
use thiserror::Error;

const EXPORT_PATH: &str = "export.dat";
const CONTEST_PATH: &str = "contest.dat";

#[derive(Error, Debug)]
enum ConvertError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Import(#[from] ImportError),
}

fn run() -> Result<(), ConvertError> {
    let export = File::open(EXPORT_PATH)?;
    let filtered = strip_long_lines(BufReader::new(export), DEFAULT_MAX_LINE_LEN)?;
    info!("Filtered {}, {} bytes kept", EXPORT_PATH, filtered.len());

    let contest = import_str(&filtered, &VerdictTable::boca())?;
    info!(
        "Parsed contest \"{}\": {} problems, {} teams, {} submissions",
        contest.name,
        contest.problem_count(),
        contest.team_count(),
        contest.submission_count()
    );

    let output = File::create(CONTEST_PATH)?;
    TestsysWriter::new(BufWriter::new(output)).output(&contest)?;
    info!("Wrote {}", CONTEST_PATH);

    Ok(())
}

fn main() {
    std::env::set_var("RUST_LOG", "info");
    env_logger::init();

    if let Err(e) = run() {
        log::error!("Conversion failed: {}", e);
        std::process::exit(1);
    }
}
