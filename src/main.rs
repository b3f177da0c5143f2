use std::io::{self, Write};

use purchase_report::report::{run_report, ReportOptions};
use purchase_report::sample;

fn main() -> io::Result<()> {
    let dataset = sample::dataset();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_report(&dataset, &ReportOptions::default(), &mut out)?;
    out.flush()
}
