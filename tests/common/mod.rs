use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 7] = ["total", "people", "tax", "tip", "service", "round_up", "currency"];

/// Writes `rows` bills of 10.00 each, split between a growing number of people.
pub fn generate_bills_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(HEADER)?;

    for i in 1..=rows {
        wtr.write_record([
            "10.00",
            &i.to_string(),
            "0",
            "0",
            "false",
            "false",
            "USD",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
