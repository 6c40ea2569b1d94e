use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_applications_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["full_name", "email", "pan", "loan_amount"])?;

    for i in 1..=rows {
        wtr.write_record([
            "Priya Sharma",
            &format!("priya{i}@example.com"),
            "ABCDE1234F",
            &(i * 100_000).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_session(path: &Path, json: &str) -> Result<(), Error> {
    std::fs::write(path, json)
}

pub const SESSION_JSON: &str = r#"{
  "full_name": "Priya Sharma",
  "email": "priya@example.com",
  "pan": "ABCDE1234F",
  "loan_amount": "500000"
}"#;
