use crate::domain::application::ApplicationForm;
use crate::error::{LoanError, Result};
use std::io::Read;

/// Reads application forms from a CSV source with the header
/// `full_name,email,pan,loan_amount`.
///
/// Whitespace around fields is trimmed and short records are tolerated;
/// rows that cannot be deserialized come back as errors without stopping
/// the stream.
pub struct ApplicationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ApplicationReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn applications(self) -> impl Iterator<Item = Result<ApplicationForm>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(LoanError::from))
    }
}
