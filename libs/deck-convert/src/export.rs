//! CSV export of parsed records.

use crate::error::Result;
use crate::types::Record;
use std::io::Write;

/// Download name for exported decks.
pub const EXPORT_FILE_NAME: &str = "flashcards.csv";

/// MIME type of the exported file.
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

const HEADER: [&str; 2] = ["question", "answer"];

/// Write records as CSV with a `question,answer` header.
///
/// Rows end in CRLF. Fields containing a comma, quote or line break are
/// quoted. The header is written even when there are no records.
pub fn write_csv<W: Write>(writer: W, records: &[Record]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for record in records {
        csv_writer.write_record([record.question.as_str(), record.answer.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render records as a CSV string.
pub fn to_csv(records: &[Record]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    Ok(String::from_utf8(buffer)?)
}
