// src/csv.rs
//
// The flat-file sink: fixed header `Title,Company,Location,Link,Source`,
// one row per offer, standard quoting.

use std::io::{Read, Write};

use crate::config::consts::COLUMN_NAMES;
use crate::error::ExportError;
use crate::offer::JobOffer;

/* ---------------- Writing ---------------- */

/// Header first, then every offer in sequence order.
/// An empty slice still produces the header line.
pub fn write_offers<W: Write>(w: W, offers: &[JobOffer]) -> Result<(), ExportError> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(w);

    writer.write_record(COLUMN_NAMES)?;
    for offer in offers {
        writer.serialize(offer)?;
    }
    writer.flush().map_err(::csv::Error::from)?;
    Ok(())
}

/// Clipboard path: the same bytes `write_offers` would put on disk.
pub fn to_csv_string(offers: &[JobOffer]) -> Result<String, ExportError> {
    let mut buf: Vec<u8> = Vec::new();
    write_offers(&mut buf, offers)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/* ---------------- Parsing ---------------- */

/// Inverse of `write_offers`. The header row is required.
pub fn read_offers<R: Read>(r: R) -> Result<Vec<JobOffer>, ExportError> {
    let mut reader = ::csv::Reader::from_reader(r);
    let offers = reader
        .deserialize()
        .collect::<Result<Vec<JobOffer>, _>>()?;
    Ok(offers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offer::Source;
    use url::Url;

    #[test]
    fn empty_input_writes_header_only() {
        let s = to_csv_string(&[]).unwrap();
        assert_eq!(s, "Title,Company,Location,Link,Source\n");
    }

    #[test]
    fn commas_and_quotes_are_quoted() {
        let offer = JobOffer::new(
            r#"Junior "Java" Dev"#,
            "Acme, Inc.",
            "Warszawa",
            Url::parse("https://nofluffjobs.com/pl/job/acme").unwrap(),
            Source::NoFluffJobs,
        );
        let s = to_csv_string(&[offer]).unwrap();
        let line = s.lines().nth(1).unwrap();
        assert_eq!(
            line,
            r#""Junior ""Java"" Dev","Acme, Inc.",Warszawa,https://nofluffjobs.com/pl/job/acme,nofluffjobs.com"#
        );
    }
}
