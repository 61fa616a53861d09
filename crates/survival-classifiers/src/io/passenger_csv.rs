//! Passenger CSV reader.
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data_handling::PassengerRow;
use crate::error::ClassifierError;

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .delimiter(b',')
        .has_headers(true)
        .trim(csv::Trim::All);
    builder
}

/// Read passenger rows from any CSV source with a header row.
///
/// Empty `Age` and `Fare` fields parse as missing; an unparsable row or a
/// repeated `PassengerId` aborts the read with the offending line number.
pub fn read_passengers<R: Read>(source: R) -> Result<Vec<PassengerRow>> {
    let mut reader = reader_builder().from_reader(source);
    let mut rows = Vec::new();
    let mut seen = BTreeSet::new();
    for (row_idx, result) in reader.deserialize::<PassengerRow>().enumerate() {
        let row = result.with_context(|| format!("Failed to parse passenger row {}", row_idx + 1))?;
        if !seen.insert(row.passenger_id) {
            return Err(ClassifierError::DuplicatePassengerId(row.passenger_id))
                .with_context(|| format!("Rejected passenger row {}", row_idx + 1));
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Read a passenger CSV file.
pub fn read_passengers_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PassengerRow>> {
    let file = std::fs::File::open(&path)
        .with_context(|| format!("Failed to open passenger file: {}", path.as_ref().display()))?;
    let rows = read_passengers(file)
        .with_context(|| format!("Failed to read passenger file: {}", path.as_ref().display()))?;
    log::debug!(
        "Read {} passengers from {}",
        rows.len(),
        path.as_ref().display()
    );
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked
1,0,3,\"Braund, Mr. Owen Harris\",male,22,1,0,A/5 21171,7.25,,S
2,1,1,\"Cumings, Mrs. John Bradley\",female,38,1,0,PC 17599,71.2833,C85,C
6,0,3,\"Moran, Mr. James\",male,,0,0,330877,8.4583,,Q
";

    #[test]
    fn test_read_passengers() {
        let rows = read_passengers(SAMPLE.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "Braund, Mr. Owen Harris");
        assert_eq!(rows[1].cabin, "C85");
        assert_eq!(rows[2].age, None);
        assert_eq!(rows[2].embarked, "Q");
        assert_eq!(rows[0].destination, "");
    }

    #[test]
    fn test_repeated_id_reports_line() {
        let repeated = "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
                        1,1,1,Anna,female,30,0,0,T,1.0,,S\n\
                        2,0,3,Bert,male,40,0,0,T,1.0,,S\n\
                        1,0,3,Carl,male,50,0,0,T,1.0,,S\n";
        let err = read_passengers(repeated.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("row 3"));
        assert_eq!(
            err.downcast_ref::<ClassifierError>(),
            Some(&ClassifierError::DuplicatePassengerId(1))
        );
    }

    #[test]
    fn test_malformed_row_reports_line() {
        let bad = "PassengerId,Survived,Pclass,Name,Sex,Age,SibSp,Parch,Ticket,Fare,Cabin,Embarked\n\
                   x,0,3,Nobody,male,22,0,0,T,1.0,,S\n";
        let err = read_passengers(bad.as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("row 1"));
    }
}
