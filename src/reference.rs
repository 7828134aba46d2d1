//! Airport reference directory.
//!
//! The reference dataset is a plain delimited-text table, six fields per
//! record: IATA code, ICAO code, name, country, city, free-text notes. The
//! first line is a header; fields may be double-quoted to carry embedded
//! commas. The directory indexes records by ICAO code and serves the lookup
//! capability the station rule consumes.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::api::{AirportInfo, AirportLookup};

/// ICAO-keyed airport table.
#[derive(Debug, Clone, Default)]
pub struct AirportDirectory {
    by_icao: HashMap<String, AirportInfo>,
}

impl AirportDirectory {
    /// Parse the six-field delimited table. Blank lines, records with fewer
    /// than six fields, and records without an ICAO code are skipped; the
    /// first line is always treated as the header.
    pub fn parse(text: &str) -> Self {
        let mut by_icao = HashMap::new();

        for line in text.lines().skip(1) {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields = split_record(line);
            if fields.len() < 6 {
                continue;
            }
            if fields[1].is_empty() {
                continue;
            }

            let airport = AirportInfo {
                iata: fields[0].clone(),
                icao: fields[1].clone(),
                name: fields[2].clone(),
                country: fields[3].clone(),
                city: fields[4].clone(),
                notes: fields[5].clone(),
            };
            by_icao.insert(airport.icao.clone(), airport);
        }

        AirportDirectory { by_icao }
    }

    /// Read and parse a reference table from disk.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self::parse(&std::fs::read_to_string(path)?))
    }

    pub fn len(&self) -> usize {
        self.by_icao.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_icao.is_empty()
    }
}

impl AirportLookup for AirportDirectory {
    fn get(&self, icao: &str) -> Option<AirportInfo> {
        self.by_icao.get(icao).cloned()
    }

    fn has(&self, icao: &str) -> bool {
        self.by_icao.contains_key(icao)
    }
}

/// Split one record on commas, honoring double quotes. Quote characters
/// toggle quoting and are dropped; fields are trimmed.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
iata,icao,name,country,city,information
BOS,KBOS,\"General Edward Lawrence Logan International Airport\",United States,Boston,
LHR,EGLL,Heathrow Airport,United Kingdom,London,\"Busiest airport in Europe, by passengers\"

BAD,,No ICAO here,Nowhere,Nowhere,
SHORT,XXXX,too few fields
";

    #[test]
    fn parses_records_and_indexes_by_icao() {
        let directory = AirportDirectory::parse(TABLE);
        assert_eq!(directory.len(), 2);

        let boston = directory.get("KBOS").unwrap();
        assert_eq!(boston.name, "General Edward Lawrence Logan International Airport");
        assert_eq!(boston.city, "Boston");
        assert_eq!(boston.iata, "BOS");
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let directory = AirportDirectory::parse(TABLE);
        let heathrow = directory.get("EGLL").unwrap();
        assert_eq!(heathrow.notes, "Busiest airport in Europe, by passengers");
    }

    #[test]
    fn skips_blank_short_and_icao_less_records() {
        let directory = AirportDirectory::parse(TABLE);
        assert!(!directory.has(""));
        assert!(!directory.has("XXXX"));
    }

    #[test]
    fn lookup_misses_are_none() {
        let directory = AirportDirectory::parse(TABLE);
        assert!(directory.get("ZZZZ").is_none());
        assert!(!directory.has("ZZZZ"));
    }
}
