//! # Store Format Parser
//!
//! Splits the store file into records on the marker and joins them back.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::Record;
use crate::constants::SENTINEL;

/// The parsed contents of a store file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Text before the first marker. Empty for files written by this tool.
    pub preamble: String,

    /// Records in file order.
    pub records: Vec<Record>,
}

impl Collection {
    /// Drops every record matching `predicate`, keeping the rest in order.
    ///
    /// The preamble is never a candidate. Returns the removed records.
    pub fn remove_where<F>(&mut self, predicate: F) -> Vec<Record>
    where
        F: Fn(&Record) -> bool,
    {
        let (removed, kept) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|record| predicate(record));
        self.records = kept;
        removed
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.title.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parses store content.
///
/// Never fails: any text is a valid store, and `serialize(&parse(s)) == s`.
pub fn parse(content: &str) -> Collection {
    let mut chunks = content.split(SENTINEL);

    let preamble = chunks.next().unwrap_or_default().to_string();
    let records = chunks.map(Record::from_chunk).collect();

    Collection { preamble, records }
}

/// Serializes a collection back to store content.
pub fn serialize(collection: &Collection) -> String {
    let mut result = collection.preamble.clone();

    for record in &collection.records {
        result.push_str(SENTINEL);
        result.push_str(&record.to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE: &str = "__TITLE__Elegy\nfirst<br>poem__TITLE__Ode\nsecond__TITLE__elegy\nthird";

    #[test]
    fn test_parse_records() {
        let collection = parse(STORE);

        assert!(collection.preamble.is_empty());
        assert_eq!(collection.titles().collect::<Vec<_>>(), ["Elegy", "Ode", "elegy"]);
        assert_eq!(collection.records[0].body(), "first<br>poem");
    }

    #[test]
    fn test_parse_empty() {
        let collection = parse("");
        assert!(collection.preamble.is_empty());
        assert!(collection.is_empty());
        assert_eq!(serialize(&collection), "");
    }

    #[test]
    fn test_serialize_reproduces_input() {
        for content in [
            STORE,
            "stray text__TITLE__A\nb",
            "__TITLE__NoBody",
            "__TITLE____TITLE__",
            "__TITLE__A\nb\n",
        ] {
            assert_eq!(serialize(&parse(content)), content);
        }
    }

    #[test]
    fn test_remove_where_keeps_order() {
        let mut collection = parse(STORE);

        let removed = collection.remove_where(|r| r.title_matches("ELEGY"));

        assert_eq!(removed.len(), 2);
        assert_eq!(collection.titles().collect::<Vec<_>>(), ["Ode"]);
        assert_eq!(serialize(&collection), "__TITLE__Ode\nsecond");
    }

    #[test]
    fn test_remove_where_never_drops_preamble() {
        let mut collection = parse("__TITLE__A\nbody");

        let removed = collection.remove_where(|r| r.title_matches(""));

        assert!(removed.is_empty());
        assert_eq!(serialize(&collection), "__TITLE__A\nbody");
    }

    #[test]
    fn test_remove_where_no_match() {
        let mut collection = parse(STORE);
        assert!(collection.remove_where(|r| r.title_matches("sonnet")).is_empty());
        assert_eq!(serialize(&collection), STORE);
    }
}
