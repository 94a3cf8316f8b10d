//! Reference catalog of canonical street names keyed by postal code.
//!
//! The catalog is built once from plain records (file parsing happens
//! upstream), normalized and indexed at construction, and immutable
//! afterwards. It is shared read-only across matching operations, usually
//! behind an `Arc`.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{GatumatchError, Result};

/// One raw input record for catalog construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Postal code as written in the source data.
    pub postal_code: String,
    /// Canonical street name as written in the source data.
    pub street_name: String,
    /// Locality (town/city) the postal code belongs to.
    pub locality: String,
}

impl CatalogRecord {
    /// Create a new record.
    pub fn new<S: Into<String>>(postal_code: S, street_name: S, locality: S) -> Self {
        CatalogRecord {
            postal_code: postal_code.into(),
            street_name: street_name.into(),
            locality: locality.into(),
        }
    }
}

/// A validated, normalized catalog entry.
///
/// Street names are lowercase; postal codes are digit strings with leading
/// zeros preserved (never parsed as numbers).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    /// Postal code (digits only, leading zeros significant).
    pub postal_code: String,
    /// Street name, lowercase-normalized at load time.
    pub street_name: String,
    /// Locality the postal code belongs to.
    pub locality: String,
}

/// Load diagnostics for a constructed catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of valid entries.
    pub entry_count: usize,
    /// Number of distinct postal codes.
    pub postal_code_count: usize,
    /// Number of input records skipped as malformed.
    pub skipped_records: usize,
}

/// Immutable indexed table of canonical (postal code, street name) pairs.
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    /// Entry arena, in input order.
    entries: Vec<ReferenceEntry>,
    /// Postal code to entry positions, positions in input order.
    by_postal_code: AHashMap<String, Vec<usize>>,
    /// Input records dropped during construction.
    skipped_records: usize,
}

impl ReferenceCatalog {
    /// Build a catalog from raw records.
    ///
    /// Records with a blank street name, a blank postal code, or a postal
    /// code containing non-digit characters are skipped and counted in
    /// [`CatalogStats::skipped_records`]. Returns a catalog error when no
    /// valid record remains — matching must not run against an empty
    /// catalog.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let mut entries = Vec::new();
        let mut by_postal_code: AHashMap<String, Vec<usize>> = AHashMap::new();
        let mut skipped_records = 0;

        for record in records {
            let postal_code = record.postal_code.trim();
            let street_name = record.street_name.trim();

            if street_name.is_empty() || !is_digit_string(postal_code) {
                skipped_records += 1;
                continue;
            }

            let index = entries.len();
            by_postal_code
                .entry(postal_code.to_string())
                .or_default()
                .push(index);
            entries.push(ReferenceEntry {
                postal_code: postal_code.to_string(),
                street_name: street_name.to_lowercase(),
                locality: record.locality.trim().to_string(),
            });
        }

        if entries.is_empty() {
            return Err(GatumatchError::catalog(
                "reference data contained no valid records",
            ));
        }

        Ok(ReferenceCatalog {
            entries,
            by_postal_code,
            skipped_records,
        })
    }

    /// All entries sharing the given postal code, in input order.
    ///
    /// Returns an empty vector for postal codes absent from the catalog.
    pub fn entries_for(&self, postal_code: &str) -> Vec<&ReferenceEntry> {
        match self.by_postal_code.get(postal_code.trim()) {
            Some(indices) => indices.iter().map(|&i| &self.entries[i]).collect(),
            None => Vec::new(),
        }
    }

    /// Locality of the first entry with the given postal code, or
    /// `"Unknown"` when the code is absent.
    pub fn locality_for(&self, postal_code: &str) -> &str {
        self.by_postal_code
            .get(postal_code.trim())
            .and_then(|indices| indices.first())
            .map(|&i| self.entries[i].locality.as_str())
            .unwrap_or("Unknown")
    }

    /// Whether any entry exists for the given postal code.
    pub fn contains_postal_code(&self, postal_code: &str) -> bool {
        self.by_postal_code.contains_key(postal_code.trim())
    }

    /// All entries, in input order.
    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries. Always false for a constructed
    /// catalog; construction fails on empty input.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct postal codes.
    pub fn postal_code_count(&self) -> usize {
        self.by_postal_code.len()
    }

    /// Load diagnostics.
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            entry_count: self.entries.len(),
            postal_code_count: self.by_postal_code.len(),
            skipped_records: self.skipped_records,
        }
    }
}

fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<CatalogRecord> {
        vec![
            CatalogRecord::new("12345", "Storgatan", "Uppsala"),
            CatalogRecord::new("12345", "Kungsgatan", "Uppsala"),
            CatalogRecord::new("54321", "Storgatan", "Lund"),
        ]
    }

    #[test]
    fn test_catalog_basic_operations() {
        let catalog = ReferenceCatalog::from_records(sample_records()).unwrap();

        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.postal_code_count(), 2);

        let entries = catalog.entries_for("12345");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].street_name, "storgatan");
        assert_eq!(entries[1].street_name, "kungsgatan");

        assert!(catalog.entries_for("99999").is_empty());
        assert!(catalog.contains_postal_code("54321"));
        assert!(!catalog.contains_postal_code("99999"));
    }

    #[test]
    fn test_catalog_normalizes_street_names() {
        let catalog = ReferenceCatalog::from_records(vec![CatalogRecord::new(
            "11111",
            "  STORA Gatan  ",
            "Malmö",
        )])
        .unwrap();

        assert_eq!(catalog.entries()[0].street_name, "stora gatan");
        assert_eq!(catalog.entries()[0].locality, "Malmö");
    }

    #[test]
    fn test_catalog_skips_malformed_records() {
        let records = vec![
            CatalogRecord::new("12345", "Storgatan", "Uppsala"),
            CatalogRecord::new("", "Kungsgatan", "Uppsala"),
            CatalogRecord::new("12 45", "Kungsgatan", "Uppsala"),
            CatalogRecord::new("1234A", "Kungsgatan", "Uppsala"),
            CatalogRecord::new("54321", "   ", "Lund"),
        ];

        let catalog = ReferenceCatalog::from_records(records).unwrap();
        let stats = catalog.stats();

        assert_eq!(stats.entry_count, 1);
        assert_eq!(stats.postal_code_count, 1);
        assert_eq!(stats.skipped_records, 4);
    }

    #[test]
    fn test_catalog_rejects_empty_input() {
        let err = ReferenceCatalog::from_records(Vec::new()).unwrap_err();
        assert!(matches!(err, GatumatchError::Catalog(_)));

        let only_invalid = vec![CatalogRecord::new("", "", "")];
        let err = ReferenceCatalog::from_records(only_invalid).unwrap_err();
        assert!(matches!(err, GatumatchError::Catalog(_)));
    }

    #[test]
    fn test_locality_lookup() {
        let catalog = ReferenceCatalog::from_records(sample_records()).unwrap();

        assert_eq!(catalog.locality_for("12345"), "Uppsala");
        assert_eq!(catalog.locality_for("54321"), "Lund");
        assert_eq!(catalog.locality_for("99999"), "Unknown");
    }

    #[test]
    fn test_leading_zero_postal_codes_are_distinct() {
        let records = vec![
            CatalogRecord::new("01234", "Norra vägen", "Kalmar"),
            CatalogRecord::new("1234", "Södra vägen", "Göteborg"),
        ];
        let catalog = ReferenceCatalog::from_records(records).unwrap();

        assert_eq!(catalog.entries_for("01234").len(), 1);
        assert_eq!(catalog.entries_for("1234").len(), 1);
        assert_eq!(catalog.entries_for("01234")[0].street_name, "norra vägen");
        assert_eq!(catalog.locality_for("1234"), "Göteborg");
    }
}
