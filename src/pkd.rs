//! PKD industry-classification reference data.
//!
//! Static, read-only at runtime. Codes follow the `NN.NN.X` subclass format;
//! descriptions are the English activity labels the keyword expander mines
//! for nouns.

use std::collections::HashMap;

const PKD_SUBCLASSES: &[(&str, &str)] = &[
    ("01.11.Z", "Growing of cereals, leguminous crops and oil seeds"),
    ("10.71.Z", "Manufacture of bread, fresh pastry goods and cakes"),
    ("25.62.Z", "Machining of metal elements"),
    ("33.12.Z", "Repair and maintenance of machinery"),
    ("41.20.Z", "Construction of residential and non-residential buildings"),
    ("42.11.A", "Construction of roads and motorways"),
    ("43.21.Z", "Electrical installation works in buildings"),
    ("46.51.Z", "Wholesale of computers, peripheral equipment and software"),
    ("47.91.Z", "Retail sale via mail order houses or via Internet"),
    ("49.41.Z", "Freight transport by road"),
    ("52.10.B", "Warehousing and storage of goods"),
    ("55.10.Z", "Hotels and similar accommodation"),
    ("56.10.A", "Restaurants and other permanent eating places"),
    ("58.29.Z", "Publishing of other software packages"),
    ("62.01.Z", "Activities connected with software development"),
    ("62.02.A", "Consultancy in the field of computer hardware and software"),
    ("62.03.Z", "Management of computer facilities and networks"),
    ("63.12.Z", "Operation of web portals"),
    ("64.19.Z", "Other monetary intermediation of banks"),
    ("68.20.Z", "Rental and operation of own or leased real estate"),
    ("69.20.Z", "Accounting, bookkeeping and tax consultancy services"),
    ("71.12.Z", "Engineering activities and related technical consultancy"),
    ("72.19.Z", "Research works on natural sciences and engineering"),
    ("73.11.Z", "Activities of advertising agencies"),
    ("85.59.A", "Instruction of foreign languages"),
    ("86.90.A", "Physiotherapy services for patients"),
];

/// Lookup table from PKD subclass code to its activity description.
pub struct PkdCatalog {
    descriptions: HashMap<&'static str, &'static str>,
}

impl PkdCatalog {
    pub fn new() -> Self {
        Self {
            descriptions: PKD_SUBCLASSES.iter().copied().collect(),
        }
    }

    /// Description for a code, or `None` for codes outside the vocabulary.
    pub fn describe(&self, code: &str) -> Option<&'static str> {
        self.descriptions.get(code).copied()
    }

    /// All known subclass codes, for synthetic entity generation.
    pub fn codes(&self) -> Vec<&'static str> {
        PKD_SUBCLASSES.iter().map(|(code, _)| *code).collect()
    }
}

impl Default for PkdCatalog {
    fn default() -> Self {
        Self::new()
    }
}
