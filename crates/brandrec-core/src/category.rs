//! Fixed category tables mapping form labels to feature codes.
//!
//! One table per categorical attribute. Entries are listed in code order and
//! codes run contiguously from 0. The tables are `const` data and cannot be
//! modified at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{BrandrecError, BrandrecResult};

/// The categorical attribute a table encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryField {
    OperatingSystem,
    Speaker,
    RefreshRate,
    PictureQuality,
}

impl CategoryField {
    pub const ALL: [CategoryField; 4] = [
        CategoryField::OperatingSystem,
        CategoryField::Speaker,
        CategoryField::RefreshRate,
        CategoryField::PictureQuality,
    ];

    /// Stable snake_case name, used in error messages and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryField::OperatingSystem => "operating_system",
            CategoryField::Speaker => "speaker",
            CategoryField::RefreshRate => "refresh_rate",
            CategoryField::PictureQuality => "picture_quality",
        }
    }

    /// The table that encodes this field.
    pub fn table(self) -> &'static CategoryTable {
        match self {
            CategoryField::OperatingSystem => &OPERATING_SYSTEM,
            CategoryField::Speaker => &SPEAKER,
            CategoryField::RefreshRate => &REFRESH_RATE,
            CategoryField::PictureQuality => &PICTURE_QUALITY,
        }
    }
}

impl fmt::Display for CategoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable label → code mapping for one categorical attribute.
#[derive(Debug)]
pub struct CategoryTable {
    field: CategoryField,
    entries: &'static [(&'static str, u32)],
}

impl CategoryTable {
    pub const fn new(field: CategoryField, entries: &'static [(&'static str, u32)]) -> Self {
        Self { field, entries }
    }

    pub fn field(&self) -> CategoryField {
        self.field
    }

    /// Resolve a label to its code.
    ///
    /// Matching is exact (case and whitespace sensitive). A miss is an
    /// `InvalidCategory` error naming this table's field.
    pub fn lookup(&self, value: &str) -> BrandrecResult<u32> {
        self.entries
            .iter()
            .find(|(label, _)| *label == value)
            .map(|&(_, code)| code)
            .ok_or_else(|| BrandrecError::InvalidCategory {
                field: self.field,
                value: value.to_string(),
            })
    }

    /// Labels in code order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(label, _)| label)
    }

    pub fn entries(&self) -> &'static [(&'static str, u32)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub const OPERATING_SYSTEM: CategoryTable = CategoryTable::new(
    CategoryField::OperatingSystem,
    &[
        ("Android", 0),
        ("FireTv OS 6", 1),
        ("Google TV", 2),
        ("WebOS", 3),
        ("Linux", 4),
        ("Tizen", 5),
    ],
);

pub const SPEAKER: CategoryTable = CategoryTable::new(
    CategoryField::Speaker,
    &[
        ("20 W Speaker Output", 0),
        ("40 W Speaker Output", 1),
        ("24 W Speaker Output", 2),
        ("30 W Speaker Output", 3),
        ("16 W Speaker Output", 4),
        ("50 W Speaker Output", 5),
        ("60 W Speaker Output", 6),
        ("100 W Speaker Output", 7),
    ],
);

pub const REFRESH_RATE: CategoryTable = CategoryTable::new(
    CategoryField::RefreshRate,
    &[
        ("60 Hz Refresh Rate", 0),
        ("50 Hz Refresh Rate", 1),
        ("120 Hz Refresh Rate", 2),
        ("100 Hz Refresh Rate", 3),
        ("200 Hz Refresh Rate", 4),
    ],
);

pub const PICTURE_QUALITY: CategoryTable = CategoryTable::new(
    CategoryField::PictureQuality,
    &[("HD Ready", 0), ("Ultra HD", 1), ("Full HD", 2)],
);

/// All four tables, in feature-vector order.
pub fn all_tables() -> [&'static CategoryTable; 4] {
    [&OPERATING_SYSTEM, &SPEAKER, &REFRESH_RATE, &PICTURE_QUALITY]
}
