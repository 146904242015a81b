#[macro_use]
extern crate lazy_static;

mod entries;
mod grapheme;
mod table;

pub use normalization_tests::NormalizationTest;
pub use normalization_tests::NORMALIZATION_TESTS;

pub use table::ReferenceTable;
pub use table::TABLE;
