//! Locale data for number rendering.

mod builtin;

pub use builtin::NumeralLocale;
