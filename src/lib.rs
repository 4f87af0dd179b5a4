//! Rule-based parsing of workout-tracker screenshots.
//!
//! OCR text goes in, a [`ParsedResult`] comes out: the summary metrics, every
//! exercise with its sets, and a bounded confidence with warnings describing
//! what could not be read. Text in the normalized `[SUMMARY]` format (see
//! [`to_normalized_text`]) is decoded directly.

#[macro_use]
mod macros;
mod api;
mod codec;
mod engine;
mod error;
mod model;
mod registry;
mod rules;

pub use api::{
    Options, ParseDetails, ParseResultVerbose, default_registry, normalize_ocr_text, parse, parse_verbose_with,
    parse_with, parse_with_registry,
};
pub use codec::{NormalizeOcrResult, detect_split, parse_normalized, to_normalized_text};
pub use engine::{BlockTrace, InputFormat, LineTrace};
pub use error::RegistryError;
pub use model::{Meta, ParsedExercise, ParsedResult, ParsedSet, Summary, SummaryField, Warning};
pub use registry::{AliasEntry, AliasOverride, AliasRegistry, apply_alias_overrides, normalize_name_key};
pub use rules::header::HeaderSource;
pub use rules::sets::BlockMode;
