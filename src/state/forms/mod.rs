//! Form domain layer
//!
//! Type-safe field values and the per-view forms built from them.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{
    Form, GeneratorForm, NfrForm, PageAction, SearchForm, SummarizerForm, TemplatePreset,
};

#[cfg(test)]
pub use form_state::DEFAULT_RECORD_COUNT;
