//! Contract assembly and deterministic page layout for pet-care service
//! agreements.
//!
//! The pipeline runs from mutable session state to placed pages:
//! [`ContractState`] holds field values and clause templates, [`interpolate`]
//! substitutes `${identifier}` placeholders, [`assemble_contract`] produces
//! the numbered contract text, and [`LayoutEngine::paginate`] lays that text
//! onto fixed-size pages through an abstract [`TextMeasurer`] capability.
//! Output backends (see `contract-press-pdf`) supply the measurer and draw
//! the placed lines.

#![cfg_attr(
    not(test),
    deny(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

mod assemble;
mod clauses;
mod fields;
mod layout;
mod state;
mod template;

pub use assemble::assemble_contract;
pub use clauses::ClauseList;
pub use fields::{FieldKey, FormFields};
pub use layout::{LayoutConfig, LayoutEngine, LayoutPage, PlacedLine, TextMeasurer};
pub use state::{standard_clauses, ContractState};
pub use template::{interpolate, parse_template, TemplateToken};
