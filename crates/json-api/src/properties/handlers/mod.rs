//! Property Handlers

pub(crate) mod index;
