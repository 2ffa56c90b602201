//! End-to-end parsing of fixture files

mod metadata;
mod sections;
