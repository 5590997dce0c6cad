//! Third-party trait implementations.

mod de;
mod ser;
