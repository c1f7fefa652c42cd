pub mod appointment;
pub mod billing;
pub mod department;
pub mod doctor;
pub mod patient;
pub mod service;

pub use appointment::*;
pub use billing::*;
pub use department::*;
pub use doctor::*;
pub use patient::*;
pub use service::*;

use std::str::FromStr;

use crate::db::DatabaseError;

/// Parse a TEXT column into a str_enum type inside a rusqlite row closure,
/// surfacing failures as a column conversion error.
pub(crate) fn parse_enum<T>(idx: usize, value: &str) -> rusqlite::Result<T>
where
    T: FromStr<Err = DatabaseError>,
{
    T::from_str(value).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(e),
        )
    })
}
