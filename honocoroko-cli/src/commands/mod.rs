pub mod convert;
pub mod table;
