pub mod convert;
pub mod share;
