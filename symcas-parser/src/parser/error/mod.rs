pub mod kind;

pub use symcas_error::Error;
