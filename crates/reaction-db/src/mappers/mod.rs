//! Record <-> model mappers

mod reaction;
