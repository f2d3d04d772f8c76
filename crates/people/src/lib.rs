//! People domain module (persons and students).
//!
//! Entities here are create-once and read-only. The accessor procedures in
//! [`print`] accept any entity with the matching capability.

pub mod person;
pub mod print;
pub mod student;

pub use person::Person;
pub use print::{print_id, print_name, write_id, write_name};
pub use student::Student;
