pub mod credit;
pub mod movie;
pub mod person;
pub mod staff;
