pub mod committees;
pub mod common;
pub mod cosponsors;
pub mod overview;
pub mod person;
pub mod related_bills;
pub mod subjects;
pub mod text;
pub mod titles;
