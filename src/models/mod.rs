//! Data models for the library catalog

pub mod book;
pub mod loan;
pub mod user;

pub use book::{BookAvailability, CatalogEntry, Title};
pub use loan::{IssuedLoan, OverdueLoan};
pub use user::User;
