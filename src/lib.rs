//! Library Catalog
//!
//! In-memory library catalog manager: book inventory, registered users,
//! loans with due dates, and case-insensitive prefix search over titles.

pub mod clock;
pub mod config;
pub mod error;
pub mod index;
pub mod models;
pub mod repository;
pub mod services;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorCode};
pub use services::Library;
