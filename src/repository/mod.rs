//! Repository layer: in-memory stores for catalog, users and loans

pub mod catalog;
pub mod loans;
pub mod users;

/// Main repository struct holding every store
#[derive(Debug, Default)]
pub struct Repository {
    pub catalog: catalog::CatalogRepository,
    pub users: users::UsersRepository,
    pub loans: loans::LoansRepository,
}

impl Repository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            catalog: catalog::CatalogRepository::new(),
            users: users::UsersRepository::new(),
            loans: loans::LoansRepository::new(),
        }
    }
}
