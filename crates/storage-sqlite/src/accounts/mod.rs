//! Account storage: database model and repository.

mod model;
mod repository;

pub use model::AccountDB;
pub use repository::AccountRepository;
