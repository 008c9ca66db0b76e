pub mod country;
pub mod records;
pub mod seed;
pub mod store;
pub mod validate;

pub use records::*;
pub use store::{MockStore, StoreError};
pub use validate::{ItemForm, ValidationError};
