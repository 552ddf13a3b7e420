pub mod error;
pub mod model;

pub use error::UserDirectoryError;
pub use model::{Dob, Location, Name, Picture, Postcode, Street, User, UsersEnvelope};
