mod error;
mod requests;
mod responses;
mod types;

pub use error::UserError;
pub use requests::{CreateUserRequest, UpdateUserRequest, UserChanges};
pub use responses::{MessageResponse, UserResponse, ValidationErrorResponse};
pub use types::User;
