mod credential;
mod post;
mod session;

pub use credential::AdminCredential;
pub use post::{Post, PostInput};
pub use session::{Claims, LoginRequest, LoginResponse, Session};
