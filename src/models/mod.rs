mod bonus;
mod email;
mod faq;
mod session;
mod social;
mod user;

pub use bonus::*;
pub use email::*;
pub use faq::*;
pub use session::*;
pub use social::*;
pub use user::*;
