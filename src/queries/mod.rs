pub mod bonus_queries;
pub mod faq_queries;
pub mod session_queries;
pub mod social_queries;
pub mod user_queries;
pub mod verification_queries;
