pub mod decoder;
pub mod dispatch;
pub mod fallback;
pub mod pipeline;
pub mod problem;
pub mod request;
pub mod solution;
pub mod variable;
