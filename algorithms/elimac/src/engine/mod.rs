//! Execution Engine
//!
//! CPU dispatch and the sequential/parallel accumulation core.

pub mod dispatcher;
pub(crate) mod elihash;

pub use dispatcher::active_backend_name;
