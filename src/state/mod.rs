//! Client-side state: the stored session, the resource cache, transient
//! notices, and the service bundle pages pull from context.

pub mod notices;
pub mod resource;
pub mod services;
pub mod session;
