//! Types and routes shared between the tender board frontend and the backend API.

pub mod model;
pub mod requests;
