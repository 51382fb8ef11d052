//! API handlers for the Authorcat REST endpoints

pub mod authors;
pub mod health;
pub mod openapi;
