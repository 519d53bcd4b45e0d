pub mod events;
pub mod handler;
pub mod model;
pub mod observer;
pub mod service;
