// Library for tests to access modules

pub mod agent;
pub mod client;
pub mod collector;
pub mod config;
pub mod models;
pub mod relay;
pub mod routes;
pub mod sampler;
pub mod viewer;
pub mod wire;
