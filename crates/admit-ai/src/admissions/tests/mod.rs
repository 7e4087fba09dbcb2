mod common;
mod probability;
mod routing;
mod service;
