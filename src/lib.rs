pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod icon;
pub mod layout;
pub mod model;
pub mod semantics;
pub mod strings;
pub mod style;
pub mod view;
