// Map Module - Map view configuration and links
//
// This module handles the page's map settings and external map links

pub mod config;
pub mod links;

pub use config::MapConfig;
pub use links::search_link;
