mod common;
mod config;
mod supplier;
