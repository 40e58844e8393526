mod config;
mod digest;
mod input;
