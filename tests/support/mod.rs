#![allow(dead_code)]

pub mod chain;
pub mod config;
