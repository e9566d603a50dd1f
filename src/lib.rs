// src/lib.rs

//! MEN Announcement Monitor Library

pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
