//! Input processing module
//! Handles file detection, text extraction, caching, and job record loading

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
pub mod jobs;
