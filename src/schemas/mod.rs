pub mod study;

pub use study::{SearchRequest, SearchResponse, SearchStatistics, StudyRecord};
