pub mod merge;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Entry, TagSet};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
