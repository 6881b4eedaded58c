pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::{CliConfig, MergeMode};

pub use crate::core::{
    merge::Corpus,
    output::{render, OutputFormat},
    pipeline::{MergeOutcome, MergePipeline},
    report::{Conflict, ConflictReport},
};
pub use domain::model::{Entry, TagSet};
pub use utils::error::{MergeError, Result};
