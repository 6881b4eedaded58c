pub mod cli;

#[cfg(feature = "cli")]
pub use self::args::{CliConfig, MergeMode};

#[cfg(feature = "cli")]
mod args {
    use crate::core::output::OutputFormat;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_min_count, validate_path, Validate};
    use clap::{Parser, ValueEnum};

    pub const MIN_FILES: usize = 2;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
    pub enum MergeMode {
        /// Merge every file, uniting tags of matching entries
        Merge,
        /// Like merge, but stop and report entries that redefine a term
        Check,
    }

    #[derive(Debug, Clone, Parser)]
    #[command(name = "csv-merger")]
    #[command(about = "Merge dictionary CSV files into one deduplicated list")]
    pub struct CliConfig {
        #[arg(value_enum)]
        pub mode: MergeMode,

        /// Files to merge, in order
        pub files: Vec<String>,

        #[arg(long, help = "Directory that relative file paths are resolved against")]
        pub base_dir: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit log lines as JSON")]
        pub log_json: bool,
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_min_count(
                self.files.len(),
                MIN_FILES,
                "Need at least 2 files to merge",
            )?;
            for file in &self.files {
                validate_path("files", file)?;
            }
            if let Some(base_dir) = &self.base_dir {
                validate_path("base_dir", base_dir)?;
            }
            Ok(())
        }
    }

    impl ConfigProvider for CliConfig {
        fn input_files(&self) -> &[String] {
            &self.files
        }

        fn check_redefinitions(&self) -> bool {
            self.mode == MergeMode::Check
        }
    }

}
