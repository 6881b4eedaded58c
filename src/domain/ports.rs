use crate::utils::error::Result;

/// Raw access to input files.
pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    /// Input files in merge order.
    fn input_files(&self) -> &[String];
    /// Report redefinitions across files instead of merging blindly.
    fn check_redefinitions(&self) -> bool;
}
