use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding persisted index generations.
    pub index_path: PathBuf,
    /// Hard cap on matches collected per query; matches beyond it are
    /// neither ranked nor counted.
    pub hits_limit: usize,
    /// Maximum raw matches considered per autocomplete request.
    pub suggestion_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            index_path: PathBuf::from("./index"),
            hits_limit: 1000,
            suggestion_limit: 5,
        }
    }
}
