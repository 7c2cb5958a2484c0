use std::path::PathBuf;

#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
}
