use std::path::PathBuf;

/// Fresh scratch directory for one test
#[must_use]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("clinical_synth_tests")
        .join(format!("{}_{name}", std::process::id()));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).expect("Failed to clear scratch directory");
    }
    std::fs::create_dir_all(&dir).expect("Failed to create scratch directory");
    dir
}
