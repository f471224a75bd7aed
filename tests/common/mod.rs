use std::fs;
use tempfile::TempDir;

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
#[allow(dead_code)]
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// A manifest selecting the given include patterns with PreserveNewest.
#[allow(dead_code)]
pub fn manifest_with(patterns: &[&str]) -> String {
    let mut items = String::new();
    for p in patterns {
        items.push_str(&format!(
            "    <File Include=\"{p}\">\n      <CopyToOutput>PreserveNewest</CopyToOutput>\n    </File>\n"
        ));
    }
    format!("<Deploy>\n  <ItemGroup>\n{items}  </ItemGroup>\n</Deploy>\n")
}
