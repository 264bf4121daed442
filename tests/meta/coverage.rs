//! Keeps `tests/unit` in step with the `src` module tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files carry no tests of their own
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn relative_paths(root: &str) -> BTreeSet<String> {
        let base = Path::new(root);
        let mut paths = BTreeSet::new();
        if let Err(error) = collect(base, base, &mut paths) {
            assert!(!base.exists(), "Failed to read {root}: {error}");
        }
        paths
    }

    fn collect(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Ok(relative) = path.strip_prefix(base) else {
                return Err(io::Error::other("Failed to strip prefix"));
            };
            let relative = relative.to_string_lossy().replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                collect(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }

        Ok(())
    }

    // Tests every source module has a unit test file at the same path
    // Verified by adding an untested module under src/
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let unit_paths = relative_paths(UNIT_DIR);

        let missing: Vec<String> = relative_paths(SRC_DIR)
            .into_iter()
            .filter(|path| !is_organizational(path) && !unit_paths.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives the module it covers
    // Verified by renaming a source module
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = relative_paths(SRC_DIR);

        let orphaned: Vec<String> = relative_paths(UNIT_DIR)
            .into_iter()
            .filter(|path| !is_organizational(path) && !src_paths.contains(path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every test file outside the organizational ones declares a test
    // Verified by emptying a unit test module
    #[test]
    fn test_all_test_files_contain_tests() {
        let without_tests: Vec<String> = relative_paths("tests")
            .into_iter()
            .filter(|path| {
                Path::new(path).extension().and_then(|ext| ext.to_str()) == Some("rs")
            })
            .filter(|path| !path.ends_with("main.rs") && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }
}
