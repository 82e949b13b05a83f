//! Checks that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files don't need their own unit tests
    fn is_organizational(relative_path: &str) -> bool {
        relative_path == "main.rs" || relative_path == "lib.rs" || relative_path.ends_with("mod.rs")
    }

    fn mirrored_paths() -> (HashSet<String>, HashSet<String>) {
        let src_dir = Path::new(SRC_DIR);
        let unit_dir = Path::new(UNIT_DIR);

        let src_paths = collect_relative_paths(src_dir, src_dir).unwrap_or_else(|error| {
            assert!(src_dir.exists(), "Failed to read src directory: {error}");
            HashSet::new()
        });
        let unit_paths = collect_relative_paths(unit_dir, unit_dir).unwrap_or_default();

        (src_paths, unit_paths)
    }

    // Tests every source module has a unit test file
    // Verified by deleting tests/unit/algorithm/fill.rs
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let (src_paths, unit_paths) = mirrored_paths();

        let mut missing: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_organizational(path) && !unit_paths.contains(*path))
            .collect();
        missing.sort();

        assert!(
            missing.is_empty(),
            "Source modules without unit tests:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Tests no unit test file outlives its source module
    // Verified by adding tests/unit/algorithm/legacy.rs
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let (src_paths, unit_paths) = mirrored_paths();

        let mut orphaned: Vec<&String> = unit_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .collect();
        orphaned.sort();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a source module:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut paths = HashSet::new();

        if dir.is_dir() {
            for entry_result in fs::read_dir(dir)? {
                let path = entry_result?.path();

                let relative_path = path
                    .strip_prefix(base)
                    .map_err(|_| io::Error::other("Failed to strip prefix"))?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    paths.insert(relative_path);
                    paths.extend(collect_relative_paths(&path, base)?);
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative_path);
                }
            }
        }

        Ok(paths)
    }

    // Tests every test file declares at least one test
    // Verified by adding a test file with only helper functions
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        if let Err(error) = check_test_files(tests_dir, tests_dir, &mut files_without_tests) {
            assert!(
                tests_dir.exists(),
                "Failed to scan tests directory: {error}"
            );
        }

        assert!(
            files_without_tests.is_empty(),
            "Test files without any #[test] function:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn check_test_files(
        dir: &Path,
        base_dir: &Path,
        files_without_tests: &mut Vec<String>,
    ) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                check_test_files(&path, base_dir, files_without_tests)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };

            // Harness roots such as tests/unit.rs only declare the directory beside them
            let harness_root =
                path.parent() == Some(base_dir) && path.with_extension("").is_dir();
            if harness_root || file_name == "mod.rs" {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }

        Ok(())
    }
}
