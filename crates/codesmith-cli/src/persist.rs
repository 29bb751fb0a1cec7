//! Artifact persistence: the generated source file and the execution-output
//! file, named with a request-scoped timestamp so runs never collide.

use chrono::Utc;
use codesmith_core::schema::CodeResult;
use codesmith_core::CodesmithResult;
use std::path::{Path, PathBuf};

/// Paths of the two files written for one run.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// The generated source file.
    pub code_path: PathBuf,
    /// The plain-text execution output.
    pub result_path: PathBuf,
}

/// Creates the output directory. Called explicitly once at startup by the
/// shell, never as an import-time side effect.
pub fn init_output_dir(dir: &Path) -> CodesmithResult<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Maps a language name to a source-file extension. Unknown languages fall
/// back to `txt`.
pub fn extension_for(language: &str) -> &'static str {
    match language.to_lowercase().as_str() {
        "python" => "py",
        "rust" => "rs",
        "go" | "golang" => "go",
        "javascript" | "js" => "js",
        "typescript" | "ts" => "ts",
        "java" => "java",
        "kotlin" => "kt",
        "c" => "c",
        "c++" | "cpp" => "cpp",
        "c#" | "csharp" => "cs",
        "ruby" => "rb",
        "php" => "php",
        "swift" => "swift",
        "haskell" => "hs",
        "bash" | "shell" => "sh",
        _ => "txt",
    }
}

/// Writes the code and output files under `dir`, keyed by unix timestamp.
pub fn save_artifacts(dir: &Path, result: &CodeResult) -> CodesmithResult<Artifacts> {
    let timestamp = Utc::now().timestamp();
    let extension = extension_for(&result.programming_language);

    let code_path = dir.join(format!("generated_code_{timestamp}.{extension}"));
    let result_path = dir.join(format!("output_{timestamp}.txt"));

    std::fs::write(&code_path, &result.code)?;
    std::fs::write(&result_path, &result.final_result)?;

    Ok(Artifacts {
        code_path,
        result_path,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn sample_result() -> CodeResult {
        CodeResult {
            question: "sum two numbers".to_string(),
            programming_language: "Python".to_string(),
            code: "print(1+2)".to_string(),
            final_result: "3".to_string(),
        }
    }

    #[test]
    fn extension_mapping_is_case_insensitive() {
        assert_eq!(extension_for("Python"), "py");
        assert_eq!(extension_for("RUST"), "rs");
        assert_eq!(extension_for("C++"), "cpp");
        assert_eq!(extension_for("brainfuck"), "txt");
    }

    #[test]
    fn init_output_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("output");

        init_output_dir(&dir).unwrap();
        init_output_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn save_artifacts_writes_both_files() {
        let tmp = tempfile::tempdir().unwrap();
        let artifacts = save_artifacts(tmp.path(), &sample_result()).unwrap();

        assert!(artifacts
            .code_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("generated_code_"));
        assert!(artifacts.code_path.extension().unwrap() == "py");

        let code = std::fs::read_to_string(&artifacts.code_path).unwrap();
        assert_eq!(code, "print(1+2)");

        let output = std::fs::read_to_string(&artifacts.result_path).unwrap();
        assert_eq!(output, "3");
    }
}
