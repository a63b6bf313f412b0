//! Test fixtures: stylesheets and a scriptable stand-in for the compiler.

use std::fs;
use std::path::{Path, PathBuf};

/// A stylesheet that needs compilation.
pub const MARKED_STYLESHEET: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// A stylesheet that is bundled as-is.
pub const PLAIN_STYLESHEET: &str = "body {\n  margin: 0;\n}\n";

/// What the fake compiler writes into its `-o` file.
pub const COMPILED_OUTPUT: &str = "/* compiled */\n.underline{text-decoration-line:underline}\n";

/// Writes `contents` to `dir/name`, creating `dir` if needed.
///
/// Returns the full path of the written file.
pub fn write_stylesheet(dir: &Path, name: &str, contents: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// A shell script posing as `tailwindcss`.
///
/// Each run records its arguments in `<script>.args` (one per line, last run
/// only) and appends a line to `<script>.runs`. The succeeding variant writes
/// [`COMPILED_OUTPUT`] into the file named after `-o`; the failing variant
/// prints a message to stderr and exits with status 1.
#[derive(Debug, Clone)]
pub struct FakeCompiler {
    path: PathBuf,
}

impl FakeCompiler {
    /// Installs a succeeding compiler as `dir/tailwindcss`.
    pub fn succeeding(dir: &Path) -> Self {
        Self::install(&dir.join("tailwindcss"))
    }

    /// Installs a failing compiler as `dir/tailwindcss`.
    pub fn failing(dir: &Path, message: &str) -> Self {
        Self::install_failing(&dir.join("tailwindcss"), message)
    }

    /// Installs a succeeding compiler at exactly `path`.
    pub fn install(path: &Path) -> Self {
        let body = format!(
            "out=\"\"\n\
             while [ $# -gt 0 ]; do\n\
             \x20 case \"$1\" in\n\
             \x20   -o) out=\"$2\"; shift 2 ;;\n\
             \x20   *) shift ;;\n\
             \x20 esac\n\
             done\n\
             printf '%s' '{COMPILED_OUTPUT}' > \"$out\"\n\
             echo 'Done in 1ms.'\n"
        );
        Self::write_script(path, &body)
    }

    /// Installs a failing compiler at exactly `path`.
    pub fn install_failing(path: &Path, message: &str) -> Self {
        let body = format!("echo '{message}' >&2\nexit 1\n");
        Self::write_script(path, &body)
    }

    fn write_script(path: &Path, body: &str) -> Self {
        let args_file = Self::sidecar(path, "args");
        let runs_file = Self::sidecar(path, "runs");
        let script = format!(
            "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\necho run >> '{}'\n{body}",
            args_file.display(),
            runs_file.display()
        );

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, script).unwrap();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        Self {
            path: path.to_path_buf(),
        }
    }

    fn sidecar(path: &Path, extension: &str) -> PathBuf {
        let mut name = path.file_name().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(extension);
        path.with_file_name(name)
    }

    /// Location of the script.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Arguments of the most recent run, or nothing if it never ran.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(Self::sidecar(&self.path, "args"))
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Number of times the script ran.
    pub fn invocations(&self) -> usize {
        fs::read_to_string(Self::sidecar(&self.path, "runs")).map(|content| content.lines().count()).unwrap_or(0)
    }
}
