use std::path::Path;
use std::process::Command;

// Exposes the short commit hash as TOOLDECK_GIT_HASH for `--version`.
fn main() {
    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=TOOLDECK_GIT_HASH={hash}");

    let git_dir = git(&["rev-parse", "--git-dir"]);
    if let Some(dir) = git_dir {
        for entry in ["HEAD", "refs", "packed-refs"] {
            let path = Path::new(&dir).join(entry);
            if path.exists() {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!text.is_empty()).then_some(text)
}
