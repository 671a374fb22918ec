use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Directory names whose contents are support code, not test sources.
/// Files under these are skipped during directory and glob expansion,
/// so `tests/helpers/util.py` never shows up as a candidate.
const SUPPORT_DIRS: &[&str] = &["helpers", "fixtures", "__pycache__"];

/// Options for a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    /// Base directory for resolving relative entries. Defaults to the
    /// process working directory.
    pub base_dir: Option<PathBuf>,
    /// Extension that marks a file as a test source.
    pub extension: String,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        DiscoverOptions {
            base_dir: None,
            extension: "py".to_string(),
        }
    }
}

/// Resolves a list of entries (file paths, directory paths, or glob
/// patterns) into a sorted, deduplicated list of candidate test files.
///
/// Entries that do not exist, match nothing, or name non-test files
/// contribute no candidates; they are never an error.
pub async fn discover_candidates(
    entries: &[String],
    options: &DiscoverOptions,
) -> anyhow::Result<Vec<String>> {
    let base = match &options.base_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let mut candidates = BTreeSet::new();

    for entry in entries {
        let files = resolve_entry(entry, &base, &options.extension).await;
        candidates.extend(files);
    }

    Ok(candidates.into_iter().collect())
}

async fn resolve_entry(entry: &str, base: &Path, extension: &str) -> Vec<String> {
    let resolved = base.join(entry);

    if let Ok(metadata) = tokio::fs::metadata(&resolved).await {
        if metadata.is_file() {
            if has_extension(&resolved, extension) {
                return vec![normalize(&resolved)];
            }
            tracing::debug!("skipping {}: not a test source file", entry);
            return Vec::new();
        }

        if metadata.is_dir() {
            let pattern = resolved.join(format!("**/*.{}", extension));
            return expand_glob(&pattern.to_string_lossy(), base, extension);
        }
    }

    let pattern = if Path::new(entry).is_absolute() {
        entry.to_string()
    } else {
        base.join(entry).to_string_lossy().into_owned()
    };
    expand_glob(&pattern, base, extension)
}

fn expand_glob(pattern: &str, base: &Path, extension: &str) -> Vec<String> {
    let paths = match glob::glob(pattern) {
        Ok(paths) => paths,
        Err(err) => {
            tracing::debug!("invalid pattern {}: {}", pattern, err);
            return Vec::new();
        }
    };

    paths
        .filter_map(Result::ok)
        .filter(|p| p.is_file() && has_extension(p, extension))
        .filter(|p| !in_support_dir(p, base))
        .map(|p| normalize(&p))
        .collect()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}

fn in_support_dir(path: &Path, base: &Path) -> bool {
    let relative = path.strip_prefix(base).unwrap_or(path);
    relative.components().any(|part| {
        let name = part.as_os_str().to_string_lossy();
        SUPPORT_DIRS.contains(&name.as_ref())
    })
}

// Collapses `.` components so the same file reached via different
// entries (`.` vs `tests/`) deduplicates to one string.
fn normalize(path: &Path) -> String {
    path.components()
        .collect::<PathBuf>()
        .to_string_lossy()
        .into_owned()
}
