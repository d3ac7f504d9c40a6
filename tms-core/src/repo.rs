//! Repository URL parsing
//!
//! Derives the bare repository name (and so the clone directory and session
//! name) from a clone URL. Never touches the network or filesystem.

use tms_utils::RepoUrlError;
use url::Url;

const GIT_SUFFIX: &str = ".git";

/// Extract the repository name from an SSH-style or generic clone URL
///
/// SSH form: `user@host:path/to/repo.git`. Anything else is parsed as a URL;
/// scheme-less inputs such as `../repo.git` resolve against `file:///`.
pub fn extract_repo_name(url: &str) -> Result<String, RepoUrlError> {
    let url = url.trim();

    if is_ssh_style(url) {
        let parts: Vec<&str> = url.split(':').collect();
        if parts.len() != 2 {
            return Err(RepoUrlError::InvalidSshFormat(url.to_string()));
        }
        return last_segment(parts[1])
            .map(strip_git_suffix)
            .ok_or_else(|| RepoUrlError::InvalidSshFormat(url.to_string()));
    }

    let parsed = parse_generic(url)?;
    parsed
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(strip_git_suffix)
        .ok_or_else(|| RepoUrlError::MalformedUrl {
            url: url.to_string(),
            message: "no repository name in path".into(),
        })
}

/// `user@host:path` without a scheme
fn is_ssh_style(url: &str) -> bool {
    !url.contains("://") && url.contains('@')
}

fn parse_generic(url: &str) -> Result<Url, RepoUrlError> {
    let malformed = |e: url::ParseError| RepoUrlError::MalformedUrl {
        url: url.to_string(),
        message: e.to_string(),
    };

    match Url::parse(url) {
        Ok(parsed) => Ok(parsed),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse("file:///").map_err(malformed)?;
            base.join(url).map_err(malformed)
        }
        Err(e) => Err(malformed(e)),
    }
}

fn last_segment(path: &str) -> Option<&str> {
    path.split('/').filter(|s| !s.is_empty()).last()
}

fn strip_git_suffix(name: &str) -> String {
    name.strip_suffix(GIT_SUFFIX).unwrap_or(name).to_string()
}
