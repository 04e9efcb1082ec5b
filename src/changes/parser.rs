//! Parsing of `git blame --porcelain` output.

use super::range::is_zero_hash;

/// Attribution of one line of the blamed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct BlameLine {
    /// Full commit hash that last touched the line.
    pub commit: String,
    /// Line number in the current file (1-based).
    pub line_number: usize,
}

impl BlameLine {
    /// Returns true for lines with uncommitted working-tree changes.
    pub(super) fn is_uncommitted(&self) -> bool {
        is_zero_hash(&self.commit)
    }
}

/// Parse porcelain blame output into per-line attributions.
///
/// Every blamed line starts with a header `<sha> <orig> <final> [<count>]`,
/// followed by optional commit metadata and a TAB-prefixed content line.
pub(super) fn parse_blame_porcelain(output: &str) -> Vec<BlameLine> {
    let mut result = Vec::new();

    for line in output.lines() {
        if line.starts_with('\t') {
            continue;
        }

        let mut parts = line.split(' ');
        let (Some(sha), Some(_orig), Some(final_line)) = (parts.next(), parts.next(), parts.next())
        else {
            continue;
        };

        if !is_full_hash(sha) {
            continue;
        }

        if let Ok(line_number) = final_line.parse() {
            result.push(BlameLine {
                commit: sha.to_string(),
                line_number,
            });
        }
    }

    result
}

fn is_full_hash(s: &str) -> bool {
    s.len() == 40 && s.bytes().all(|b| b.is_ascii_hexdigit())
}
