//! Reads vocabulary sources and parses them into a list.
//!
//! Every source is read concurrently. A source that is missing, unreadable or
//! answers with a non-success status counts as empty text; loading itself
//! never fails.

use crate::config::{Config, SourceSpec};
use std::cmp::Ordering;
use std::path::Path;
use vocab_core::parser::{all_blank, parse_or_fallback};
use vocab_core::VocabList;

/// Result of one load.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub list: VocabList,
    /// Sources that yielded non-blank text.
    pub sources_read: usize,
    pub used_fallback: bool,
}

/// Sources to read, in order.
pub async fn resolve_sources(config: &Config) -> Vec<SourceSpec> {
    if let Some(sources) = &config.sources {
        return sources.clone();
    }
    scan_directory(&config.vocab_dir, &config.fallback).await
}

/// Every `.txt` file in `dir` except the fallback, in natural name order.
async fn scan_directory(dir: &Path, fallback: &SourceSpec) -> Vec<SourceSpec> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("cannot read vocab directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut names = Vec::new();
    loop {
        match entries.next_entry().await {
            Ok(Some(entry)) => {
                let path = entry.path();
                if path.extension().map_or(false, |ext| ext == "txt") {
                    names.push(path);
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("error while scanning {}: {}", dir.display(), e);
                break;
            }
        }
    }

    let fallback_name = match fallback {
        SourceSpec::File(path) => path.file_name().map(|n| n.to_os_string()),
        SourceSpec::Url(_) => None,
    };
    names.retain(|path| path.file_name().map(|n| n.to_os_string()) != fallback_name);
    names.sort_by(|a, b| {
        natural_cmp(
            &a.file_name().unwrap_or_default().to_string_lossy(),
            &b.file_name().unwrap_or_default().to_string_lossy(),
        )
    });
    names.into_iter().map(SourceSpec::File).collect()
}

/// Compare names so embedded numbers sort by value (`egp2` < `egp10`).
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a).into_iter();
    let mut right = chunks(b).into_iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let ordering = match (l.parse_digits(), r.parse_digits()) {
                    (Some(ld), Some(rd)) => ld
                        .len()
                        .cmp(&rd.len())
                        .then_with(|| ld.cmp(rd)),
                    _ => l.text.cmp(r.text),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

struct Chunk<'a> {
    text: &'a str,
    numeric: bool,
}

impl<'a> Chunk<'a> {
    /// Digits without leading zeros, for numeric chunks.
    fn parse_digits(&self) -> Option<&'a str> {
        if !self.numeric {
            return None;
        }
        let trimmed = self.text.trim_start_matches('0');
        Some(if trimmed.is_empty() { "0" } else { trimmed })
    }
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut numeric = None;
    for (idx, ch) in s.char_indices() {
        let is_digit = ch.is_ascii_digit();
        match numeric {
            Some(n) if n != is_digit => {
                out.push(Chunk {
                    text: &s[start..idx],
                    numeric: n,
                });
                start = idx;
            }
            _ => {}
        }
        numeric = Some(is_digit);
    }
    if let Some(n) = numeric {
        out.push(Chunk {
            text: &s[start..],
            numeric: n,
        });
    }
    out
}

/// Read one source, treating every failure as empty content.
pub async fn read_source(client: Option<&reqwest::Client>, spec: &SourceSpec) -> String {
    match spec {
        SourceSpec::File(path) => match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("skipping {}: {}", path.display(), e);
                String::new()
            }
        },
        SourceSpec::Url(url) => {
            let Some(client) = client else {
                tracing::warn!("skipping {}: no http client", url);
                return String::new();
            };
            match fetch(client, url).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("skipping {}: {}", url, e);
                    String::new()
                }
            }
        }
    }
}

async fn fetch(client: &reqwest::Client, url: &str) -> reqwest::Result<String> {
    client.get(url).send().await?.error_for_status()?.text().await
}

/// Read every configured source and parse the result, falling back to the
/// designated default source when all of them are blank.
pub async fn load(config: &Config) -> LoadOutcome {
    let sources = resolve_sources(config).await;
    let client = match reqwest::Client::builder().build() {
        Ok(client) => Some(client),
        Err(e) => {
            tracing::warn!("http client unavailable: {}", e);
            None
        }
    };

    let handles: Vec<_> = sources
        .iter()
        .cloned()
        .map(|spec| {
            let client = client.clone();
            tokio::spawn(async move { read_source(client.as_ref(), &spec).await })
        })
        .collect();

    let mut contents = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.await {
            Ok(text) => contents.push(text),
            Err(e) => {
                tracing::warn!("source task failed: {}", e);
                contents.push(String::new());
            }
        }
    }

    let sources_read = contents.iter().filter(|c| !c.trim().is_empty()).count();
    tracing::debug!("read {} of {} sources", sources_read, sources.len());

    // Only fetch the fallback when it will be used.
    let used_fallback = all_blank(&contents);
    let fallback = if used_fallback {
        tracing::info!("no vocabulary in sources, using fallback {}", config.fallback.describe());
        read_source(client.as_ref(), &config.fallback).await
    } else {
        String::new()
    };

    LoadOutcome {
        list: parse_or_fallback(&contents, &fallback),
        sources_read,
        used_fallback,
    }
}
