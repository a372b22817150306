//! Artifact inclusion patterns: `groupId:artifactId:extension:version`.
//!
//! Tokens are positional and trailing tokens may be omitted. Each token is
//! matched as follows:
//!
//! - empty or `*` matches anything;
//! - a token containing `*` is a wildcard (`org.*`, `*-impl`, `*servlet*`);
//! - in the version position, a token starting with `[` or `(` is a Maven
//!   version range such as `[1.0,2.0)`;
//! - anything else must match exactly.
//!
//! Coordinates carry no extension, so the extension token accepts every
//! artifact.

use std::fmt;
use std::str::FromStr;

use featgen_core::coordinate::Coordinate;
use featgen_util::errors::FeatgenError;
use globset::{Glob, GlobMatcher};

use crate::version::{MavenVersion, VersionRange};

const MAX_TOKENS: usize = 4;
const EXTENSION_POSITION: usize = 2;
const VERSION_POSITION: usize = 3;

/// A parsed inclusion pattern.
#[derive(Debug, Clone)]
pub struct ArtifactPattern {
    raw: String,
    tokens: Vec<TokenMatcher>,
}

#[derive(Debug, Clone)]
enum TokenMatcher {
    Any,
    Exact(String),
    Wildcard(GlobMatcher),
    Range(VersionRange),
}

impl ArtifactPattern {
    pub fn parse(pattern: &str) -> Result<Self, FeatgenError> {
        let invalid = |message: String| FeatgenError::InvalidPattern {
            pattern: pattern.to_string(),
            message,
        };

        let raw_tokens: Vec<&str> = pattern.trim().split(':').collect();
        if raw_tokens.len() > MAX_TOKENS {
            return Err(invalid(format!(
                "expected at most {MAX_TOKENS} tokens, found {}",
                raw_tokens.len()
            )));
        }

        let mut tokens = Vec::with_capacity(raw_tokens.len());
        for (position, token) in raw_tokens.into_iter().enumerate() {
            let token = token.trim();
            let matcher = if token.is_empty() || token == "*" || position == EXTENSION_POSITION {
                TokenMatcher::Any
            } else if position == VERSION_POSITION
                && (token.starts_with('[') || token.starts_with('('))
            {
                let range = VersionRange::parse(token)
                    .ok_or_else(|| invalid(format!("`{token}` is not a version range")))?;
                TokenMatcher::Range(range)
            } else if token.contains('*') {
                let escaped: Vec<String> = token.split('*').map(globset::escape).collect();
                let glob = Glob::new(&escaped.join("*")).map_err(|e| invalid(e.to_string()))?;
                TokenMatcher::Wildcard(glob.compile_matcher())
            } else {
                TokenMatcher::Exact(token.to_string())
            };
            tokens.push(matcher);
        }

        Ok(Self {
            raw: pattern.to_string(),
            tokens,
        })
    }

    /// Does `coordinate` fall within this pattern?
    pub fn matches(&self, coordinate: &Coordinate) -> bool {
        self.tokens.iter().enumerate().all(|(position, matcher)| {
            let field = match position {
                0 => coordinate.group.as_str(),
                1 => coordinate.name.as_str(),
                VERSION_POSITION => coordinate.version.as_str(),
                _ => return true,
            };
            matcher.matches(field)
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl TokenMatcher {
    fn matches(&self, field: &str) -> bool {
        match self {
            TokenMatcher::Any => true,
            TokenMatcher::Exact(expected) => expected == field,
            TokenMatcher::Wildcard(glob) => glob.is_match(field),
            TokenMatcher::Range(range) => range.contains(&MavenVersion::parse(field)),
        }
    }
}

impl FromStr for ArtifactPattern {
    type Err = FeatgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ArtifactPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
