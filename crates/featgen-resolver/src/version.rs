//! Version parsing and comparison.
//!
//! Two version flavours meet during feature resolution:
//!
//! - Maven artifact versions, matched against version ranges in inclusion
//!   patterns. Segments are split on `.` and `-`, numeric segments compare as
//!   numbers and well-known qualifiers follow Maven's ordering
//!   (`alpha` < `beta` < `milestone` < `rc` < `snapshot` < release < `sp`).
//! - Feature versions, the numeric suffix of a feature identifier such as
//!   `jsp-2.3`. Only dot-separated non-negative integers are accepted.

use std::cmp::Ordering;
use std::fmt;

/// A parsed Maven version with comparable segments.
#[derive(Debug, Clone)]
pub struct MavenVersion {
    pub original: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Numeric(u64),
    Qualifier(QualifierKind),
    Text(String),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum QualifierKind {
    Alpha,
    Beta,
    Milestone,
    Rc,
    Snapshot,
    Release,
    Sp,
}

impl MavenVersion {
    pub fn parse(version: &str) -> Self {
        let segments = version
            .split(['.', '-'])
            .filter(|token| !token.is_empty())
            .map(classify)
            .collect();
        Self {
            original: version.to_string(),
            segments,
        }
    }

    /// True when every segment is a plain number, e.g. `2.10` or `4`.
    pub fn is_numeric(&self) -> bool {
        !self.segments.is_empty()
            && self
                .segments
                .iter()
                .all(|s| matches!(s, Segment::Numeric(_)))
    }
}

fn classify(token: &str) -> Segment {
    if let Ok(n) = token.parse::<u64>() {
        return Segment::Numeric(n);
    }
    match token.to_lowercase().as_str() {
        "alpha" | "a" => Segment::Qualifier(QualifierKind::Alpha),
        "beta" | "b" => Segment::Qualifier(QualifierKind::Beta),
        "milestone" | "m" => Segment::Qualifier(QualifierKind::Milestone),
        "rc" | "cr" => Segment::Qualifier(QualifierKind::Rc),
        "snapshot" => Segment::Qualifier(QualifierKind::Snapshot),
        "ga" | "final" | "release" => Segment::Qualifier(QualifierKind::Release),
        "sp" => Segment::Qualifier(QualifierKind::Sp),
        _ => Segment::Text(token.to_string()),
    }
}

impl fmt::Display for MavenVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for MavenVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MavenVersion {}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        (0..len)
            .map(|i| compare_segments(self.segments.get(i), other.segments.get(i)))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_segments(a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(s), None) => against_missing(s),
        (None, Some(s)) => against_missing(s).reverse(),
        (Some(a), Some(b)) => compare_present(a, b),
    }
}

// A missing segment behaves like `0` or like the release qualifier.
fn against_missing(seg: &Segment) -> Ordering {
    match seg {
        Segment::Numeric(n) => n.cmp(&0),
        Segment::Qualifier(q) => q.cmp(&QualifierKind::Release),
        Segment::Text(_) => Ordering::Less,
    }
}

fn compare_present(a: &Segment, b: &Segment) -> Ordering {
    use Segment::*;
    match (a, b) {
        (Numeric(a), Numeric(b)) => a.cmp(b),
        (Qualifier(a), Qualifier(b)) => a.cmp(b),
        (Text(a), Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Numeric(_), _) => Ordering::Greater,
        (_, Numeric(_)) => Ordering::Less,
        (Qualifier(q), Text(_)) if *q >= QualifierKind::Release => Ordering::Greater,
        (Qualifier(_), Text(_)) => Ordering::Less,
        (Text(_), Qualifier(q)) if *q >= QualifierKind::Release => Ordering::Less,
        (Text(_), Qualifier(_)) => Ordering::Greater,
    }
}

/// A Maven version range expression.
///
/// Supports: `[1.0,2.0)`, `[1.0,]`, `(,2.0)`, `[1.0]` (exact).
#[derive(Debug, Clone)]
pub struct VersionRange {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

#[derive(Debug, Clone)]
pub struct Bound {
    pub version: MavenVersion,
    pub inclusive: bool,
}

impl VersionRange {
    /// Parse a Maven version range string.
    ///
    /// Returns `None` for bare versions and for unbalanced brackets.
    pub fn parse(text: &str) -> Option<Self> {
        let s = text.trim();
        let open_inclusive = match s.chars().next()? {
            '[' => true,
            '(' => false,
            _ => return None,
        };
        let close_inclusive = match s.chars().last()? {
            ']' => true,
            ')' => false,
            _ => return None,
        };
        if s.len() < 2 {
            return None;
        }
        let inner = &s[1..s.len() - 1];

        let bound = |text: &str, inclusive: bool| {
            let text = text.trim();
            (!text.is_empty()).then(|| Bound {
                version: MavenVersion::parse(text),
                inclusive,
            })
        };

        match inner.split_once(',') {
            Some((lower, upper)) => Some(VersionRange {
                lower: bound(lower, open_inclusive),
                upper: bound(upper, close_inclusive),
            }),
            None => {
                let exact = bound(inner, true)?;
                Some(VersionRange {
                    lower: Some(exact.clone()),
                    upper: Some(exact),
                })
            }
        }
    }

    /// Check if a version satisfies this range.
    pub fn contains(&self, version: &MavenVersion) -> bool {
        let above_lower = self.lower.as_ref().map_or(true, |b| {
            let ord = version.cmp(&b.version);
            ord == Ordering::Greater || (b.inclusive && ord == Ordering::Equal)
        });
        let below_upper = self.upper.as_ref().map_or(true, |b| {
            let ord = version.cmp(&b.version);
            ord == Ordering::Less || (b.inclusive && ord == Ordering::Equal)
        });
        above_lower && below_upper
    }
}

/// The numeric version suffix of a feature identifier.
///
/// `2.10` sorts above `2.9`; trailing zero segments are insignificant, so
/// `1.0` and `1.0.0` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FeatureVersion(MavenVersion);

impl FeatureVersion {
    /// Parse a dot-separated list of non-negative integers.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return None;
        }
        if text.split('.').any(str::is_empty) {
            return None;
        }
        let version = MavenVersion::parse(text);
        version.is_numeric().then_some(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0.original
    }
}

impl fmt::Display for FeatureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a feature identifier at its last hyphen into base name and version.
///
/// An identifier without a hyphen, or whose suffix is not a numeric version,
/// is returned whole with no version: `servlet-4.0` gives `("servlet", 4.0)`,
/// `jaxrsClient` and `mp-config` are unversioned.
pub fn split_feature_id(id: &str) -> (&str, Option<FeatureVersion>) {
    if let Some((base, suffix)) = id.rsplit_once('-') {
        if let Some(version) = FeatureVersion::parse(suffix) {
            return (base, Some(version));
        }
    }
    (id, None)
}
