//! Feature selection and tie detection.

use std::fmt;

use crate::tally::OccurrenceTally;

/// The feature chosen for a dependency, and any features tied with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// The identifier with the highest count. Ties go to the first seen.
    pub resolved_unit: Option<String>,
    /// Every identifier sharing the highest count, when there are two or more.
    pub conflicts: Option<Vec<String>>,
}

impl Selection {
    pub fn has_conflicts(&self) -> bool {
        self.conflicts.is_some()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.resolved_unit, &self.conflicts) {
            (None, _) => write!(f, "No public feature found."),
            (Some(unit), None) => write!(f, "{unit}"),
            (Some(unit), Some(conflicts)) => {
                write!(f, "{unit} (tied with {})", conflicts.join(", "))
            }
        }
    }
}

/// Pick the identifier with the highest count and report ties at that count.
pub fn select(tally: &OccurrenceTally) -> Selection {
    let mut best: Option<(&str, u32)> = None;
    for (id, count) in tally.iter() {
        if best.map_or(true, |(_, most)| count > most) {
            tracing::debug!("Feature {id} has {count} occurrences");
            best = Some((id, count));
        }
    }
    let Some((resolved, most)) = best else {
        return Selection::default();
    };

    let tied: Vec<String> = tally
        .iter()
        .filter(|(_, count)| *count == most)
        .map(|(id, _)| id.to_string())
        .collect();
    let conflicts = if tied.len() > 1 {
        tracing::info!("===== CONFLICTS: [{}]", tied.join(", "));
        Some(tied)
    } else {
        None
    };

    Selection {
        resolved_unit: Some(resolved.to_string()),
        conflicts,
    }
}
