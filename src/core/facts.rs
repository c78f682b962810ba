// src/core/facts.rs

use crate::pages::FactRecord;

/// Length in characters (Unicode scalar values), not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Shortest non-empty trimmed `fact` among `records`.
/// Ties go to the earliest record. `None` if nothing qualifies.
pub fn shortest_fact(records: &[FactRecord]) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for rec in records {
        let t = rec.fact.as_deref().unwrap_or("").trim();
        if t.is_empty() { continue; }
        let len = char_len(t);
        match best {
            Some((_, b)) if b <= len => {}
            _ => best = Some((t, len)),
        }
    }
    best.map(|(t, _)| t)
}
