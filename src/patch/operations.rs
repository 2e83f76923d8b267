use regex::Regex;
use tracing::debug;

use super::EditOutcome;

/// Replace every occurrence of an exact substring.
///
/// An absent `find` string is not an error here; the caller decides what a
/// `NotFound` outcome means for the run as a whole. When the replacement text
/// is already present and the original is gone, the edit is reported as
/// `AlreadyApplied` so a re-run stays inert.
pub fn literal_replace(content: &str, find: &str, replace: &str) -> (String, EditOutcome) {
    if content.contains(find) {
        debug!("literal replace matched {} byte(s)", find.len());
        (content.replace(find, replace), EditOutcome::Applied)
    } else if content.contains(replace) {
        (content.to_string(), EditOutcome::AlreadyApplied)
    } else {
        (content.to_string(), EditOutcome::NotFound)
    }
}

/// Insert a fixed block immediately after the first region matching `anchor`.
///
/// The guard string short-circuits the insertion when the block is already
/// present, so re-running the pipeline does not duplicate it.
pub fn pattern_insert(
    content: &str,
    anchor: &Regex,
    insert: &str,
    guard: Option<&str>,
) -> (String, EditOutcome) {
    if let Some(guard) = guard {
        if content.contains(guard) {
            debug!("insertion guard '{}' already present, skipping", guard);
            return (content.to_string(), EditOutcome::AlreadyApplied);
        }
    }

    match anchor.find(content) {
        Some(m) => {
            debug!(
                "anchor matched at bytes {}..{}, inserting {} byte(s)",
                m.start(),
                m.end(),
                insert.len()
            );
            let mut result = String::with_capacity(content.len() + insert.len() + 1);
            result.push_str(&content[..m.end()]);
            result.push('\n');
            result.push_str(insert);
            result.push_str(&content[m.end()..]);
            (result, EditOutcome::Applied)
        }
        None => (content.to_string(), EditOutcome::NotFound),
    }
}
