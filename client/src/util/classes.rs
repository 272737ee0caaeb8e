//! Class-string composition for the styled primitives.

#[cfg(test)]
#[path = "classes_test.rs"]
mod classes_test;

/// Join a base class list with caller-supplied extras, skipping blanks.
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
