use dioxus::prelude::*;

/// The value `value` held on the previous render, if it has changed since.
///
/// Components that copy a prop into a signal call this every render and
/// write the change through.
pub(crate) fn use_prop_change<T: Clone + PartialEq + 'static>(value: &T) -> Option<T> {
    let mut last = use_signal(|| value.clone());
    if *last.peek() == *value {
        return None;
    }
    let previous = last.peek().clone();
    last.set(value.clone());
    Some(previous)
}
