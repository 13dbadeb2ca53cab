//! Optimistic list mutations.
//!
//! Delete flows remove the row from the visible list immediately and roll it
//! back, at its original position, if the backend call fails.

/// Token returned by [`remove_where`]; feed it to [`restore`] on failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Removed<T> {
    index: usize,
    item: T,
}

/// Remove the first item matching `pred`, returning a token that can undo
/// the removal. `None` when nothing matched.
pub fn remove_where<T>(list: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Option<Removed<T>> {
    let index = list.iter().position(pred)?;
    let item = list.remove(index);
    Some(Removed { index, item })
}

/// Put a removed item back where it was.
pub fn restore<T>(list: &mut Vec<T>, removed: Removed<T>) {
    let index = removed.index.min(list.len());
    list.insert(index, removed.item);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_then_restore_preserves_order() {
        let mut list = vec!["a", "b", "c", "d"];
        let removed = remove_where(&mut list, |x| *x == "b").unwrap();
        assert_eq!(list, vec!["a", "c", "d"]);
        restore(&mut list, removed);
        assert_eq!(list, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut list = vec![1, 2, 3];
        assert!(remove_where(&mut list, |x| *x == 9).is_none());
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn test_restore_clamps_when_list_shrank() {
        let mut list = vec![1, 2, 3];
        let removed = remove_where(&mut list, |x| *x == 3).unwrap();
        // The list shrank further while the request was in flight.
        list.clear();
        restore(&mut list, removed);
        assert_eq!(list, vec![3]);
    }
}
