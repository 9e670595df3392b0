//! Copy-on-write list operations.

pub fn push<T: Clone>(list: &[T], item: T) -> Vec<T> {
    let mut out = list.to_vec();
    out.push(item);
    out
}

pub fn unshift<T: Clone>(list: &[T], item: T) -> Vec<T> {
    let mut out = Vec::with_capacity(list.len() + 1);
    out.push(item);
    out.extend_from_slice(list);
    out
}

pub fn push_list<T: Clone>(list: &[T], items: &[T]) -> Vec<T> {
    [list, items].concat()
}

pub fn unshift_list<T: Clone>(list: &[T], items: &[T]) -> Vec<T> {
    [items, list].concat()
}

/// Drops the item at `index`. Out-of-range indices return an unchanged copy.
pub fn remove<T: Clone>(list: &[T], index: usize) -> Vec<T> {
    if index >= list.len() {
        return list.to_vec();
    }
    [&list[..index], &list[index + 1..]].concat()
}

/// Replaces the item at `index`; past the end, the item is appended.
pub fn update<T: Clone>(list: &[T], item: T, index: usize) -> Vec<T> {
    let mut out = list.to_vec();
    match out.get_mut(index) {
        Some(slot) => *slot = item,
        None => out.push(item),
    }
    out
}
