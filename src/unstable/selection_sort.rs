sort_impl!("unstable_selection_sort");

/// Sorts the slice ascending in place.
///
/// This sort is unstable (i.e., may reorder equal elements), *O*(*n*^2) in
/// every case and uses no auxiliary memory beyond a handful of scalars.
///
/// # Current implementation
///
/// Classic selection sort: for each position scan the unsorted suffix for
/// its minimum and swap it into place. The scan uses a strict comparison, so
/// the first occurrence of the minimum wins ties, but the swap itself can
/// carry an element past its equals.
pub fn sort(v: &mut [i32]) {
    selection_sort(v, &mut |a, b| a < b);
}

// --- IMPL ---

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut min_index = i;

        for j in i + 1..len {
            if is_less(&v[j], &v[min_index]) {
                min_index = j;
            }
        }

        v.swap(i, min_index);
    }
}
