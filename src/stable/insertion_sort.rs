sort_impl!("stable_insertion_sort");

/// Sorts the slice ascending in place.
///
/// This sort is stable (i.e., does not reorder equal elements), *O*(*n*^2)
/// worst-case and uses no auxiliary memory beyond a handful of scalars.
///
/// # Current implementation
///
/// Classic insertion sort: grow a sorted prefix one element at a time,
/// holding the next element while strictly greater predecessors shift right,
/// then drop it into the vacated slot. The shift condition is strict, so an
/// element is never moved past an equal one.
pub fn sort(v: &mut [i32]) {
    insertion_sort(v, &mut |a, b| a < b);
}

// --- IMPL ---

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let key = v[i];
        let mut j = i;

        while j > 0 && is_less(&key, &v[j - 1]) {
            v[j] = v[j - 1];
            j -= 1;
        }

        v[j] = key;
    }
}
