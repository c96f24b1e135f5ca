sort_impl!("stable_merge_sort");

/// Sorts the slice ascending in place.
///
/// This sort is stable (i.e., does not reorder equal elements) and
/// *O*(*n* \* log(*n*)) worst-case. Each merge step allocates temporary
/// buffers covering the two runs it joins; the allocation is scoped to that
/// call, so peak auxiliary memory is *O*(*n*).
///
/// # Current implementation
///
/// Textbook top-down merge sort: split at the midpoint, sort both halves
/// recursively, merge them with [`merge`].
pub fn sort(v: &mut [i32]) {
    if v.is_empty() {
        return;
    }

    let end = v.len() - 1;
    sort_range(v, 0, end);
}

/// Sorts the inclusive index range `[begin, end]` of `v` ascending in place.
///
/// `begin >= end` is a no-op (a range of zero or one elements is already
/// sorted), mirroring the recursion base case.
///
/// # Panics
///
/// Panics if `begin < end` and `end` is out of bounds for `v`.
pub fn sort_range(v: &mut [i32], begin: usize, end: usize) {
    if begin >= end {
        return;
    }
    assert!(
        end < v.len(),
        "sort range end {end} out of bounds for slice of len {}",
        v.len()
    );

    merge_sort(v, begin, end, &mut |a, b| a < b);
}

/// Merges the sorted runs `[begin, middle]` and `[middle + 1, end]` of `v`
/// into a single sorted run starting at `begin`.
///
/// Both runs are copied into temporary buffers first; the merge then writes
/// back over `[begin, end]`. Ties go to the left run, which is what makes
/// the enclosing sort stable. A degenerate region (`begin == middle == end`)
/// is copied back unchanged.
///
/// # Panics
///
/// Panics if `begin <= middle <= end` does not hold or `end` is out of
/// bounds for `v`.
pub fn merge(v: &mut [i32], begin: usize, middle: usize, end: usize) {
    assert!(
        begin <= middle && middle <= end && end < v.len(),
        "invalid merge region [{begin}, {middle}, {end}] for slice of len {}",
        v.len()
    );

    merge_runs(v, begin, middle, end, &mut |a, b| a < b);
}

// --- IMPL ---

fn merge_sort<T, F>(v: &mut [T], begin: usize, end: usize, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if begin >= end {
        return;
    }

    let middle = begin + (end - begin) / 2;

    merge_sort(v, begin, middle, is_less);
    merge_sort(v, middle + 1, end, is_less);
    merge_runs(v, begin, middle, end, is_less);
}

fn merge_runs<T, F>(v: &mut [T], begin: usize, middle: usize, end: usize, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let left_run = v[begin..=middle].to_vec();
    let right_run = v[middle + 1..=end].to_vec();

    let mut left = 0;
    let mut right = 0;
    let mut out = begin;

    while left < left_run.len() && right < right_run.len() {
        // Left wins ties, equal elements keep their run order.
        if !is_less(&right_run[right], &left_run[left]) {
            v[out] = left_run[left];
            left += 1;
        } else {
            v[out] = right_run[right];
            right += 1;
        }
        out += 1;
    }

    while left < left_run.len() {
        v[out] = left_run[left];
        left += 1;
        out += 1;
    }

    while right < right_run.len() {
        v[out] = right_run[right];
        right += 1;
        out += 1;
    }
}
