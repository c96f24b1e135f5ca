sort_impl!("unstable_heap_sort");

/// Sorts the slice ascending in place.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place and
/// *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// Classic max-heap sort: bottom-up heap construction followed by repeated
/// root extraction into the shrinking tail.
pub fn sort(v: &mut [i32]) {
    let heap_size = v.len();
    sort_prefix(v, heap_size);
}

/// Sorts the first `heap_size` elements of `v` ascending in place, leaving
/// the tail untouched. `heap_size <= 1` is a no-op.
///
/// # Panics
///
/// Panics if `heap_size` exceeds `v.len()`.
pub fn sort_prefix(v: &mut [i32], heap_size: usize) {
    assert!(
        heap_size <= v.len(),
        "heap_size {heap_size} out of bounds for slice of len {}",
        v.len()
    );

    heapsort(v, heap_size, &mut |a, b| a < b);
}

/// Restores the max-heap property for the subtree rooted at `index`, given
/// that both child subtrees already satisfy it.
///
/// The element at `index` is compared against its in-bounds children and
/// swapped with the strictly larger one, descending until neither child is
/// larger. Ties keep the parent in place. A node whose children lie at or
/// beyond `heap_size` is a leaf and is left alone.
///
/// # Panics
///
/// Panics if `index >= heap_size` or `heap_size > v.len()`.
pub fn sift_down(v: &mut [i32], heap_size: usize, index: usize) {
    assert!(
        heap_size <= v.len(),
        "heap_size {heap_size} out of bounds for slice of len {}",
        v.len()
    );
    assert!(
        index < heap_size,
        "sift-down index {index} outside heap of size {heap_size}"
    );

    sift_down_impl(v, heap_size, index, &mut |a, b| a < b);
}

// --- IMPL ---

fn heapsort<T, F>(v: &mut [T], heap_size: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if heap_size <= 1 {
        return;
    }

    // Bottom-up build over the interior nodes.
    for i in (0..heap_size / 2).rev() {
        sift_down_impl(v, heap_size, i, is_less);
    }

    // Extract the max into the shrinking tail and repair the root.
    for i in (1..heap_size).rev() {
        v.swap(0, i);
        sift_down_impl(v, i, 0, is_less);
    }
}

fn sift_down_impl<T, F>(v: &mut [T], heap_size: usize, index: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut root = index;

    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_size && is_less(&v[largest], &v[left]) {
            largest = left;
        }
        if right < heap_size && is_less(&v[largest], &v[right]) {
            largest = right;
        }

        if largest == root {
            return;
        }

        v.swap(root, largest);
        root = largest;
    }
}
