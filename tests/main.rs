use sort_classics::instantiate_sort_tests;

mod insertion {
    use super::*;

    type TestSort = sort_classics::stable::insertion_sort::SortImpl;

    instantiate_sort_tests!(TestSort);
}

mod merge {
    use super::*;

    type TestSort = sort_classics::stable::merge_sort::SortImpl;

    instantiate_sort_tests!(TestSort);
}

mod selection {
    use super::*;

    type TestSort = sort_classics::unstable::selection_sort::SortImpl;

    instantiate_sort_tests!(TestSort);
}

mod heap {
    use super::*;

    type TestSort = sort_classics::unstable::heap_sort::SortImpl;

    instantiate_sort_tests!(TestSort);
}

// Documented single-step and end-to-end contracts, checked against fixed
// vectors rather than generated patterns.
mod contract {
    use sort_classics::stable::{bucket_sort, insertion_sort, merge_sort, radix_sort};
    use sort_classics::unstable::{heap_sort, quick_sort, selection_sort};
    use sort_classics::SortError;

    #[test]
    fn insertion_sort_end_to_end() {
        let mut v = vec![5, 2, 4, 6, 1, 3];
        insertion_sort::sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn selection_sort_end_to_end() {
        let mut v = vec![5, 2, 4, 6, 1, 3];
        selection_sort::sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn heap_sort_end_to_end() {
        let mut v = vec![12, 11, 13, 5, 6, 7];
        heap_sort::sort_prefix(&mut v, 6);
        assert_eq!(v, [5, 6, 7, 11, 12, 13]);
    }

    #[test]
    fn merge_sort_end_to_end() {
        let mut v = vec![12, 11, 13, 5, 6, 7];
        merge_sort::sort_range(&mut v, 0, 5);
        assert_eq!(v, [5, 6, 7, 11, 12, 13]);
    }

    #[test]
    fn heap_sort_only_touches_prefix() {
        let mut v = vec![3, 2, 1, 0, -1];
        heap_sort::sort_prefix(&mut v, 3);
        assert_eq!(v, [1, 2, 3, 0, -1]);
    }

    #[test]
    fn merge_sort_only_touches_range() {
        let mut v = vec![9, 5, 3, 1, 7];
        merge_sort::sort_range(&mut v, 1, 3);
        assert_eq!(v, [9, 1, 3, 5, 7]);
    }

    #[test]
    fn merge_sort_degenerate_ranges_are_noops() {
        let mut v = vec![2, 1];
        merge_sort::sort_range(&mut v, 1, 1);
        assert_eq!(v, [2, 1]);

        // begin past end, nothing to do.
        merge_sort::sort_range(&mut v, 5, 2);
        assert_eq!(v, [2, 1]);
    }

    #[test]
    fn sift_down_keeps_root_when_already_largest() {
        let mut v = vec![3, 1, 2];
        heap_sort::sift_down(&mut v, 3, 0);
        assert_eq!(v, [3, 1, 2]);
    }

    #[test]
    fn sift_down_swaps_larger_child_up() {
        let mut v = vec![1, 3, 2];
        heap_sort::sift_down(&mut v, 3, 0);
        assert_eq!(v, [3, 1, 2]);
    }

    // Regression test: a shallow sift-down that stops after the first
    // compare-and-swap level (a common bug in hand-rolled heapsorts) does
    // not restore the heap property and lets the full sort mis-order some
    // inputs. This input distinguishes the two behaviors, the shallow
    // variant would stop at [7, 1, 6, 5, 4, 3, 2].
    #[test]
    fn sift_down_descends_past_first_swap() {
        let mut v = vec![1, 7, 6, 5, 4, 3, 2];
        heap_sort::sift_down(&mut v, 7, 0);
        assert_eq!(v, [7, 5, 6, 1, 4, 3, 2]);
    }

    #[test]
    fn sift_down_respects_heap_size_bound() {
        // Index 2 would win, but it lies outside the logical heap.
        let mut v = vec![1, 2, 9];
        heap_sort::sift_down(&mut v, 2, 0);
        assert_eq!(v, [2, 1, 9]);
    }

    #[test]
    fn merge_joins_two_sorted_runs() {
        let mut v = vec![1, 3, 5, 2, 4, 6];
        merge_sort::merge(&mut v, 0, 2, 5);
        assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn merge_single_element_region() {
        let mut v = vec![9];
        merge_sort::merge(&mut v, 0, 0, 0);
        assert_eq!(v, [9]);
    }

    #[test]
    fn merge_offset_region_reads_from_begin() {
        // A non-zero begin pins the left-run copy window.
        let mut v = vec![0, 2, 4, 1, 3];
        merge_sort::merge(&mut v, 1, 2, 4);
        assert_eq!(v, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn stub_sorts_error_and_leave_input_unchanged() {
        let stubs: &[(&str, fn(&mut [i32]) -> Result<(), SortError>)] = &[
            ("quick_sort", quick_sort::sort),
            ("radix_sort", radix_sort::sort),
            ("bucket_sort", bucket_sort::sort),
        ];

        for &(algorithm, stub) in stubs {
            let mut v = vec![3, 1, 2];

            assert_eq!(
                stub(&mut v),
                Err(SortError::Unimplemented { algorithm })
            );
            assert_eq!(v, [3, 1, 2], "{algorithm} must not reorder its input");
        }
    }

    #[test]
    fn unimplemented_error_names_the_algorithm() {
        let err = quick_sort::sort(&mut []).unwrap_err();
        assert_eq!(
            err.to_string(),
            "sort algorithm `quick_sort` is not implemented"
        );
    }

    #[test]
    #[should_panic(expected = "heap_size 4 out of bounds")]
    fn heap_sort_rejects_oversized_heap() {
        let mut v = vec![3, 1, 2];
        heap_sort::sort_prefix(&mut v, 4);
    }

    #[test]
    #[should_panic(expected = "sift-down index 3 outside heap of size 3")]
    fn sift_down_rejects_out_of_heap_index() {
        let mut v = vec![3, 1, 2];
        heap_sort::sift_down(&mut v, 3, 3);
    }

    #[test]
    #[should_panic(expected = "sort range end 9 out of bounds")]
    fn merge_sort_rejects_out_of_bounds_end() {
        let mut v = vec![3, 1, 2];
        merge_sort::sort_range(&mut v, 0, 9);
    }

    #[test]
    #[should_panic(expected = "invalid merge region")]
    fn merge_rejects_unordered_indices() {
        let mut v = vec![1, 2, 3, 4];
        merge_sort::merge(&mut v, 2, 1, 3);
    }
}
