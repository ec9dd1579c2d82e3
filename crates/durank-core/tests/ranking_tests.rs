use durank_core::{Entry, RankedTopSet};
use std::num::NonZeroUsize;
use std::path::PathBuf;

fn ranked(capacity: usize) -> RankedTopSet {
    RankedTopSet::new(NonZeroUsize::new(capacity).unwrap())
}

fn offer_sizes(set: &mut RankedTopSet, sizes: &[u64]) {
    for (i, &size) in sizes.iter().enumerate() {
        set.offer(Entry::file(format!("file{i}"), 1, size));
    }
}

fn paths(set: &RankedTopSet) -> Vec<PathBuf> {
    set.iter().map(|e| e.path().to_path_buf()).collect()
}

/// Small deterministic generator so the sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn test_scenario_largest_three() {
    let mut set = ranked(3);
    offer_sizes(&mut set, &[5, 3, 8, 1, 9]);

    let sizes: Vec<u64> = set.iter().map(Entry::size).collect();
    assert_eq!(sizes, vec![9, 8, 5]);
}

#[test]
fn test_scenario_equal_sizes_keep_first_arrivals() {
    let mut set = ranked(2);
    offer_sizes(&mut set, &[4, 4, 4]);

    assert_eq!(
        paths(&set),
        vec![PathBuf::from("file0"), PathBuf::from("file1")]
    );
}

#[test]
fn test_discard_leaves_full_set_unchanged() {
    let mut set = ranked(3);
    offer_sizes(&mut set, &[30, 20, 10]);
    let before = set.entries().to_vec();

    assert!(!set.offer(Entry::file("smaller", 1, 5)));
    assert!(!set.offer(Entry::file("equal", 1, 10)));
    assert_eq!(set.entries(), before.as_slice());
}

#[test]
fn test_fill_phase_sorts_with_stable_ties() {
    let mut set = ranked(5);
    offer_sizes(&mut set, &[2, 7, 2, 7]);

    assert_eq!(
        paths(&set),
        vec![
            PathBuf::from("file1"),
            PathBuf::from("file3"),
            PathBuf::from("file0"),
            PathBuf::from("file2"),
        ]
    );
}

#[test]
fn test_full_phase_places_equal_size_after_earlier_members() {
    let mut set = ranked(3);
    offer_sizes(&mut set, &[9, 6, 1]);

    // 6 beats only the 1, so it lands under the existing 6.
    assert!(set.offer(Entry::file("late", 1, 6)));
    assert_eq!(
        paths(&set),
        vec![
            PathBuf::from("file0"),
            PathBuf::from("file1"),
            PathBuf::from("late"),
        ]
    );
}

#[test]
fn test_bounded_and_sorted_for_random_sequences() {
    let mut rng = Lcg(42);

    for capacity in [1, 2, 3, 7, 16] {
        let mut set = ranked(capacity);
        for i in 0..500 {
            let size = rng.next_u64() % 50;
            set.offer(Entry::file(format!("f{i}"), 1, size));

            assert!(set.len() <= capacity);
            assert!(
                set.entries()
                    .windows(2)
                    .all(|pair| pair[0].size() >= pair[1].size())
            );
        }
        assert!(set.is_full());
    }
}

#[test]
fn test_matches_stable_sort_of_everything_offered() {
    let mut rng = Lcg(7);

    for capacity in [1, 4, 10] {
        let mut set = ranked(capacity);
        let mut all = Vec::new();

        for i in 0..300 {
            let entry = Entry::file(format!("f{i}"), 1, rng.next_u64() % 20);
            all.push(entry.clone());
            set.offer(entry);
        }

        all.sort_by(|a, b| b.size().cmp(&a.size()));
        all.truncate(capacity);
        assert_eq!(set.entries(), all.as_slice());
    }
}

#[test]
fn test_directories_can_be_ranked_too() {
    let mut set = ranked(2);
    set.offer(Entry::directory("dir", 1));
    set.offer(Entry::file("file", 1, 1));

    assert!(set.entries()[0].is_file());
    assert!(set.entries()[1].is_dir());
}
