use crate::logs::RateWindow;
use pretty_assertions::assert_eq;
use std::num::NonZeroUsize;

fn window(capacity: usize) -> RateWindow {
    RateWindow::new(NonZeroUsize::new(capacity).unwrap())
}

#[test]
fn new_window_is_empty() {
    let w = window(10);

    assert_eq!(w.capacity(), 10);
    assert_eq!(w.write_count(), 0);
    assert_eq!(w.cursor(), 0);
    assert!(!w.is_full());
    assert_eq!(w.average(), None);
}

#[test]
fn push_wraps_and_seek_overwrites() {
    let mut w = window(4);

    for v in [1, 2, 3, 4] {
        w.push(v);
    }
    assert_eq!(w.slots(), &[1, 2, 3, 4]);

    for v in [5, 6, 7, 8] {
        w.push(v);
    }
    assert_eq!(w.slots(), &[5, 6, 7, 8]);
    assert_eq!(w.write_count(), 8);

    w.seek(3);
    assert_eq!(w.write_count(), 8);
    w.push(9);
    assert_eq!(w.slots(), &[5, 6, 7, 9]);
    assert_eq!(w.write_count(), 9);
}

#[test]
fn seek_wraps_position() {
    let mut w = window(4);

    w.seek(6);
    assert_eq!(w.cursor(), 2);
    w.push(42);
    assert_eq!(w.slots(), &[0, 0, 42, 0]);
    assert_eq!(w.write_count(), 1);
}

#[test]
fn clear_resets_everything() {
    let mut w = window(4);

    for v in [1, 2, 3, 4, 5] {
        w.push(v);
    }
    assert_eq!(w.slots(), &[5, 2, 3, 4]);
    assert!(w.is_full());

    w.clear();
    assert_eq!(w.slots(), &[0, 0, 0, 0]);
    assert_eq!(w.write_count(), 0);
    assert_eq!(w.cursor(), 0);
    assert!(!w.is_full());

    for v in [6, 7, 8] {
        w.push(v);
    }
    assert_eq!(w.slots(), &[6, 7, 8, 0]);
    assert!(!w.is_full());
}

#[test]
fn full_after_capacity_pushes_with_floor_average() {
    for capacity in 1..=8usize {
        let mut w = window(capacity);
        let values: Vec<u64> = (0..capacity as u64).map(|i| i * 7 + 3).collect();

        for (i, v) in values.iter().enumerate() {
            assert!(!w.is_full(), "capacity {capacity} full after {i} pushes");
            w.push(*v);
        }

        let expected = values.iter().sum::<u64>() / capacity as u64;
        assert!(w.is_full());
        assert_eq!(w.average(), Some(expected), "capacity {capacity}");
    }
}

#[test]
fn average_covers_only_the_trailing_samples() {
    let mut w = window(3);

    for v in [100, 100, 100, 1, 2, 3] {
        w.push(v);
    }

    assert_eq!(w.average(), Some(2));
}
