//! The fixed ladder of power-of-two size classes.
//!
//! Every pooled request is rounded up to one of these capacities. The ladder
//! shape is part of the observable contract: callers may precompute bucket
//! indices, so the table never changes at runtime.

/// Nominal capacities of the recycling classes, smallest first.
pub const LADDER: [usize; 15] = [
    4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536,
];

/// Number of size classes.
pub const CLASS_COUNT: usize = LADDER.len();

/// Smallest pooled capacity. Requests below it still round up to this class.
pub const SMALLEST_CLASS: usize = LADDER[0];

/// Largest pooled capacity. Requests above it bypass the pools entirely.
pub const LARGEST_CLASS: usize = LADDER[CLASS_COUNT - 1];

/// Immutable descriptor of one size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeClass {
    pub index: usize,
    pub capacity: usize,
}

/// All classes in ladder order.
pub fn classes() -> impl Iterator<Item = SizeClass> {
    LADDER
        .iter()
        .enumerate()
        .map(|(index, &capacity)| SizeClass { index, capacity })
}

/// Index of the smallest class whose capacity is >= `capacity`, or `None`
/// when the request exceeds [`LARGEST_CLASS`] and must bypass the pools.
///
/// A request of exactly a class capacity selects that class, not the next
/// one up.
pub fn class_for_capacity(capacity: usize) -> Option<usize> {
    if capacity > LARGEST_CLASS {
        return None;
    }
    let rounded = capacity.next_power_of_two().max(SMALLEST_CLASS);
    Some((rounded.trailing_zeros() - SMALLEST_CLASS.trailing_zeros()) as usize)
}

/// Index of the class whose capacity is exactly `len`, or `None` when `len`
/// is not one of the ladder capacities.
///
/// Used on the recycle path, where routing goes by the true backing length
/// rather than by a requested minimum.
pub fn class_for_len(len: usize) -> Option<usize> {
    if len < SMALLEST_CLASS || len > LARGEST_CLASS || !len.is_power_of_two() {
        return None;
    }
    Some((len.trailing_zeros() - SMALLEST_CLASS.trailing_zeros()) as usize)
}
