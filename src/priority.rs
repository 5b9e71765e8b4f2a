use std::fmt::Debug;

/// An ordered priority value.
///
/// Priorities only need a total order; the queue never does arithmetic on
/// them. `Copy` keeps sift comparisons free of clone noise.
pub trait Priority: Copy + Debug + PartialEq + Eq + PartialOrd + Ord {}

impl<P> Priority for P where P: Copy + Debug + PartialEq + Eq + PartialOrd + Ord {}
