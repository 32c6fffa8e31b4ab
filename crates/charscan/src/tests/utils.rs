/// Number of cases each quickcheck property runs.
#[cfg(not(miri))]
pub fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

#[cfg(miri)]
pub fn test_count() -> u64 {
    10
}
