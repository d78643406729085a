/// `max` usable in `const fn`, where `Ord::max` is not.
macro_rules! max {
    ($a:expr, $b:expr) => {
        if $a > $b { $a } else { $b }
    };
}
