//! Leveled debug assertions. The level determines how expensive the checks are allowed to be;
//! tests and the `debug-checks` feature run with every check enabled.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const LEARNSAT_ASSERT_LEVEL_DEFINITION: u8 = LEARNSAT_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const LEARNSAT_ASSERT_LEVEL_DEFINITION: u8 = LEARNSAT_ASSERT_EXTREME;

pub const LEARNSAT_ASSERT_SIMPLE: u8 = 1;
pub const LEARNSAT_ASSERT_MODERATE: u8 = 2;
pub const LEARNSAT_ASSERT_ADVANCED: u8 = 3;
pub const LEARNSAT_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! learnsat_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::LEARNSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LEARNSAT_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! learnsat_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::LEARNSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LEARNSAT_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! learnsat_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::LEARNSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LEARNSAT_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! learnsat_assert_eq_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::LEARNSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LEARNSAT_ASSERT_MODERATE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! learnsat_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::LEARNSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LEARNSAT_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! learnsat_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::LEARNSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::LEARNSAT_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
