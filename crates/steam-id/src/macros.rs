//! Macros used by this crate.

#![allow(unused_macros, unused_macro_rules)]

/// Asserts that a value matches a pattern.
///
/// # Example
///
/// ```ignore
/// let x = 5;
///
/// assert_matches!(x, 1..=10);
/// assert_matches!(x, 1..=10, "how?");
/// ```
macro_rules! assert_matches {
	($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {
		match $expr {
			$pat $(if $guard)? => {}
			ref actual => ::std::panic!(
				"`{}` did not match `{}` (was `{:?}`)",
				::std::stringify!($expr),
				::std::stringify!($pat),
				actual,
			),
		}
	};
	($expr:expr, $pat:pat $(if $guard:expr)?, $msg:literal $(, $($fmt:tt)*)?) => {
		match $expr {
			$pat $(if $guard)? => {}
			_ => ::std::panic!($msg $(, $($fmt)*)?),
		}
	};
}
