/// Asserts that running `$run` panics. The panic is caught and the value of the block, if any, is
/// discarded, so the test carries on afterwards.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "Expected a panic, but the block completed.")
    };
    ($run:block, $msg:literal) => {{
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = $run;
        }));
        assert!(result.is_err(), $msg);
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
