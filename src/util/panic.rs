#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "assertion failed to panic")
    };
    ($run:block, $msg:literal) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            $msg
        );
        println!("^ panic caught");
    };
    ($run:block, contains $needle:expr) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic"),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    message.contains($needle),
                    "panic message {message:?} should contain {:?}",
                    $needle
                );
                println!("^ panic caught");
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;

/// Installs a logger for the current test binary so `log` output from reshapes and pool traffic
/// shows up with `--nocapture`. Safe to call from every test.
#[allow(unused_macros)]
macro_rules! log_prelude {
    () => {
        let _ = simple_logger::SimpleLogger::new()
            .without_timestamps()
            .with_level(log::LevelFilter::Trace)
            .init();
    };
}

#[allow(unused_imports)]
pub(crate) use log_prelude;
