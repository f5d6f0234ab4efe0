#![allow(dead_code)]

use rankview::loader::ViewState;

/// Initialize tracing for tests with proper test output handling
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Final state of a load, panicking if nothing but `Loading` was applied
pub fn settled<T: Clone>(states: &[ViewState<T>]) -> ViewState<T> {
    match states.last() {
        Some(ViewState::Loading) | None => panic!("load never settled: {} states", states.len()),
        Some(state) => state.clone(),
    }
}
