use std::cell::Cell;

use super::*;

fn fallible(fail: bool, released: &Cell<u32>) -> Result<(), &'static str> {
    let _guard = ReleaseOnDrop::new(|| released.set(released.get() + 1));
    if fail {
        return Err("no body");
    }
    Ok(())
}

#[test]
fn release_runs_once_on_success() {
    let released = Cell::new(0);
    assert!(fallible(false, &released).is_ok());
    assert_eq!(released.get(), 1);
}

#[test]
fn release_runs_on_early_error_return() {
    let released = Cell::new(0);
    assert_eq!(fallible(true, &released), Err("no body"));
    assert_eq!(released.get(), 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn save_bytes_is_unavailable_outside_browser() {
    assert_eq!(save_bytes(b"%PDF-1.4", "report.pdf", "application/pdf"), Err(ApiError::Unavailable));
}
