use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use super::{Interpolation, ResizeOptions};
use crate::error::ResizeError;
use crate::kernel::Kernel;

#[test]
fn interpolation_try_from_known_values() {
    assert_eq!(Interpolation::try_from(0).unwrap(), Interpolation::Nearest);
    assert_eq!(Interpolation::try_from(1).unwrap(), Interpolation::Linear);
    assert_eq!(
        Interpolation::try_from(2).unwrap(),
        Interpolation::CatmullRom
    );
    assert_eq!(Interpolation::try_from(3).unwrap(), Interpolation::Lanczos);
}

#[quickcheck]
fn interpolation_try_from_unknown_values(value: i64) -> TestResult {
    if (0..4).contains(&value) {
        return TestResult::discard();
    }
    TestResult::from_bool(
        Interpolation::try_from(value) == Err(ResizeError::UnknownKernel { value }),
    )
}

#[test]
fn nearest_has_no_kernel() {
    assert_eq!(Interpolation::Nearest.kernel(), None);
    assert_eq!(Interpolation::Linear.kernel(), Some(Kernel::Linear));
    assert_eq!(Interpolation::CatmullRom.kernel(), Some(Kernel::CatmullRom));
    assert_eq!(Interpolation::Lanczos.kernel(), Some(Kernel::Lanczos));
}

#[test]
fn options_default_is_sequential() {
    assert!(!ResizeOptions::default().parallel);
    assert!(ResizeOptions::default().parallel(true).parallel);
}
