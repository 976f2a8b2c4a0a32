use crate::KernelContext;
use crate::error::Error;

#[test]
fn test_input_type_mismatch() {
    let ctx = KernelContext::new("k").with_input(1.0f32);
    let err = ctx.input::<f64>(0).unwrap_err();
    assert_eq!(err, Error::ArgumentMismatch { kernel: "k".into(), index: 0, expected: "f64" });
}

#[test]
fn test_missing_attr() {
    let ctx = KernelContext::new("k").with_attr(0.5);
    assert_eq!(ctx.attr(0).unwrap(), 0.5);
    assert!(matches!(ctx.attr(1), Err(Error::ArgumentMismatch { index: 1, .. })));
}
