use super::*;

#[test]
fn init_is_idempotent() {
    let a = init();
    let b = init();
    assert!(std::ptr::eq(a, b));
    assert!(engine().is_some_and(|e| std::ptr::eq(e, a)));
}

#[test]
fn resolves_eases_and_default_profile() {
    let e = init();
    assert_eq!(e.ease("power4.out").unwrap(), Ease::OutQuint);
    assert_eq!(e.default_profile(), &RevealProfile::default());
}
