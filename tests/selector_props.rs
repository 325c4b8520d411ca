use arithmos::{is_selected, toggle, CalculationMethod, Selection};
use quickcheck::quickcheck;

fn sel(bits: u8) -> CalculationMethod {
    CalculationMethod::from_bits_truncate(bits)
}

quickcheck! {
    fn toggle_twice_is_identity(state: u8, method: u8) -> bool {
        toggle(toggle(sel(state), sel(method)), sel(method)) == sel(state)
    }

    fn toggles_commute(state: u8, a: u8, b: u8) -> bool {
        let (a, b) = (sel(1 << (a % 8)), sel(1 << (b % 8)));
        toggle(toggle(sel(state), a), b) == toggle(toggle(sel(state), b), a)
    }

    fn toggle_flips_membership(state: u8, bit: u8) -> bool {
        let m = sel(1 << (bit % 8));
        is_selected(toggle(sel(state), m), m) != is_selected(sel(state), m)
    }

    fn selected_means_overlap(state: u8, method: u8) -> bool {
        is_selected(sel(state), sel(method)) == (state & method != 0)
    }

    fn selection_slot_accumulates(toggles: Vec<u8>) -> bool {
        let mut slot = Selection::default();
        let mut expected = 0u8;
        for t in &toggles {
            let m = sel(1 << (t % 8));
            slot.toggle(m);
            expected ^= m.bits();
        }
        slot.current().bits() == expected
    }
}

#[test]
fn empty_selection_is_identity() {
    for m in CalculationMethod::singles() {
        assert_eq!(toggle(CalculationMethod::empty(), m), m);
        assert_eq!(toggle(m, CalculationMethod::empty()), m);
    }
}

#[test]
fn checkbox_walkthrough() {
    let mut slot = Selection::new(CalculationMethod::GEMATRIA);
    slot.toggle(CalculationMethod::MISPAR_SHEMI);
    slot.toggle(CalculationMethod::GEMATRIA);
    assert!(!slot.is_selected(CalculationMethod::GEMATRIA));
    assert!(slot.is_selected(CalculationMethod::MISPAR_SHEMI));
    assert_eq!(slot.current().to_string(), "MisparShemi");
}
