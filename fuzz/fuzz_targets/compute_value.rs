use arithmos::{breakdown, compute_value, CalculationMethod};
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Some((&bits, rest)) = data.split_first() else {
                return;
            };
            let text = String::from_utf8_lossy(rest);
            let method = CalculationMethod::from_bits_truncate(bits);
            match compute_value(&text, method) {
                Ok(total) => {
                    let parts = breakdown(&text, method).unwrap();
                    assert_eq!(total, parts.iter().map(|p| u64::from(p.value)).sum::<u64>());
                }
                Err(_) => assert!(!method.is_single()),
            }
        });
    }
}
