use std::sync::{Arc, Mutex};
use std::thread;

use arithmos::{compute_value, CalculationMethod, Selection};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn many_threads_share_the_table() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let text = "ΑΒΓ".repeat(1000 + i);
                compute_value(&text, CalculationMethod::GEMATRIA).unwrap()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), 6 * (1000 + i as u64));
    }
}

#[test]
fn shared_selection_behind_mutex() {
    let slot = Arc::new(Mutex::new(Selection::default()));
    let handles: Vec<_> = (0..8)
        .map(|bit| {
            let slot = Arc::clone(&slot);
            thread::spawn(move || {
                let m = CalculationMethod::from_bits_truncate(1 << bit);
                // each method toggled three times ends up set
                for _ in 0..3 {
                    slot.lock().unwrap().toggle(m);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(slot.lock().unwrap().current(), CalculationMethod::ALL);
}

#[test]
fn random_text_skips_noise() {
    let letters: Vec<char> = "ABCXYZΑΩϠאתץ".chars().collect();
    let noise: Vec<char> = "abc 123!?.,αω\tЖ".chars().collect();
    let mut rng = StdRng::seed_from_u64(0x6A);
    for _ in 0..200 {
        let len = rng.gen_range(0..64);
        let mut text = String::new();
        let mut clean = String::new();
        for _ in 0..len {
            if rng.gen_bool(0.5) {
                let c = letters[rng.gen_range(0..letters.len())];
                text.push(c);
                clean.push(c);
            } else {
                text.push(noise[rng.gen_range(0..noise.len())]);
            }
        }
        for m in CalculationMethod::singles() {
            assert_eq!(compute_value(&text, m).unwrap(), compute_value(&clean, m).unwrap());
        }
    }
}
