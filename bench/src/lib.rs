use rand::Rng;
use rand::SeedableRng;

/// Seeded balanced parentheses of roughly `len` characters
///
/// `depth` is the probability of opening another bracket while one is open.
pub fn demo_data_gen(len: usize, depth: f64) -> String {
    let mut res = String::new();
    let mut rng = rand_xorshift::XorShiftRng::from_seed([
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
    ]);
    let mut nested_ness = 0;
    let len = ((len / 2) + 1) * 2;
    for i in 0..len {
        if nested_ness == (len - i) {
            res.push(')');
            nested_ness -= 1;
        } else if nested_ness == 0 {
            res.push('(');
            nested_ness = 1;
        } else if rng.gen_range(0.0, 1.0) < depth {
            res.push('(');
            nested_ness += 1;
        } else {
            res.push(')');
            nested_ness -= 1;
        }
    }
    res
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_demo_data_is_balanced() {
        for &depth in &[0.1, 0.5, 0.9] {
            let data = demo_data_gen(100, depth);
            assert_eq!(data.len(), 102);
            let mut open = 0_i64;
            for c in data.chars() {
                open += if c == '(' { 1 } else { -1 };
                assert!(open >= 0);
            }
            assert_eq!(open, 0);
        }
    }

    #[test]
    fn test_demo_data_is_seeded() {
        assert_eq!(demo_data_gen(64, 0.5), demo_data_gen(64, 0.5));
    }
}
