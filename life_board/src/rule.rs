// rule.rs - Conway's B3/S23 transition rule

/// Next state of a cell given its current state and its live neighbor count.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cell_survives_only_with_two_or_three() {
        for n in 0..=8u8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n} neighbors");
        }
    }

    #[test]
    fn dead_cell_is_born_only_with_three() {
        for n in 0..=8u8 {
            assert_eq!(next_state(false, n), n == 3, "dead with {n} neighbors");
        }
    }
}
