//! Damage arithmetic shared by both combat directions.
//!
//! Every mitigated hit deals at least one point: defense can soften a blow
//! but never grant immunity. Health never drops below zero.

/// Damage left after the target's defense, floored at 1.
///
/// ```
/// use card_adventure::rules::mitigated_damage;
///
/// assert_eq!(mitigated_damage(10, 1), 9);
/// assert_eq!(mitigated_damage(8, 8), 1);
/// assert_eq!(mitigated_damage(3, 50), 1);
/// ```
#[must_use]
pub fn mitigated_damage(raw_attack: u32, defense: u32) -> u32 {
    raw_attack.saturating_sub(defense).max(1)
}

/// Health after taking `damage`, clamped at 0.
#[must_use]
pub fn health_after(health: u32, damage: u32) -> u32 {
    health.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mitigated_damage_subtracts_defense() {
        assert_eq!(mitigated_damage(15, 3), 12);
        assert_eq!(mitigated_damage(10, 0), 10);
    }

    #[test]
    fn test_mitigated_damage_floor() {
        assert_eq!(mitigated_damage(0, 0), 1);
        assert_eq!(mitigated_damage(5, 5), 1);
        assert_eq!(mitigated_damage(5, u32::MAX), 1);
    }

    #[test]
    fn test_health_after_clamps() {
        assert_eq!(health_after(50, 9), 41);
        assert_eq!(health_after(5, 9), 0);
        assert_eq!(health_after(0, 1), 0);
    }
}
