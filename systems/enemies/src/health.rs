//! Health scaling by stage and wave.

use elemental_defence_balance::WaveTable;

/// Base health of a non-boss enemy before its type multiplier.
#[must_use]
pub fn calc_base_health(stage: u32, wave: u32, table: &WaveTable) -> u32 {
    let stage_factor = 1.0 + stage.saturating_sub(1) as f32 * table.stage_growth;
    let wave_factor = 1.0 + wave.saturating_sub(1) as f32 * table.wave_growth;
    let late_bonus = if wave >= table.late_wave_threshold {
        table.late_wave_bonus
    } else {
        1.0
    };
    (table.base_health * stage_factor * wave_factor * late_bonus).floor() as u32
}

/// Health of a boss, scaled by stage only.
#[must_use]
pub fn calc_boss_health(stage: u32, table: &WaveTable) -> u32 {
    let stage_factor = 1.0 + stage.saturating_sub(1) as f32 * table.boss_stage_growth;
    (table.boss_base_health * stage_factor).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_wave_uses_base_health() {
        let table = WaveTable::default();
        assert_eq!(calc_base_health(1, 1, &table), table.base_health as u32);
    }

    #[test]
    fn health_grows_with_stage_and_wave() {
        let table = WaveTable::default();
        let expected = (30.0_f32 * 1.5 * (1.0 + 4.0 * 0.15)).floor() as u32;
        assert_eq!(calc_base_health(2, 5, &table), expected);
        assert!(calc_base_health(2, 5, &table) > calc_base_health(1, 5, &table));
    }

    #[test]
    fn late_waves_receive_the_bonus() {
        let table = WaveTable::default();
        let before = calc_base_health(1, table.late_wave_threshold - 1, &table);
        let after = calc_base_health(1, table.late_wave_threshold, &table);
        let without_bonus = (table.base_health
            * (1.0 + (table.late_wave_threshold - 1) as f32 * table.wave_growth))
            .floor() as u32;
        assert!(after > before);
        assert!(after > without_bonus);
    }

    #[test]
    fn boss_health_ignores_wave() {
        let table = WaveTable::default();
        assert_eq!(calc_boss_health(1, &table), 600);
        assert_eq!(calc_boss_health(2, &table), 1_080);
    }
}
