use glam::Vec3;
use quantum_cams::core::{LaserSequencer, LaserState, BEAM_LIGHT_INTENSITY};

fn fired() -> LaserSequencer {
    let mut laser = LaserSequencer::new();
    assert!(laser.fire(Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0)));
    laser
}

#[cfg(test)]
mod sequence_tests {
    use super::*;

    #[test]
    fn test_second_fire_is_ignored() {
        let mut laser = fired();
        laser.update(1.0);
        assert!(!laser.fire(Vec3::ONE, Vec3::ZERO));
        assert_eq!(laser.shot().unwrap().source, Vec3::ZERO);
        assert!((laser.elapsed() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_completes_once_after_full_duration() {
        let mut laser = fired();
        let mut time = 0.0;
        let mut completed_at = Vec::new();

        for _ in 0..800 {
            time += 0.01;
            if laser.update(0.01).is_some() {
                completed_at.push(time);
            }
        }

        assert_eq!(completed_at.len(), 1);
        assert!((completed_at[0] - LaserSequencer::duration()).abs() < 0.05);
        assert_eq!(laser.state(), LaserState::Idle);
        assert!(!laser.frame().beam_visible);
    }

    #[test]
    fn test_stage_table() {
        let mut laser = fired();
        let mut time = 0.0;
        let samples = [
            (0.5, false),
            (1.52, true),
            (1.6, false),
            (1.67, true),
            (1.9, false),
            (3.0, true),
            (5.5, false),
            (6.0, false),
        ];

        for (at, beam) in samples {
            laser.update(at - time);
            time = at;
            let frame = laser.frame();
            assert_eq!(frame.beam_visible, beam, "beam at {}", at);
            let expected = if beam { BEAM_LIGHT_INTENSITY } else { 0.0 };
            assert_eq!(frame.light_intensity, expected, "light at {}", at);
        }
    }

    #[test]
    fn test_idle_update_does_nothing() {
        let mut laser = LaserSequencer::new();
        assert!(laser.update(10.0).is_none());
        assert_eq!(laser.state(), LaserState::Idle);
    }

    #[test]
    fn test_can_fire_again_after_completion() {
        let mut laser = fired();
        assert!(laser.update(7.0).is_some());
        assert!(laser.fire(Vec3::ZERO, Vec3::X));
    }
}
