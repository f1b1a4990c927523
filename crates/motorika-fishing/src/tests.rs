#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use motorika_core::enums::{CatchOutcome, SkillCheckState, SweepDirection};
    use motorika_core::error::{ProximityError, SkillCheckError};
    use motorika_core::types::Position;

    use crate::proximity::{ActiveChanged, ProximitySelector};
    use crate::skill_check::{SkillCheckConfig, SkillCheckTimer};

    fn timer(min: f64, max: f64, low: f64, high: f64, speed: f64) -> SkillCheckTimer {
        let mut timer = SkillCheckTimer::default();
        timer.configure(min, max, low, high, speed).unwrap();
        timer
    }

    // ---- Skill check: configuration ----

    #[test]
    fn test_configure_rejects_malformed_thresholds() {
        let mut t = SkillCheckTimer::default();
        let cases = [
            (6.0, 1.0, 3.0, 4.0, 1.0),
            (1.0, 1.0, 1.0, 1.0, 1.0),
            (1.0, 6.0, 3.0, 4.0, 0.0),
            (1.0, 6.0, 3.0, 4.0, -2.0),
            (1.0, 6.0, 4.0, 3.0, 1.0),
            (1.0, 6.0, 0.5, 4.0, 1.0),
            (1.0, 6.0, 3.0, 6.5, 1.0),
            (1.0, f64::NAN, 3.0, 4.0, 1.0),
        ];
        for (min, max, low, high, speed) in cases {
            let err = t.configure(min, max, low, high, speed).unwrap_err();
            assert!(
                matches!(err, SkillCheckError::InvalidConfig(_)),
                "({min}, {max}, {low}, {high}, {speed}) should be rejected, got {err:?}"
            );
        }
        // Failed configures keep the previous (default) configuration.
        assert_eq!(*t.config(), SkillCheckConfig::default());
    }

    #[test]
    fn test_configure_accepts_window_on_bounds() {
        let mut t = SkillCheckTimer::default();
        assert!(t.configure(1.0, 6.0, 1.0, 6.0, 1.0).is_ok());
        assert!(t.configure(1.0, 6.0, 3.0, 3.0, 0.5).is_ok());
    }

    #[test]
    fn test_configure_returns_to_idle() {
        let mut t = timer(1.0, 6.0, 3.0, 4.0, 1.0);
        t.start();
        t.tick(2.0).unwrap();
        t.configure(0.0, 10.0, 4.0, 5.0, 2.0).unwrap();
        assert_eq!(t.state(), SkillCheckState::Idle);
        assert_eq!(t.scale(), 0.0);
    }

    // ---- Skill check: lifecycle ----

    #[test]
    fn test_concrete_success_then_failure() {
        let mut t = timer(1.0, 6.0, 3.0, 4.0, 1.0);
        t.start();
        t.tick(2.5).unwrap();
        assert_eq!(t.scale(), 3.5);
        assert_eq!(t.commit(), Ok(CatchOutcome::Success));

        t.reset();
        t.start();
        t.tick(0.5).unwrap();
        assert_eq!(t.scale(), 1.5);
        assert_eq!(t.commit(), Ok(CatchOutcome::Failure));
    }

    #[test]
    fn test_commit_twice_fails_already_resolved() {
        let mut t = timer(1.0, 6.0, 3.0, 4.0, 1.0);
        t.start();
        t.tick(2.5).unwrap();
        t.commit().unwrap();
        assert_eq!(t.commit(), Err(SkillCheckError::AlreadyResolved));
        assert_eq!(t.outcome(), Some(CatchOutcome::Success));

        // A fresh start allows another commit.
        t.start();
        assert_eq!(t.outcome(), None);
        assert_eq!(t.commit(), Ok(CatchOutcome::Failure));
    }

    #[test]
    fn test_tick_and_commit_require_running() {
        let mut t = timer(1.0, 6.0, 3.0, 4.0, 1.0);
        assert_eq!(t.tick(0.1), Err(SkillCheckError::NotRunning));
        assert_eq!(t.commit(), Err(SkillCheckError::NotRunning));

        t.start();
        t.commit().unwrap();
        assert_eq!(t.tick(0.1), Err(SkillCheckError::NotRunning));
        assert_eq!(t.state(), SkillCheckState::Resolved);
    }

    #[test]
    fn test_tick_rejects_bad_delta() {
        let mut t = timer(1.0, 6.0, 3.0, 4.0, 1.0);
        t.start();
        assert_eq!(t.tick(-0.1), Err(SkillCheckError::InvalidDelta(-0.1)));
        assert!(matches!(
            t.tick(f64::INFINITY),
            Err(SkillCheckError::InvalidDelta(_))
        ));
        assert_eq!(t.scale(), 1.0);
        assert!(t.tick(0.0).is_ok());
        assert_eq!(t.scale(), 1.0);
    }

    #[test]
    fn test_start_is_reentrant() {
        let mut t = timer(1.0, 6.0, 3.0, 4.0, 1.0);
        t.start();
        t.tick(5.5).unwrap();
        assert_eq!(t.direction(), SweepDirection::Shrinking);
        t.start();
        assert_eq!(t.scale(), 1.0);
        assert_eq!(t.direction(), SweepDirection::Growing);
        assert_eq!(t.state(), SkillCheckState::Running);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut t = timer(1.0, 6.0, 3.0, 4.0, 1.0);
        t.start();
        t.tick(3.0).unwrap();
        t.reset();
        assert_eq!(t.state(), SkillCheckState::Idle);
        assert_eq!(t.scale(), 1.0);

        t.start();
        t.tick(3.0).unwrap();
        t.commit().unwrap();
        t.reset();
        assert_eq!(t.state(), SkillCheckState::Idle);
        assert_eq!(t.outcome(), None);
    }

    // ---- Skill check: oscillation ----

    #[test]
    fn test_bounce_at_max_clamps_and_flips() {
        let mut t = timer(1.0, 6.0, 3.0, 4.0, 1.0);
        t.start();
        t.tick(5.0).unwrap();
        assert_eq!(t.scale(), 6.0);
        assert_eq!(t.direction(), SweepDirection::Shrinking);

        t.tick(1.5).unwrap();
        assert_eq!(t.scale(), 4.5);
        assert_eq!(t.direction(), SweepDirection::Shrinking);
    }

    #[test]
    fn test_overshoot_reflects_off_bounds() {
        let mut t = timer(1.0, 6.0, 3.0, 4.0, 2.0);
        t.start();
        // 6.5s * 2 = 13 units: up 5, down 5, up 3.
        t.tick(6.5).unwrap();
        assert_eq!(t.scale(), 4.0);
        assert_eq!(t.direction(), SweepDirection::Growing);
    }

    #[test]
    fn test_pass_window_inclusive_at_both_edges() {
        let mut t = timer(1.0, 6.0, 3.0, 4.0, 1.0);
        t.start();
        t.tick(2.0).unwrap();
        assert_eq!(t.scale(), 3.0);
        assert_eq!(t.commit(), Ok(CatchOutcome::Success));

        t.start();
        t.tick(3.0).unwrap();
        assert_eq!(t.scale(), 4.0);
        assert_eq!(t.commit(), Ok(CatchOutcome::Success));

        // On the way back down through the window.
        t.start();
        t.tick(6.5).unwrap();
        assert_eq!(t.scale(), 4.5);
        assert_eq!(t.commit(), Ok(CatchOutcome::Failure));
    }

    #[test]
    fn test_config_period() {
        let config = SkillCheckConfig::with_speed(2.0);
        assert_eq!(config.period_secs(), 5.0);
    }

    proptest! {
        /// Before the first bounce the scale only rises and never passes max.
        #[test]
        fn prop_rises_monotonically_before_first_bounce(
            dts in proptest::collection::vec(0.001f64..0.5, 1..60),
            speed in 0.25f64..4.0,
        ) {
            let mut t = timer(1.0, 6.0, 3.0, 4.0, speed);
            t.start();
            let limit = 5.0 / speed;
            let mut elapsed = 0.0;
            let mut previous = t.scale();
            for dt in dts {
                if elapsed + dt >= limit {
                    break;
                }
                elapsed += dt;
                t.tick(dt).unwrap();
                prop_assert!(t.scale() >= previous);
                prop_assert!(t.scale() <= 6.0);
                prop_assert_eq!(t.direction(), SweepDirection::Growing);
                previous = t.scale();
            }
        }

        /// After exactly one period, however it is sliced, the wave is back at
        /// the lower bound heading up.
        #[test]
        fn prop_full_cycle_returns_to_start(
            (span, cuts) in (1u32..8).prop_flat_map(|span| {
                (Just(span), proptest::collection::vec(1u32..(2 * span * 64), 0..24))
            })
        ) {
            let mut t = timer(1.0, 1.0 + span as f64, 1.0, 1.0 + span as f64, 1.0);
            t.start();

            let mut cuts = cuts;
            cuts.sort_unstable();
            cuts.dedup();
            cuts.push(2 * span * 64);

            let mut last = 0u32;
            for cut in cuts {
                t.tick((cut - last) as f64 / 64.0).unwrap();
                prop_assert!(t.scale() >= 1.0 && t.scale() <= 1.0 + span as f64);
                last = cut;
            }

            prop_assert_eq!(t.scale(), 1.0);
            prop_assert_eq!(t.direction(), SweepDirection::Growing);
        }

        /// Commit passes exactly when the scale is inside the window.
        #[test]
        fn prop_commit_matches_window(steps in 0u32..(10 * 64)) {
            let mut t = timer(1.0, 6.0, 3.0, 4.0, 1.0);
            t.start();
            t.tick(steps as f64 / 64.0).unwrap();
            let scale = t.scale();
            let expected = if (3.0..=4.0).contains(&scale) {
                CatchOutcome::Success
            } else {
                CatchOutcome::Failure
            };
            prop_assert_eq!(t.commit(), Ok(expected));
            prop_assert_eq!(t.commit(), Err(SkillCheckError::AlreadyResolved));
        }
    }

    // ---- Proximity selector ----

    fn selector() -> ProximitySelector<&'static str> {
        ProximitySelector::new(10.0).unwrap()
    }

    #[test]
    fn test_concrete_nearest_then_exit() {
        let mut s = selector();
        let mut changes = Vec::new();

        changes.extend(s.on_enter("A", Position::new(5.0, 0.0)).unwrap());
        changes.extend(s.on_enter("B", Position::new(0.0, 2.0)).unwrap());
        assert_eq!(s.active(), Some(&"B"));

        changes.extend(s.on_exit(&"B"));
        assert_eq!(s.active(), Some(&"A"));

        // First enter of A activates it, B then wins, exit of B returns to A.
        assert_eq!(
            changes,
            vec![
                ActiveChanged {
                    previous: None,
                    current: Some("A")
                },
                ActiveChanged {
                    previous: Some("A"),
                    current: Some("B")
                },
                ActiveChanged {
                    previous: Some("B"),
                    current: Some("A")
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_enter_is_absorbed() {
        let mut s = selector();
        s.on_enter("A", Position::new(5.0, 0.0)).unwrap();
        let err = s.on_enter("A", Position::new(1.0, 0.0)).unwrap_err();
        assert_eq!(err, ProximityError::DuplicateEnter);
        assert_eq!(s.len(), 1);
        assert_eq!(s.active(), Some(&"A"));
    }

    #[test]
    fn test_exit_unknown_is_noop() {
        let mut s = selector();
        s.on_enter("A", Position::new(1.0, 0.0)).unwrap();
        assert_eq!(s.on_exit(&"Z"), None);
        assert_eq!(s.active(), Some(&"A"));
    }

    #[test]
    fn test_last_exit_unsets_active() {
        let mut s = selector();
        s.on_enter("A", Position::new(1.0, 0.0)).unwrap();
        let change = s.on_exit(&"A").unwrap();
        assert_eq!(change.previous, Some("A"));
        assert_eq!(change.current, None);
        assert!(s.is_empty());
        assert_eq!(s.active(), None);
    }

    #[test]
    fn test_tie_goes_to_earliest_entered() {
        let mut s = selector();
        s.on_enter("first", Position::new(3.0, 0.0)).unwrap();
        s.on_enter("second", Position::new(-3.0, 0.0)).unwrap();
        s.on_enter("third", Position::new(0.0, 3.0)).unwrap();
        assert_eq!(s.active(), Some(&"first"));

        s.on_exit(&"first");
        assert_eq!(s.active(), Some(&"second"));
    }

    #[test]
    fn test_recompute_follows_actor() {
        let mut s = selector();
        s.on_enter("west", Position::new(-4.0, 0.0)).unwrap();
        s.on_enter("east", Position::new(4.0, 0.0)).unwrap();
        assert_eq!(s.active(), Some(&"west"));

        // No-op recompute does not notify.
        assert_eq!(s.recompute_nearest(Position::new(0.0, 0.0)), None);
        assert_eq!(s.recompute_nearest(Position::new(-1.0, 0.0)), None);

        let change = s.recompute_nearest(Position::new(2.0, 0.0)).unwrap();
        assert_eq!(change.previous, Some("west"));
        assert_eq!(change.current, Some("east"));
    }

    #[test]
    fn test_set_actor_defers_until_membership_change() {
        let mut s = selector();
        s.on_enter("west", Position::new(-4.0, 0.0)).unwrap();
        s.set_actor(Position::new(4.0, 0.0));
        assert_eq!(s.active(), Some(&"west"));

        s.on_enter("east", Position::new(5.0, 0.0)).unwrap();
        assert_eq!(s.active(), Some(&"east"));
    }

    #[test]
    fn test_clear_notifies_once() {
        let mut s = selector();
        s.on_enter("A", Position::new(1.0, 0.0)).unwrap();
        s.on_enter("B", Position::new(2.0, 0.0)).unwrap();
        assert!(s.clear().is_some());
        assert_eq!(s.clear(), None);
    }

    #[test]
    fn test_radius() {
        let mut s = selector();
        assert!(s.in_range(Position::new(0.0, 0.0), Position::new(6.0, 8.0)));
        assert!(!s.in_range(Position::new(0.0, 0.0), Position::new(6.0, 8.1)));

        assert_eq!(s.set_radius(0.0), Err(ProximityError::InvalidRadius(0.0)));
        assert!(ProximitySelector::<u32>::new(f64::NAN).is_err());
        s.set_radius(20.0).unwrap();
        assert_eq!(s.radius(), 20.0);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Enter(u8, f64, f64),
        Exit(u8),
        Move(f64, f64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..6, -20.0f64..20.0, -20.0f64..20.0).prop_map(|(id, x, y)| Op::Enter(id, x, y)),
            (0u8..6).prop_map(Op::Exit),
            (-20.0f64..20.0, -20.0f64..20.0).prop_map(|(x, y)| Op::Move(x, y)),
        ]
    }

    proptest! {
        /// Active is always the nearest candidate (earliest on ties), unset
        /// when empty, and every notification is a real identity change.
        #[test]
        fn prop_active_is_nearest_candidate(ops in proptest::collection::vec(op(), 1..80)) {
            let mut s: ProximitySelector<u8> = ProximitySelector::new(50.0).unwrap();
            let mut model: Vec<(u8, Position)> = Vec::new();
            let mut actor = Position::default();

            for op in ops {
                let before = s.active().copied();
                let change = match op {
                    Op::Enter(id, x, y) => {
                        let duplicate = model.iter().any(|(m, _)| *m == id);
                        let result = s.on_enter(id, Position::new(x, y));
                        if duplicate {
                            prop_assert_eq!(result.clone(), Err(ProximityError::DuplicateEnter));
                        } else {
                            model.push((id, Position::new(x, y)));
                        }
                        result.ok().flatten()
                    }
                    Op::Exit(id) => {
                        model.retain(|(m, _)| *m != id);
                        s.on_exit(&id)
                    }
                    Op::Move(x, y) => {
                        actor = Position::new(x, y);
                        s.recompute_nearest(actor)
                    }
                };

                let mut expected: Option<(u8, f64)> = None;
                for (id, pos) in &model {
                    let d = actor.range_to(pos);
                    if expected.map_or(true, |(_, best)| d < best) {
                        expected = Some((*id, d));
                    }
                }
                let expected = expected.map(|(id, _)| id);
                prop_assert_eq!(s.active().copied(), expected);
                prop_assert_eq!(s.len(), model.len());

                match change {
                    Some(c) => {
                        prop_assert_eq!(c.previous, before);
                        prop_assert_eq!(c.current, expected);
                        prop_assert_ne!(c.previous, c.current);
                    }
                    None => prop_assert_eq!(before, expected),
                }
            }
        }
    }

    #[test]
    fn test_active_changed_serde() {
        let change = ActiveChanged {
            previous: Some(3u32),
            current: None,
        };
        let json = serde_json::to_string(&change).unwrap();
        let back: ActiveChanged<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(change, back);
    }
}
