//! Property-based tests for the slide rotator.

#[cfg(test)]
mod tests {
    use crate::config::CarouselConfig;
    use crate::headless::HeadlessSurface;
    use crate::rotator::SlideRotator;
    use crate::state::Direction;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Advance(Direction),
        Complete,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Advance(Direction::Forward)),
            Just(Op::Advance(Direction::Backward)),
            Just(Op::Complete),
        ]
    }

    fn rotator(n: usize) -> SlideRotator<HeadlessSurface<usize>> {
        let slides: Vec<usize> = (0..n).collect();
        let config = CarouselConfig::default();
        SlideRotator::new(slides.clone(), HeadlessSurface::new(slides), &config).unwrap()
    }

    // Completes the transition in flight, whatever its direction.
    fn settle(rotator: &mut SlideRotator<HeadlessSurface<usize>>) {
        while rotator.is_locked() {
            rotator.on_transition_complete();
        }
    }

    proptest! {
        /// Property: k forward steps land on k mod N
        #[test]
        fn forward_steps_wrap_modulo_len(n in 1usize..12, k in 0usize..40) {
            let mut rotator = rotator(n);
            for _ in 0..k {
                rotator.request_advance(Direction::Forward);
                settle(&mut rotator);
            }
            prop_assert_eq!(rotator.active_index(), k % n);
        }

        /// Property: a forward step followed by a backward step is a round trip
        #[test]
        fn forward_then_backward_round_trips(n in 1usize..12, start in 0usize..40) {
            let mut rotator = rotator(n);
            for _ in 0..start {
                rotator.request_advance(Direction::Forward);
                settle(&mut rotator);
            }
            let before = rotator.active_index();

            rotator.request_advance(Direction::Forward);
            settle(&mut rotator);
            rotator.request_advance(Direction::Backward);
            settle(&mut rotator);

            prop_assert_eq!(rotator.active_index(), before);
            prop_assert_eq!(rotator.visible_window(), &[before][..]);
        }

        /// Property: the window holds one slide when idle and two while transitioning
        #[test]
        fn window_size_tracks_state(n in 1usize..8, ops in prop::collection::vec(op(), 0..60)) {
            let mut rotator = rotator(n);
            for op in ops {
                match op {
                    Op::Advance(direction) => { rotator.request_advance(direction); }
                    Op::Complete => rotator.on_transition_complete(),
                }
                let expected = if rotator.is_locked() { 2 } else { 1 };
                prop_assert_eq!(rotator.visible_window().len(), expected);
                prop_assert_eq!(rotator.surface().nodes(), rotator.visible_window());
                prop_assert!(rotator.active_index() < n);
            }
        }

        /// Property: advancing while locked changes nothing
        #[test]
        fn locked_advance_is_a_no_op(
            n in 2usize..8,
            first in prop_oneof![Just(Direction::Forward), Just(Direction::Backward)],
            second in prop_oneof![Just(Direction::Forward), Just(Direction::Backward)],
        ) {
            let mut rotator = rotator(n);
            rotator.request_advance(first);
            let index = rotator.active_index();
            let window = rotator.visible_window().to_vec();

            prop_assert!(!rotator.request_advance(second));
            prop_assert_eq!(rotator.active_index(), index);
            prop_assert_eq!(rotator.visible_window(), &window[..]);
        }
    }
}
