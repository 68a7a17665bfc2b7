//! The counter: a pure state machine with no dependencies.

use crate::action::Action;
use serde::Serialize;
use unistate_core::reducer::Reducer;

/// Counter state
///
/// Has no clamp in either direction; stepping past `i64::MAX` or
/// `i64::MIN` wraps around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CounterState {
    /// Current count value
    pub value: i64,
}

/// Counter reducer
///
/// Handles `counter/INCREMENT` and `counter/DECREMENT`; every other action
/// leaves the state untouched.
#[derive(Debug, Clone, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = Action;
    type Environment = ();

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            Action::Increment => {
                state.value = state.value.wrapping_add(1);
            },
            Action::Decrement => {
                state.value = state.value.wrapping_sub(1);
            },
            Action::ChangeInput(_) | Action::Create(_) | Action::Remove(_) | Action::Toggle(_) => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todos::TodoId;
    use proptest::prelude::*;
    use unistate_testing::ReducerTest;

    #[test]
    fn test_increment() {
        ReducerTest::new(CounterReducer::new())
            .with_env(())
            .given_state(CounterState { value: 0 })
            .when_action(Action::Increment)
            .then_state(|state| assert_eq!(state.value, 1))
            .run();
    }

    #[test]
    fn test_decrement_goes_negative() {
        ReducerTest::new(CounterReducer::new())
            .with_env(())
            .given_state(CounterState::default())
            .when_action(Action::Decrement)
            .when_action(Action::Decrement)
            .then_state(|state| assert_eq!(state.value, -2))
            .run();
    }

    #[test]
    fn test_steps_wrap_at_the_bounds() {
        ReducerTest::new(CounterReducer::new())
            .with_env(())
            .given_state(CounterState { value: i64::MAX })
            .when_action(Action::Increment)
            .then_state(|state| assert_eq!(state.value, i64::MIN))
            .run();

        ReducerTest::new(CounterReducer::new())
            .with_env(())
            .given_state(CounterState { value: i64::MIN })
            .when_action(Action::Decrement)
            .then_state(|state| assert_eq!(state.value, i64::MAX))
            .run();
    }

    #[test]
    fn test_todo_actions_are_ignored() {
        ReducerTest::new(CounterReducer::new())
            .with_env(())
            .given_state(CounterState { value: 5 })
            .when_action(Action::change_input("x"))
            .when_action(Action::create("x"))
            .when_action(Action::toggle(TodoId::new(0)))
            .when_action(Action::remove(TodoId::new(0)))
            .then_unchanged()
            .run();
    }

    proptest! {
        #[test]
        fn value_is_sum_of_steps(steps in prop::collection::vec(any::<bool>(), 0..200)) {
            let mut state = CounterState::default();
            let mut expected = 0_i64;
            for up in steps {
                if up {
                    CounterReducer.reduce(&mut state, Action::Increment, &());
                    expected += 1;
                } else {
                    CounterReducer.reduce(&mut state, Action::Decrement, &());
                    expected -= 1;
                }
            }
            prop_assert_eq!(state.value, expected);
        }
    }
}
