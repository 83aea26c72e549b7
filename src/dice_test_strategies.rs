use proptest::prelude::*;

use crate::dice::{DiceRoll, Number};

pub(crate) fn offset_strategy() -> impl Strategy<Value = Number> {
    prop_oneof![
        (-100..=100i64).prop_map(Number::Int),
        (-100.0..100.0f64).prop_map(Number::Real),
    ]
}

pub(crate) fn dice_roll_strategy() -> impl Strategy<Value = DiceRoll> {
    (1..=100u32, 1..=100u32, offset_strategy())
        .prop_map(|(faces, num_dice, offset)| DiceRoll::new(faces, num_dice, offset).unwrap())
}

pub(crate) fn dice_rolls_strategy(max_len: usize) -> impl Strategy<Value = Vec<DiceRoll>> {
    prop::collection::vec(dice_roll_strategy(), 1..=max_len)
}
