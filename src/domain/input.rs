//! Logical player actions and the held-key state the engine consumes.
//!
//! Key capture lives in the host; it only reports which actions are held.

use std::collections::HashSet;

pub const ACTION_FORWARD: u8 = 1 << 0;
pub const ACTION_BACKWARD: u8 = 1 << 1;
pub const ACTION_TURN_LEFT: u8 = 1 << 2;
pub const ACTION_TURN_RIGHT: u8 = 1 << 3;
pub const ACTION_JUMP: u8 = 1 << 4;
pub const ACTION_SLIDE: u8 = 1 << 5;

const ACTION_MASK: u8 = ACTION_FORWARD
    | ACTION_BACKWARD
    | ACTION_TURN_LEFT
    | ACTION_TURN_RIGHT
    | ACTION_JUMP
    | ACTION_SLIDE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Jump,
    Slide,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::Forward,
        Action::Backward,
        Action::TurnLeft,
        Action::TurnRight,
        Action::Jump,
        Action::Slide,
    ];

    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Action::Forward => ACTION_FORWARD,
            Action::Backward => ACTION_BACKWARD,
            Action::TurnLeft => ACTION_TURN_LEFT,
            Action::TurnRight => ACTION_TURN_RIGHT,
            Action::Jump => ACTION_JUMP,
            Action::Slide => ACTION_SLIDE,
        }
    }
}

/// Anything that can answer "is this action currently held".
pub trait InputProvider {
    fn is_held(&self, action: Action) -> bool;
}

/// Held actions packed into a bitmask (the form JS passes across the boundary)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputState(u8);

impl InputState {
    pub const NONE: InputState = InputState(0);

    /// Unknown bits are dropped.
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & ACTION_MASK)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn with(self, action: Action) -> Self {
        Self(self.0 | action.bit())
    }

    pub fn press(&mut self, action: Action) {
        self.0 |= action.bit();
    }

    pub fn release(&mut self, action: Action) {
        self.0 &= !action.bit();
    }
}

impl InputProvider for InputState {
    #[inline]
    fn is_held(&self, action: Action) -> bool {
        self.0 & action.bit() != 0
    }
}

impl InputProvider for HashSet<Action> {
    fn is_held(&self, action: Action) -> bool {
        self.contains(&action)
    }
}

impl FromIterator<Action> for InputState {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        iter.into_iter().fold(InputState::NONE, InputState::with)
    }
}
