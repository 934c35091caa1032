//! Use-Cases: die eigentliche Mutationslogik hinter den Commands.

pub mod creation;
pub mod interaction;
pub mod viewport;
