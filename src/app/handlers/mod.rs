//! Feature-Handler: dünne Dispatch-Schicht zwischen Controller und Use-Cases.

pub mod creation;
pub mod interaction;
pub mod view;
