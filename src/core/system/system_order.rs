//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. Input (pointer releases, key layer, UI button presses)
//! 2. GameLogic (kick impulses, contact state machine, restart)
//! 3. Presentation (HUD reconciliation, audio, overlays)
//! 4. Rapier step (handled by plugin in PostUpdate)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet; // raw input turned into game events

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct GameLogicSet; // session transitions and body edits before physics

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PresentationSet; // ui/audio reacting to session state
