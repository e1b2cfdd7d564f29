//! Keyboard modifier state tracking.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// A single modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Shift,
    #[serde(rename = "ctrl", alias = "control")]
    Control,
    Alt,
}

bitflags! {
    /// Keyboard modifier state.
    ///
    /// Gesture resolution asks either whether a set of modifiers is held
    /// ([`contains_all`](Self::contains_all)), whether any of them is
    /// ([`contains_any`](Self::contains_any)), or whether exactly those are
    /// held ([`only`](Self::only)).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Modifiers: u8 {
        const SHIFT   = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT     = 0b0000_0100;
    }
}

impl From<Modifier> for Modifiers {
    fn from(modifier: Modifier) -> Self {
        match modifier {
            Modifier::Shift => Modifiers::SHIFT,
            Modifier::Control => Modifiers::CONTROL,
            Modifier::Alt => Modifiers::ALT,
        }
    }
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub const fn new() -> Self {
        Self::empty()
    }

    pub fn from_slice(modifiers: &[Modifier]) -> Self {
        modifiers
            .iter()
            .fold(Self::empty(), |held, m| held | Self::from(*m))
    }

    /// Returns a copy with `modifier` held.
    pub fn with(self, modifier: Modifier) -> Self {
        self | Self::from(modifier)
    }

    /// True when every listed modifier is held. An empty list always matches.
    pub fn contains_all(&self, modifiers: &[Modifier]) -> bool {
        self.contains(Self::from_slice(modifiers))
    }

    /// True when at least one listed modifier is held. An empty list never matches.
    pub fn contains_any(&self, modifiers: &[Modifier]) -> bool {
        self.intersects(Self::from_slice(modifiers))
    }

    /// True when exactly the listed modifiers are held, nothing more.
    pub fn only(&self, modifiers: &[Modifier]) -> bool {
        *self == Self::from_slice(modifiers)
    }

    pub fn shift(&self) -> bool {
        self.contains(Self::SHIFT)
    }

    pub fn ctrl(&self) -> bool {
        self.contains(Self::CONTROL)
    }

    pub fn alt(&self) -> bool {
        self.contains(Self::ALT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_all_requires_every_listed_key() {
        let held = Modifiers::from_slice(&[Modifier::Control, Modifier::Shift]);
        assert!(held.contains_all(&[Modifier::Control, Modifier::Shift]));
        assert!(!held.contains_all(&[Modifier::Control, Modifier::Shift, Modifier::Alt]));
    }

    #[test]
    fn empty_check_sets() {
        let held = Modifiers::from_slice(&[Modifier::Alt]);
        assert!(held.contains_all(&[]));
        assert!(!held.contains_any(&[]));
        assert!(Modifiers::new().contains_all(&[]));
        assert!(!Modifiers::new().contains_any(&[]));
    }

    #[test]
    fn only_rejects_extra_keys() {
        let ctrl = Modifiers::new().with(Modifier::Control);
        assert!(ctrl.only(&[Modifier::Control]));
        let ctrl_shift = ctrl.with(Modifier::Shift);
        assert!(!ctrl_shift.only(&[Modifier::Control]));
        assert!(Modifiers::new().only(&[]));
    }

    #[test]
    fn release_clears_bit() {
        let mut held = Modifiers::new().with(Modifier::Shift);
        held.set(Modifier::Shift.into(), false);
        assert!(held.is_empty());
        assert!(!held.shift());
    }

    #[test]
    fn serializes_as_flag_names() {
        let held = Modifiers::from_slice(&[Modifier::Alt, Modifier::Shift]);
        let json = serde_json::to_string(&held).unwrap();
        assert_eq!(json, r#""SHIFT | ALT""#);
        let back: Modifiers = serde_json::from_str(r#""CONTROL""#).unwrap();
        assert!(back.only(&[Modifier::Control]));
    }
}
