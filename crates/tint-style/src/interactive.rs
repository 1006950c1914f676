#![forbid(unsafe_code)]

//! Pointer-state style variants.
//!
//! [`InteractiveStyle`] holds a base value plus optional overrides for the
//! hovered and pressed states. Components that react to the pointer (the
//! upgrade banner's border glow and call-to-action lift) resolve through it
//! instead of branching on state inline.
//!
//! # Example
//!
//! ```
//! use tint_style::interactive::{InteractionState, InteractiveStyle};
//!
//! let lift = InteractiveStyle::new(0u8).hover(2);
//! assert_eq!(lift.resolve(InteractionState::Normal), 0);
//! assert_eq!(lift.resolve(InteractionState::Hovered), 2);
//! // Pressed falls back to hover when it has no override of its own.
//! assert_eq!(lift.resolve(InteractionState::Pressed), 2);
//! ```

/// Pointer interaction state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Normal,
    /// Pointer is over the component.
    Hovered,
    /// Pointer is over the component and the button is held.
    Pressed,
}

impl InteractionState {
    /// Hovered and pressed both count as "pointer inside".
    pub const fn is_pointer_inside(self) -> bool {
        matches!(self, Self::Hovered | Self::Pressed)
    }
}

/// A value with per-state overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveStyle<T> {
    pub normal: T,
    pub hover: Option<T>,
    pub pressed: Option<T>,
}

impl<T: Clone> InteractiveStyle<T> {
    pub fn new(normal: T) -> Self {
        Self {
            normal,
            hover: None,
            pressed: None,
        }
    }

    #[must_use]
    pub fn hover(mut self, value: T) -> Self {
        self.hover = Some(value);
        self
    }

    #[must_use]
    pub fn pressed(mut self, value: T) -> Self {
        self.pressed = Some(value);
        self
    }

    /// Resolve the value for `state`.
    ///
    /// `Pressed` uses its own override, then the hover override, then normal.
    pub fn resolve(&self, state: InteractionState) -> T {
        let picked = match state {
            InteractionState::Normal => None,
            InteractionState::Hovered => self.hover.as_ref(),
            InteractionState::Pressed => self.pressed.as_ref().or(self.hover.as_ref()),
        };
        picked.unwrap_or(&self.normal).clone()
    }

    pub fn has_override(&self, state: InteractionState) -> bool {
        match state {
            InteractionState::Normal => true,
            InteractionState::Hovered => self.hover.is_some(),
            InteractionState::Pressed => self.pressed.is_some() || self.hover.is_some(),
        }
    }
}

impl<T: Clone + Default> Default for InteractiveStyle<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone> From<T> for InteractiveStyle<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}
