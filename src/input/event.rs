/// Modifier keys held during a key event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Shift, Ctrl and Alt all held.
    pub const SHIFT_CTRL_ALT: Self = Self {
        shift: true,
        ctrl: true,
        alt: true,
    };

    /// Whether every modifier held in `required` is also held here.
    #[must_use]
    pub fn contains(self, required: Self) -> bool {
        (!required.shift || self.shift)
            && (!required.ctrl || self.ctrl)
            && (!required.alt || self.alt)
    }

    /// Number of modifiers held.
    #[must_use]
    pub fn count(self) -> usize {
        usize::from(self.shift) + usize::from(self.ctrl) + usize::from(self.alt)
    }
}

/// A platform-agnostic key-down event.
///
/// `key` is the logical key (what the layout produces: `"w"`, `"W"`,
/// `"ArrowUp"`), `code` the physical key (`"KeyW"`, `"Space"`).
///
/// # Example
///
/// ```
/// # use pong3d::input::{KeyInput, Modifiers};
/// let space = KeyInput::new(" ", "Space");
/// let inspector = KeyInput::new("I", "KeyI").with_modifiers(Modifiers::SHIFT_CTRL_ALT);
/// assert_eq!(space.code, "Space");
/// assert!(inspector.modifiers.alt);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Logical key name.
    pub key: String,
    /// Physical key code.
    pub code: String,
    /// Modifiers held while the key went down.
    pub modifiers: Modifiers,
}

impl KeyInput {
    /// A key event with no modifiers.
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            modifiers: Modifiers::NONE,
        }
    }

    /// Replace the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(feature = "viewer")]
impl KeyInput {
    /// Convert a winit key event. Named keys use their winit names
    /// (`"ArrowUp"`, `"Space"`), physical codes the `KeyCode` debug format.
    #[must_use]
    pub fn from_winit(
        event: &winit::event::KeyEvent,
        modifiers: winit::keyboard::ModifiersState,
    ) -> Self {
        use winit::keyboard::{Key, PhysicalKey};

        let key = match &event.logical_key {
            Key::Character(s) => s.to_string(),
            Key::Named(named) => format!("{named:?}"),
            _ => String::new(),
        };
        let code = match event.physical_key {
            PhysicalKey::Code(code) => format!("{code:?}"),
            PhysicalKey::Unidentified(_) => String::new(),
        };
        Self {
            key,
            code,
            modifiers: Modifiers {
                shift: modifiers.shift_key(),
                ctrl: modifiers.control_key(),
                alt: modifiers.alt_key(),
            },
        }
    }
}
