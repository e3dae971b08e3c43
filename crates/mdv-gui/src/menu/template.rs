//! Declarative menu structure.
//!
//! The menu hierarchy is a plain value built by a pure function of the
//! runtime platform. The macOS-specific pieces (the application-identity
//! group, the extra Window entries) are added by the builder itself instead
//! of patching an already-built structure by position. Materialization into
//! a native menu or the in-app bar happens elsewhere.

use iced::keyboard;

use super::ids;

/// Application name shown in the macOS application-identity group.
pub const APP_NAME: &str = "Markview";

/// The platform the menu is being built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS: native menu bar with an application-identity group.
    MacOs,
    /// Everything else: in-app menu bar, no identity group.
    Other,
}

impl Platform {
    /// The platform this process is running on.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Other
        }
    }
}

/// Host-native menu roles, delegated entirely to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRole {
    About,
    Services,
    Hide,
    HideOthers,
    ShowAll,
    Quit,
    Minimize,
    CloseWindow,
    BringAllToFront,
}

impl HostRole {
    /// Display label for platforms that render roles as plain items.
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Services => "Services",
            Self::Hide => "Hide",
            Self::HideOthers => "Hide Others",
            Self::ShowAll => "Show All",
            Self::Quit => "Exit",
            Self::Minimize => "Minimize",
            Self::CloseWindow => "Close",
            Self::BringAllToFront => "Bring All to Front",
        }
    }
}

/// A key plus modifier set bound to a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    /// CmdOrCtrl: the logo key on macOS, Ctrl elsewhere.
    pub command: bool,
    /// The Control key proper (only meaningful on macOS, where it is
    /// distinct from the command modifier).
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: ShortcutKey,
}

/// The non-modifier part of a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    /// A letter key.
    Char(char),
    /// The F11 function key.
    F11,
}

impl Shortcut {
    /// A plain CmdOrCtrl+letter shortcut.
    pub fn command(key: char) -> Self {
        Self {
            command: true,
            control: false,
            shift: false,
            alt: false,
            key: ShortcutKey::Char(key),
        }
    }

    /// Add the Shift modifier.
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Add the Alt/Option modifier.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Add the Control modifier (macOS only; elsewhere Control already is
    /// the command modifier).
    pub fn with_control(mut self) -> Self {
        self.control = true;
        self
    }

    /// A bare function-key shortcut.
    pub fn f11() -> Self {
        Self {
            command: false,
            control: false,
            shift: false,
            alt: false,
            key: ShortcutKey::F11,
        }
    }

    /// Whether a keyboard event matches this shortcut.
    pub fn matches(&self, key: &keyboard::Key, modifiers: keyboard::Modifiers) -> bool {
        if !self.key_matches(key) {
            return false;
        }

        // On Windows/Linux the command modifier IS the Control key, so a
        // command shortcut implies the control bit there.
        let control_expected =
            self.control || (cfg!(not(target_os = "macos")) && self.command);

        modifiers.command() == self.command
            && modifiers.shift() == self.shift
            && modifiers.alt() == self.alt
            && modifiers.control() == control_expected
    }

    fn key_matches(&self, key: &keyboard::Key) -> bool {
        match (self.key, key) {
            (ShortcutKey::Char(expected), keyboard::Key::Character(pressed)) => {
                let mut chars = pressed.chars();
                match (chars.next(), chars.next()) {
                    (Some(first), None) => first.eq_ignore_ascii_case(&expected),
                    _ => false,
                }
            }
            (ShortcutKey::F11, keyboard::Key::Named(named)) => {
                *named == keyboard::key::Named::F11
            }
            _ => false,
        }
    }

    /// Human-readable label, e.g. "Shift+Cmd+O" or "Ctrl+Shift+I".
    pub fn label(&self, platform: Platform) -> String {
        let mut parts: Vec<&str> = Vec::new();
        match platform {
            Platform::MacOs => {
                if self.control {
                    parts.push("Ctrl");
                }
                if self.alt {
                    parts.push("Alt");
                }
                if self.shift {
                    parts.push("Shift");
                }
                if self.command {
                    parts.push("Cmd");
                }
            }
            Platform::Other => {
                if self.command || self.control {
                    parts.push("Ctrl");
                }
                if self.shift {
                    parts.push("Shift");
                }
                if self.alt {
                    parts.push("Alt");
                }
            }
        }

        let key = match self.key {
            ShortcutKey::Char(c) => c.to_ascii_uppercase().to_string(),
            ShortcutKey::F11 => "F11".to_owned(),
        };

        if parts.is_empty() {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// One entry inside a menu group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    /// A leaf command bound to an application action.
    Command {
        /// Stable identifier used for event dispatch.
        id: &'static str,
        /// Display label.
        label: &'static str,
        /// Optional keyboard shortcut.
        shortcut: Option<Shortcut>,
    },
    /// A host-native role.
    Role {
        role: HostRole,
        /// Shortcut hint for platforms that render roles as plain items;
        /// native menus bring their own accelerators.
        shortcut: Option<Shortcut>,
    },
    /// A visual separator.
    Separator,
}

/// Designation a group can carry for the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    /// The window-management menu.
    Window,
    /// The help menu.
    Help,
}

/// An ordered group of entries under one top-level label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub label: String,
    pub role: Option<GroupRole>,
    pub entries: Vec<MenuEntry>,
}

/// The complete, ordered menu hierarchy for one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTemplate {
    pub platform: Platform,
    pub groups: Vec<MenuGroup>,
}

impl MenuTemplate {
    /// Build the menu hierarchy for `platform`.
    ///
    /// This runs once during startup; the resulting value is installed as
    /// the process-wide menu and never rebuilt.
    pub fn for_platform(platform: Platform) -> Self {
        let mut groups = Vec::with_capacity(5);

        if platform == Platform::MacOs {
            groups.push(app_identity_group());
        }

        groups.push(file_group(platform));
        groups.push(view_group(platform));
        groups.push(window_group(platform));
        groups.push(help_group());

        Self { platform, groups }
    }

    /// Iterate over all entries in order.
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.groups.iter().flat_map(|group| group.entries.iter())
    }
}

fn app_identity_group() -> MenuGroup {
    MenuGroup {
        label: APP_NAME.to_owned(),
        role: None,
        entries: vec![
            MenuEntry::Role {
                role: HostRole::About,
                shortcut: None,
            },
            MenuEntry::Separator,
            MenuEntry::Role {
                role: HostRole::Services,
                shortcut: None,
            },
            MenuEntry::Separator,
            MenuEntry::Role {
                role: HostRole::Hide,
                shortcut: None,
            },
            MenuEntry::Role {
                role: HostRole::HideOthers,
                shortcut: None,
            },
            MenuEntry::Role {
                role: HostRole::ShowAll,
                shortcut: None,
            },
            MenuEntry::Separator,
            MenuEntry::Role {
                role: HostRole::Quit,
                shortcut: None,
            },
        ],
    }
}

fn file_group(platform: Platform) -> MenuGroup {
    let mut entries = vec![
        MenuEntry::Command {
            id: ids::OPEN_FILE,
            label: "Open...",
            shortcut: Some(Shortcut::command('o')),
        },
        MenuEntry::Command {
            id: ids::EXPORT_PDF,
            label: "Export PDF...",
            shortcut: Some(Shortcut::command('o').with_shift()),
        },
    ];

    // Quitting lives in the application-identity group on macOS; other
    // platforms get it at the bottom of the File menu.
    if platform == Platform::Other {
        entries.push(MenuEntry::Separator);
        entries.push(MenuEntry::Role {
            role: HostRole::Quit,
            shortcut: None,
        });
    }

    MenuGroup {
        label: "File".to_owned(),
        role: None,
        entries,
    }
}

fn view_group(platform: Platform) -> MenuGroup {
    let fullscreen = match platform {
        Platform::MacOs => Shortcut::command('f').with_control(),
        Platform::Other => Shortcut::f11(),
    };
    let devtools = match platform {
        Platform::MacOs => Shortcut::command('i').with_alt(),
        Platform::Other => Shortcut::command('i').with_shift(),
    };

    MenuGroup {
        label: "View".to_owned(),
        role: None,
        entries: vec![
            MenuEntry::Command {
                id: ids::RELOAD,
                label: "Reload",
                shortcut: Some(Shortcut::command('r')),
            },
            MenuEntry::Command {
                id: ids::TOGGLE_FULL_SCREEN,
                label: "Toggle Full Screen",
                shortcut: Some(fullscreen),
            },
            MenuEntry::Command {
                id: ids::TOGGLE_DEVTOOLS,
                label: "Toggle Developer Tools",
                shortcut: Some(devtools),
            },
        ],
    }
}

fn window_group(platform: Platform) -> MenuGroup {
    let mut entries = vec![
        MenuEntry::Role {
            role: HostRole::Minimize,
            shortcut: Some(Shortcut::command('m')),
        },
        MenuEntry::Role {
            role: HostRole::CloseWindow,
            shortcut: Some(Shortcut::command('w')),
        },
    ];

    if platform == Platform::MacOs {
        entries.push(MenuEntry::Separator);
        entries.push(MenuEntry::Role {
            role: HostRole::BringAllToFront,
            shortcut: None,
        });
    }

    MenuGroup {
        label: "Window".to_owned(),
        role: Some(GroupRole::Window),
        entries,
    }
}

fn help_group() -> MenuGroup {
    MenuGroup {
        label: "Help".to_owned(),
        role: Some(GroupRole::Help),
        entries: vec![MenuEntry::Command {
            id: ids::LEARN_MORE,
            label: "Learn More",
            shortcut: None,
        }],
    }
}
