//! View state owned by the page root.

/// Last known pointer position in viewport pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Cursor dot edge length in pixels.
const CURSOR_SIZE: i32 = 24;

impl PointerPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position after a pointer move. The latest event replaces the old
    /// coordinates outright.
    pub fn moved_to(self, x: i32, y: i32) -> Self {
        Self::new(x, y)
    }

    /// CSS translate for a parallax layer moving at `factor` times the pointer.
    pub fn parallax(&self, factor: f64) -> String {
        format!(
            "translate({}px, {}px)",
            f64::from(self.x) * factor,
            f64::from(self.y) * factor
        )
    }

    /// Inline style centering the cursor dot on the pointer.
    pub fn cursor_style(&self) -> String {
        let half = CURSOR_SIZE / 2;
        format!(
            "left: {}px; top: {}px; transition: all 0.1s ease-out",
            self.x - half,
            self.y - half
        )
    }
}

/// Mobile navigation panel state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between open and closed.
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// State after a navigation link is chosen.
    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

/// An in-page navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Links shown in both the desktop bar and the mobile panel.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem { label: "Work", anchor: "work" },
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Skills", anchor: "skills" },
    NavItem { label: "Contact", anchor: "contact" },
];

/// Status badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Blue,
    Orange,
    Neutral,
}

impl BadgeTone {
    /// Utility classes for the badge background and text.
    pub fn classes(&self) -> &'static str {
        match self {
            Self::Green => "bg-green-500/20 text-green-400",
            Self::Blue => "bg-blue-500/20 text-blue-400",
            Self::Orange => "bg-orange-500/20 text-orange-400",
            Self::Neutral => "bg-white/10 text-white/60",
        }
    }
}
