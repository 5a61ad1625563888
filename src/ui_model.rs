//! Shell page inventory shared by wasm and native builds.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test
//! the section layout and visibility rules on the host.

/// The three sections of the landing page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellSection {
    Header,
    Permissions,
    GettingStarted,
}

impl ShellSection {
    pub fn title(self) -> &'static str {
        match self {
            ShellSection::Header => "DUMP - Direct Unified and Modular Portal",
            ShellSection::Permissions => "Your Permissions",
            ShellSection::GettingStarted => "Getting Started",
        }
    }

    pub fn all() -> &'static [ShellSection] {
        &[
            ShellSection::Header,
            ShellSection::Permissions,
            ShellSection::GettingStarted,
        ]
    }
}

/// Sections to render for a given permission list.
///
/// Header and Getting Started are unconditional; Permissions appears iff the
/// list is non-empty. This is the whole state machine of the page: the list
/// is set at most once after mount, so the output changes at most once per
/// page load.
pub fn visible_sections(permissions: &[String]) -> Vec<ShellSection> {
    ShellSection::all()
        .iter()
        .copied()
        .filter(|s| *s != ShellSection::Permissions || !permissions.is_empty())
        .collect()
}
