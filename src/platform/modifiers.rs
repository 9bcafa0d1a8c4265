//! Cross-platform menu accelerator modifiers.
//!
//! | Platform | Primary modifier |
//! |---|---|
//! | macOS | `Cmd` (`META`) |
//! | Windows / Linux | `Ctrl` (`CONTROL`) |

use super::Platform;
use muda::accelerator::Modifiers;

/// The platform's **primary** shortcut modifier ("CmdOrCtrl").
pub fn primary_modifier(platform: Platform) -> Modifiers {
    match platform {
        Platform::Mac => Modifiers::META,
        Platform::Other => Modifiers::CONTROL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_modifier_per_platform() {
        assert_eq!(primary_modifier(Platform::Mac), Modifiers::META);
        assert_eq!(primary_modifier(Platform::Other), Modifiers::CONTROL);
    }
}
