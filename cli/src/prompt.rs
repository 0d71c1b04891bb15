// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use cliclack::{confirm, intro, note, outro};

/// Asks whether the current favorites may be replaced by an imported set.
pub fn prompt_replace_favorites(
    current: usize,
    incoming: usize,
) -> Result<bool, Box<dyn std::error::Error>> {
    intro("Import favorites")?;
    note("Import replaces, it does not merge", replace_note(current, incoming))?;

    let accepted = confirm("Replace your favorites?")
        .initial_value(false)
        .interact()?;

    match accepted {
        true => outro("Replacing favorites")?,
        false => outro("Keeping your favorites")?,
    }
    Ok(accepted)
}

fn replace_note(current: usize, incoming: usize) -> String {
    format!("• Current favorites:  {current}\n• Incoming favorites: {incoming}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_note() {
        assert_eq!(
            replace_note(3, 12),
            "• Current favorites:  3\n• Incoming favorites: 12"
        );
    }
}
