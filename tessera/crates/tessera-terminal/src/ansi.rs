//! Control sequences written by the renderer.

use std::io::Write;

/// Hides the cursor.
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
/// Shows the cursor.
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
/// Moves the cursor to the top-left corner.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";
/// Clears the screen and scrollback, then homes the cursor.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J\x1b[3J\x1b[H";
/// Resets all SGR attributes.
pub const RESET_STYLE: &[u8] = b"\x1b[0m";

/// Appends a cursor move to the 0-based cell (x, y).
pub fn move_to(out: &mut Vec<u8>, x: u16, y: u16) {
    // Writing into a Vec cannot fail.
    let _ = write!(out, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1);
}
