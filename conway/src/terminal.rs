// terminal.rs - Console control sequences

use std::io::{self, Write};

/// Cursor home, then erase the whole display.
pub const CLEAR: &str = "\x1b[H\x1b[2J";

pub fn clear(out: &mut impl Write) -> io::Result<()> {
    out.write_all(CLEAR.as_bytes())
}

/// Let the Windows console interpret ANSI escapes.
#[cfg(target_os = "windows")]
pub fn enable_ansi() -> io::Result<()> {
    use winapi::shared::minwindef::DWORD;
    use winapi::um::consoleapi::{GetConsoleMode, SetConsoleMode};
    use winapi::um::handleapi::INVALID_HANDLE_VALUE;
    use winapi::um::processenv::GetStdHandle;
    use winapi::um::winbase::STD_OUTPUT_HANDLE;
    use winapi::um::wincon::ENABLE_VIRTUAL_TERMINAL_PROCESSING;

    // SAFETY: plain Win32 calls on the process's own stdout handle.
    unsafe {
        let handle = GetStdHandle(STD_OUTPUT_HANDLE);
        if handle.is_null() || handle == INVALID_HANDLE_VALUE {
            return Err(io::Error::last_os_error());
        }

        let mut mode: DWORD = 0;
        if GetConsoleMode(handle, &mut mode) == 0 {
            return Err(io::Error::last_os_error());
        }
        if SetConsoleMode(handle, mode | ENABLE_VIRTUAL_TERMINAL_PROCESSING) == 0 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

/// Other terminals understand ANSI escapes already.
#[cfg(not(target_os = "windows"))]
pub fn enable_ansi() -> io::Result<()> {
    Ok(())
}
