use crossterm::{
    ExecutableCommand,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size},
    tty::IsTty,
};
use std::io::{self, stdout};

/// Smallest terminal that still fits the 3x3 gallery.
pub const MIN_COLUMNS: u16 = 60;
pub const MIN_ROWS: u16 = 20;

pub fn test_terminal_setup() -> io::Result<()> {
    println!("Testing terminal capabilities...");

    if IsTty::is_tty(&stdout()) {
        println!("✓ Running in a TTY");
    } else {
        println!("✗ Not running in a TTY");
        return Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "Terminal interface requires a TTY",
        ));
    }

    let (columns, rows) = size()?;
    if columns >= MIN_COLUMNS && rows >= MIN_ROWS {
        println!("✓ Terminal size {}x{}", columns, rows);
    } else {
        println!(
            "! Terminal size {}x{} is below {}x{}, tiles will be cramped",
            columns, rows, MIN_COLUMNS, MIN_ROWS
        );
    }

    print!("Testing raw mode... ");
    enable_raw_mode()?;
    println!("✓ Raw mode enabled");

    print!("Testing alternate screen and mouse capture... ");
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;
    disable_raw_mode()?;
    println!("✓ Terminal restored");

    println!("All terminal tests passed!");
    Ok(())
}
