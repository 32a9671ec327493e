use std::io::{BufRead, Write};

use gamestore_client::{Confirm, Notification, NotificationLevel, Notifier};

/// Prints store notifications to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let prefix = match notification.level {
            NotificationLevel::Info => "info",
            NotificationLevel::Success => "ok",
            NotificationLevel::Error => "error",
        };
        eprintln!("[{prefix}] {}", notification.message);
    }
}

/// Asks on the terminal, anything but y/yes declines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&self, message: &str) -> bool {
        // store actions run on the runtime, the read must not stall its workers
        tokio::task::block_in_place(|| {
            ask(message, &mut std::io::stdin().lock(), &mut std::io::stderr())
        })
    }
}

fn ask(message: &str, input: &mut impl BufRead, output: &mut impl Write) -> bool {
    if write!(output, "{message} [y/N] ")
        .and_then(|_| output.flush())
        .is_err()
    {
        return false;
    }
    let mut answer = String::new();
    if input.read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
