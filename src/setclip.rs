//  ____  ____     __        __    _____           _
// |  _ \|  _ \ __ \ \      / /__ |_   _|__   ___ | |
// | |_) | |_) / _` \ \ /\ / / _ \  | |/ _ \ / _ \| |
// |  _ <|  __/ (_| |\ V  V / (_) | | | (_) | (_) | |
// |_| \_\_|   \__,_| \_/\_/ \___/  |_|\___/ \___/|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-15
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use std::{env, process, thread, time::Duration};

use anyhow::{Context, Result};
use arboard::Clipboard;

const DAEMON_ENV: &str = "RPAWOTOOL_CLIPBOARD_DAEMON";
const SECRET_ENV: &str = "RPAWOTOOL_CLIPBOARD_SECRET";
const DELAY_ENV: &str = "RPAWOTOOL_CLIPBOARD_DELAY";

const DEFAULT_DELAY_SECS: u64 = 30;

/// True when this process was re-launched as the background clear daemon.
/// Must be checked before command-line parsing, the daemon gets no args.
pub fn spawned_as_clear_daemon() -> bool {
    env::var(DAEMON_ENV).is_ok()
}

/// Daemon body: wait, then clear the clipboard if it still holds the
/// secret. A changed clipboard belongs to the user and is left alone.
pub fn run_clear_daemon() -> Result<()> {
    let secret = env::var(SECRET_ENV).context("clipboard daemon started without a secret")?;
    let delay = env::var(DELAY_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DELAY_SECS);

    thread::sleep(Duration::from_secs(delay));

    let mut ctx = match Clipboard::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            // 守护进程拿不到剪贴板时直接放弃，不算失败
            eprintln!("clipboard daemon: initialization failed: {}", e);
            return Ok(());
        }
    };

    let current = ctx.get_text().unwrap_or_default();
    if current == secret {
        if let Err(e) = ctx.set_text("") {
            eprintln!("clipboard daemon: failed to clear clipboard: {}", e);
        }
    }

    Ok(())
}

fn spawn_clear_daemon(secret: &str, delay: u64) -> Result<()> {
    let exe_path = env::current_exe()?;

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(DAEMON_ENV, "1")
            .env(SECRET_ENV, secret)
            .env(DELAY_ENV, delay.to_string())
            .stderr(process::Stdio::inherit())
            .process_group(0);

        cmd.spawn()?;
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        let mut cmd = process::Command::new(exe_path);
        cmd.env(DAEMON_ENV, "1")
            .env(SECRET_ENV, secret)
            .env(DELAY_ENV, delay.to_string())
            .stderr(process::Stdio::inherit())
            .creation_flags(0x08000000); // CREATE_NO_WINDOW

        cmd.spawn()?;
    }

    Ok(())
}

/// Copy `secret` to the clipboard and schedule a delayed clear through a
/// detached copy of this executable.
pub fn copy_to_clipboard(secret: &str, clear_after: u64) -> Result<()> {
    let mut ctx = Clipboard::new()?;
    ctx.set_text(secret)?;
    spawn_clear_daemon(secret, clear_after)?;
    Ok(())
}
