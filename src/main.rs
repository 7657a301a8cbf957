//  ____  ____     __        __    _____           _
// |  _ \|  _ \ __ \ \      / /__ |_   _|__   ___ | |
// | |_) | |_) / _` \ \ /\ / / _ \  | |/ _ \ / _ \| |
// |  _ <|  __/ (_| |\ V  V / (_) | | | (_) | (_) | |
// |_| \_\_|   \__,_| \_/\_/ \___/  |_|\___/ \___/|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// A password generation and strength testing toolkit.

use anyhow::Result;
use clap::Parser;

use rpawotool::commands;
use rpawotool::passgen::PasswordOptions;
use rpawotool::setclip;

#[derive(Debug, Parser)]
#[command(name = "rpawotool")]
#[command(about = "A password generation and strength testing toolkit", long_about = None)]
enum Cli {
    /// Generate a new random password
    Gen(GenArgs),

    /// Test password strength and properties
    Testpass(TestpassArgs),
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password
    #[arg(short, long, default_value_t = 16)]
    length: usize,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    no_numbers: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    no_symbols: bool,

    /// Avoid visually confusing characters (i, l, 1, L, o, 0, O)
    #[arg(short = 'c', long, default_value_t = false)]
    exclude_ambiguous: bool,

    /// Never use the same character twice
    #[arg(short = 'u', long, default_value_t = false)]
    exclude_duplicates: bool,

    /// Copy the password to the clipboard
    #[arg(short = 'p', long, default_value_t = false)]
    copy: bool,

    /// Seconds to keep the password on the clipboard before clearing
    #[arg(long, default_value_t = 30)]
    clear_after: u64,
}

#[derive(Debug, Parser)]
struct TestpassArgs {
    /// Password to test (prompted for when omitted)
    password: Option<String>,

    /// Print the full report as JSON
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

impl From<&GenArgs> for PasswordOptions {
    fn from(args: &GenArgs) -> Self {
        Self {
            length: args.length,
            include_uppercase: !args.no_uppercase,
            include_lowercase: !args.no_lowercase,
            include_numbers: !args.no_numbers,
            include_symbols: !args.no_symbols,
            exclude_ambiguous: args.exclude_ambiguous,
            exclude_duplicates: args.exclude_duplicates,
        }
    }
}

fn main() -> Result<()> {
    // 剪贴板守护进程模式：只负责延迟清空，不解析命令行
    if setclip::spawned_as_clear_daemon() {
        return setclip::run_clear_daemon();
    }

    let cli = Cli::parse();

    match cli {
        Cli::Gen(args) => {
            let options = PasswordOptions::from(&args);
            commands::password_gen::generate_random(&options, args.copy, args.clear_after)
        }
        Cli::Testpass(args) => commands::testpass::test_password(args.password, args.json),
    }
}
