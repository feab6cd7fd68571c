use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use ui::{Headless, InputMap, Shell};

mod terminal;

pub const GAME_NAME: &str = "hollowkeep";

#[derive(Parser, Debug)]
struct Args {
    #[arg(default_value = "Delete Character?", help = "Dialog title")]
    title: String,

    #[arg(
        default_value = "This will permanently delete your hero.",
        help = "Question text"
    )]
    body: String,

    #[arg(
        long,
        default_value = ".",
        help = "Directory for art that isn't built in"
    )]
    assets: PathBuf,

    #[arg(
        long,
        help = "Run headless with comma-separated keys, eg. \"Down,Ret\""
    )]
    script: Option<String>,
}

fn main() -> ExitCode {
    navni::logger::start(GAME_NAME);

    let args = Args::parse();

    match run(&args) {
        Ok(true) => {
            println!("yes");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("no");
            ExitCode::from(1)
        }
        Err(e) => {
            log::error!("{e:?}");
            eprintln!("{GAME_NAME}: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    if let Some(script) = &args.script {
        let script = InputMap::default().parse_script(script)?;
        let mut shell =
            Shell::new(Headless::new(script)).with_asset_dir(&args.assets);

        let answer = ui::ask_yes_no(&mut shell, &args.title, &args.body);

        // Screenshot of where the script left off.
        if let Some(frame) = shell.backend().last_frame() {
            print!("{frame}");
        }

        answer
    } else {
        let term = terminal::Terminal::open()?;
        let mut shell = Shell::new(term).with_asset_dir(&args.assets);
        ui::ask_yes_no(&mut shell, &args.title, &args.body)
    }
}
