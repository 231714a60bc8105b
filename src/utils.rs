use crate::aspect::{find_preset, parse_size, AspectRatio, Preset};
use crate::client::GeminiClient;
use crate::constants::{CMD_EDIT, CMD_INTERACTIVE, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::files::save_image;
use crate::history::print_history;
use crate::overlay::loading_overlay;
use crate::print_help::print_session_help;
use crate::session::{Session, SubmitOutcome};
use colored::Colorize;
use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub width: u32,
    pub height: u32,
    pub out_dir: PathBuf,
    pub quiet: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            out_dir: PathBuf::from("."),
            quiet: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Generate { prompt: String },
    Edit { image_path: String, prompt: String },
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Submit(String),
    Size(u32, u32),
    Preset(Preset),
    Image(String),
    ClearImage,
    Reset,
    History,
    Select(usize),
    Save,
    Help,
    Quit,
    Invalid(String),
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, Box<dyn Error>> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", flag).into())
}

pub fn parse_args(args: &[String]) -> Result<(Command, CliOptions), Box<dyn Error>> {
    let mut options = CliOptions::default();
    let mut positional: Vec<String> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-size" => {
                let value = flag_value(args, i, "-size")?;
                let (width, height) =
                    parse_size(value).ok_or_else(|| format!("Invalid size: {}", value))?;
                options.width = width;
                options.height = height;
                i += 1;
            }
            "-preset" => {
                let value = flag_value(args, i, "-preset")?;
                let preset = find_preset(value).ok_or_else(|| format!("Unknown preset: {}", value))?;
                options.width = preset.width;
                options.height = preset.height;
                i += 1;
            }
            "-o" => {
                options.out_dir = PathBuf::from(flag_value(args, i, "-o")?);
                i += 1;
            }
            "-quiet" => options.quiet = true,
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let command = match positional.first().map(String::as_str) {
        Some(CMD_INTERACTIVE) if positional.len() == 1 => Command::Interactive,
        Some(CMD_EDIT) => {
            let image_path = positional
                .get(1)
                .cloned()
                .ok_or("Missing image path for edit")?;
            Command::Edit {
                image_path,
                prompt: positional[2..].join(" "),
            }
        }
        _ => Command::Generate {
            prompt: positional.join(" "),
        },
    };

    Ok((command, options))
}

pub fn parse_repl_line(line: &str) -> ReplCommand {
    let line = line.trim();
    if !line.starts_with(':') {
        return ReplCommand::Submit(line.to_string());
    }

    let (name, arg) = match line[1..].split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (&line[1..], ""),
    };

    match name {
        "size" => match parse_size(arg) {
            Some((w, h)) => ReplCommand::Size(w, h),
            None => ReplCommand::Invalid(format!("Invalid size: {}", arg)),
        },
        "preset" => match find_preset(arg) {
            Some(preset) => ReplCommand::Preset(preset),
            None => ReplCommand::Invalid(format!("Unknown preset: {}", arg)),
        },
        "image" if !arg.is_empty() => ReplCommand::Image(arg.to_string()),
        "clear-image" => ReplCommand::ClearImage,
        "reset" => ReplCommand::Reset,
        "history" => ReplCommand::History,
        "select" => match arg.parse() {
            Ok(n) => ReplCommand::Select(n),
            Err(_) => ReplCommand::Invalid(format!("Invalid index: {}", arg)),
        },
        "save" => ReplCommand::Save,
        "help" => ReplCommand::Help,
        "quit" | "q" | "exit" => ReplCommand::Quit,
        _ => ReplCommand::Invalid(format!("Unknown command: {}", line)),
    }
}

fn print_dimensions(session: &Session) {
    let ratio = AspectRatio::closest(session.width as f64, session.height as f64);
    let preset = session
        .active_preset()
        .map(|p| format!(" [{}]", p.label))
        .unwrap_or_default();
    println!(
        "Size {}x{}{} → ratio {}",
        session.width,
        session.height,
        preset,
        ratio.to_string().bold()
    );
}

/// Runs one submission with the spinner up and reports the outcome.
pub async fn submit_with_overlay(
    client: &GeminiClient,
    session: &mut Session,
    quiet: bool,
) -> SubmitOutcome {
    if !session.can_submit() {
        return SubmitOutcome::Skipped;
    }
    let spinner = loading_overlay(quiet);
    let outcome = session.submit(client).await;
    spinner.finish_and_clear();
    outcome
}

pub async fn run_once(
    client: &GeminiClient,
    session: &mut Session,
    options: &CliOptions,
) -> Result<PathBuf, Box<dyn Error>> {
    match submit_with_overlay(client, session, options.quiet).await {
        SubmitOutcome::Generated(image) => Ok(save_image(&image, &options.out_dir).await?),
        SubmitOutcome::Failed(message) => Err(message.into()),
        SubmitOutcome::Skipped => Err("Nothing to generate: give a prompt or an image".into()),
    }
}

async fn handle_repl_command(
    client: &GeminiClient,
    session: &mut Session,
    options: &CliOptions,
    command: ReplCommand,
) -> bool {
    match command {
        ReplCommand::Submit(text) => {
            if !text.is_empty() {
                session.set_prompt(text);
            }
            match submit_with_overlay(client, session, options.quiet).await {
                SubmitOutcome::Generated(image) => {
                    println!(
                        "{} {} ({})",
                        "Generated".green().bold(),
                        image.short_id(),
                        image.kind
                    );
                    println!("Use :save to write it to {}", options.out_dir.display());
                }
                SubmitOutcome::Failed(message) => eprintln!("{}", message.red()),
                SubmitOutcome::Skipped => {
                    println!("{}", "Type a prompt or attach an image first.".dimmed())
                }
            }
        }
        ReplCommand::Size(width, height) => {
            session.set_dimensions(width, height);
            print_dimensions(session);
        }
        ReplCommand::Preset(preset) => {
            session.apply_preset(preset);
            print_dimensions(session);
        }
        ReplCommand::Image(path) => match session.attach_image(&path).await {
            Ok(()) => println!("Attached {}", path.magenta()),
            Err(e) => eprintln!("{}", e.to_string().red()),
        },
        ReplCommand::ClearImage => {
            session.clear_image();
            println!("Image removed");
        }
        ReplCommand::Reset => {
            session.reset();
            println!("Session cleared");
        }
        ReplCommand::History => {
            if session.history.is_empty() {
                println!("{}", "No results yet.".dimmed());
            }
            print_history(&session.history);
        }
        ReplCommand::Select(index) => match session.select(index) {
            Some(image) => println!("Showing {} \"{}\"", image.short_id(), image.prompt),
            None => eprintln!("{}", format!("No result #{}", index).red()),
        },
        ReplCommand::Save => match &session.current {
            Some(image) => match save_image(image, &options.out_dir).await {
                Ok(path) => println!("Saved {}", path.display().to_string().green()),
                Err(e) => eprintln!("{}", e.to_string().red()),
            },
            None => println!("{}", "Nothing to save yet.".dimmed()),
        },
        ReplCommand::Help => print_session_help(),
        ReplCommand::Quit => return false,
        ReplCommand::Invalid(message) => eprintln!("{}", message.red()),
    }
    true
}

pub async fn run_interactive(
    client: &GeminiClient,
    session: &mut Session,
    options: &CliOptions,
) -> Result<(), Box<dyn Error>> {
    print_session_help();
    print_dimensions(session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let marker = if session.uploaded_image.is_some() { "+> " } else { "> " };
        print!("{}", marker.cyan().bold());
        io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        if !handle_repl_command(client, session, options, parse_repl_line(&line)).await {
            break;
        }
    }
    Ok(())
}

pub async fn process_command(
    client: &GeminiClient,
    command: Command,
    options: &CliOptions,
) -> Result<(), Box<dyn Error>> {
    let mut session = Session::new();
    session.set_dimensions(options.width, options.height);

    match command {
        Command::Interactive => return run_interactive(client, &mut session, options).await,
        Command::Generate { prompt } => session.set_prompt(prompt),
        Command::Edit { image_path, prompt } => {
            session.attach_image(&image_path).await?;
            session.set_prompt(prompt);
        }
    }

    let path = run_once(client, &mut session, options).await?;
    println!("Saved image: {}", path.display().to_string().green());
    Ok(())
}
