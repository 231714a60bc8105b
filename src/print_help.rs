use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " FILEX AI ".yellow());
    println!("Usage:");
    println!("  {} [flags] [command] <argument>", "filex".bold().green());
    println!("\nCommands:");
    println!("  {}   Generate an image from a prompt (default).", " ");
    println!(
        "  {}   Edit an uploaded image with an optional prompt.",
        "e".bold().magenta()
    );
    println!("  {}   Start an interactive session.", "i".bold().cyan());
    println!("\nFlags:");
    println!(
        "  {}  Target size, mapped to the nearest supported ratio (default 1080x1920).",
        "-size WxH".bold().blue()
    );
    println!(
        "  {}  Size preset: 1:1, 9:16, 16:9 or 4:5.",
        "-preset TAG".bold().blue()
    );
    println!(
        "  {}     Directory for saved images (default: current directory).",
        "-o DIR".bold().blue()
    );
    println!("  {}     Hide the progress spinner.", "-quiet".bold().blue());
    println!(
        "  {}     Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nEnvironment:");
    println!(
        "  {}  API key (falls back to API_KEY). GEMINI_BASE_URL and GEMINI_MODEL are optional.",
        "GEMINI_API_KEY".bold()
    );
    println!(
        "  {}  Where the quality instruction goes: suffix (default) or prefix.",
        "GEMINI_QUALITY_PLACEMENT".bold()
    );
    println!(
        "  {}  Where an attached image goes: before (default) or after the text.",
        "GEMINI_IMAGE_PLACEMENT".bold()
    );
    println!(
        "  {}  Replaces the quality instruction added to every prompt.",
        "GEMINI_QUALITY_INSTRUCTION".bold()
    );
    println!(
        "  {}  Request timeout in seconds (default 120).",
        "GEMINI_TIMEOUT_SECS".bold()
    );
    println!("\nExamples:");
    println!(
        "  {} A misty mountain lake at sunrise",
        "filex".bold().green()
    );
    println!(
        "  {} A neon city street at night",
        "filex -preset 16:9".bold().green()
    );
    println!(
        "  {} portrait.png Replace the background with a marble studio wall",
        "filex e".bold().magenta()
    );
    println!("  {}", "filex i".bold().cyan());
    println!("{:━^60}", "".yellow());
}

pub fn print_session_help() {
    println!("{:━^60}", " Session ".yellow());
    println!("  {}  Type a prompt and press Enter to generate.", "<text>".bold().green());
    println!("  {}  Resubmit the kept prompt and/or image.", "<empty>".bold().green());
    println!("  {}  Set width and height.", ":size WxH".bold().blue());
    println!("  {}  Use a size preset (1:1, 9:16, 16:9, 4:5).", ":preset TAG".bold().blue());
    println!("  {}  Attach an image to edit.", ":image PATH".bold().magenta());
    println!("  {}  Drop the attached image.", ":clear-image".bold().magenta());
    println!("  {}  Clear prompt, image, result and error.", ":reset".bold());
    println!("  {}  List this session's results.", ":history".bold());
    println!("  {}  Show result N again.", ":select N".bold());
    println!("  {}  Save the current result.", ":save".bold());
    println!("  {}  Show this help.", ":help".bold());
    println!("  {}  Leave the session.", ":quit".bold());
    println!("{:━^60}", "".yellow());
}
