use colored::Colorize;

/// Print an error chain and exit non-zero.
pub fn handle_error(err: anyhow::Error) -> ! {
    eprintln!("{} {err:#}", "Error:".red().bold());

    let msg = err.to_string().to_lowercase();

    if msg.contains("timed out waiting for the login callback") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Complete the browser login within five minutes, or pass");
        eprintln!("  {} to skip the interactive flow.", "--token <TOKEN>".dimmed());
    }

    if msg.contains("callback listener") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  Another process is holding the login port. Close it and retry.");
    }

    if msg.contains("malformed") {
        eprintln!("\n{}", "Suggestion:".yellow().bold());
        eprintln!("  The cached token looks corrupt. Remove ~/.fluidstack/token and retry.");
    }

    std::process::exit(1);
}
