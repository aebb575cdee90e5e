//! Colored output helpers for CLI
//!
//! Provides consistent, colored terminal output for the C.O.R.A CLI.

use crate::types::ParsedMessage;
use owo_colors::OwoColorize;

/// Output style configuration
pub struct Output {
    /// Whether to use colored output
    pub colored: bool,
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

impl Output {
    /// Create a new output helper with colors enabled
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Create a new output helper with colors disabled
    pub fn no_color() -> Self {
        Self { colored: false }
    }

    /// Print the C.O.R.A banner
    pub fn banner(&self) {
        if self.colored {
            println!(
                r#"
   {}
   {}
   {}
"#,
                "  ____ ___  ____      _    ".bright_cyan().bold(),
                " / ___/ _ \\|  _ \\    / \\   ".cyan().bold(),
                "| |__| |_| |  _ <   / - \\  ".blue().bold(),
            );
            println!(
                "   {} {}\n",
                "Contextual Research Assistant".bright_white().bold(),
                format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
            );
        } else {
            println!(
                "\nC.O.R.A - Contextual Research Assistant v{}\n",
                env!("CARGO_PKG_VERSION")
            );
        }
    }

    /// Print a success message with a checkmark
    pub fn success(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "✓".green().bold(), message.green());
        } else {
            println!("  [OK] {}", message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.colored {
            println!("  {} {}", "•".blue(), message);
        } else {
            println!("  [INFO] {}", message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        if self.colored {
            eprintln!("  {} {}", "✗".red().bold(), message.red());
        } else {
            eprintln!("  [ERROR] {}", message);
        }
    }

    /// Print a parsed message section by section
    pub fn parsed_message(&self, parsed: &ParsedMessage) {
        for block in &parsed.reasoning {
            let heading = format!("{} #{}", block.kind.as_tag(), block.iteration);
            if self.colored {
                println!("{}", heading.dimmed().bold());
                println!("{}\n", block.body.dimmed());
            } else {
                println!("{}\n{}\n", heading, block.body);
            }
        }

        if let Some(answer) = &parsed.final_answer {
            if self.colored {
                println!("{}", "answer".bright_white().bold());
            } else {
                println!("answer");
            }
            println!("{}\n", answer);
        }

        if !parsed.sources.is_empty() {
            if self.colored {
                println!("{}", "sources".bright_white().bold());
            } else {
                println!("sources");
            }
            for source in &parsed.sources {
                let title = source.title.as_deref().unwrap_or("");
                if self.colored {
                    println!(
                        "  {} {} {}",
                        format!("[{}]", source.index).dimmed(),
                        source.url.bright_blue().underline(),
                        title.dimmed()
                    );
                } else {
                    println!("  [{}] {} {}", source.index, source.url, title);
                }
            }
        }
    }
}
