//! Terminal presenter.
//!
//! Renders core notifications to stdout with colored output and buffers
//! example-prompt prefills for the readline loop to pick up.

use colored::Colorize;
use haven_core::persona::Persona;
use haven_core::session::{Presenter, WelcomeTurn};
use haven_core::thread::{Message, MessageRole};
use std::sync::Mutex;

/// Colored stdout implementation of the core's presentation seam.
#[derive(Default)]
pub struct TerminalPresenter {
    prefill: Mutex<Option<String>>,
    examples: Mutex<Vec<String>>,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the pending input prefill, if an example prompt was chosen.
    pub fn take_prefill(&self) -> Option<String> {
        self.prefill.lock().unwrap().take()
    }

    /// Returns the welcome example prompt at `index`, if the last thread
    /// view carried one.
    pub fn example(&self, index: usize) -> Option<String> {
        self.examples.lock().unwrap().get(index).cloned()
    }

    fn print_message(message: &Message) {
        match message.role {
            MessageRole::User => println!("{} {}", "you:".bright_cyan().bold(), message.content),
            MessageRole::Assistant => println!("{} {}", "›".bright_green(), message.content),
        }
    }
}

impl Presenter for TerminalPresenter {
    fn show_persona_list(&self, personas: &[Persona]) {
        println!("\n{}", "Chats".bold());
        for (index, persona) in personas.iter().enumerate() {
            println!(
                "  {} {} {}  {}",
                format!("{}.", index + 1).dimmed(),
                persona.icon,
                persona.name.bold(),
                format!("({})", persona.id).dimmed()
            );
            if !persona.preview.is_empty() {
                println!("     {}", persona.preview.dimmed());
            }
        }
        println!(
            "{}",
            "Select a persona by number or id to begin your conversation.".dimmed()
        );
    }

    fn show_thread(&self, persona: &Persona, history: &[Message], welcome: Option<&WelcomeTurn>) {
        println!("\n{} {}", persona.icon, persona.name.bold());
        if !persona.subtitle.is_empty() {
            println!("{}", persona.subtitle.dimmed());
        }

        if let Some(welcome) = welcome {
            *self.examples.lock().unwrap() = welcome.example_prompts.clone();
            println!("\n{}", welcome.greeting);
            for (index, prompt) in welcome.example_prompts.iter().enumerate() {
                println!("  {} {}", format!("/{}", index + 1).bright_cyan(), prompt);
            }
        } else {
            for message in history {
                Self::print_message(message);
            }
        }
        println!("{}", "(/back returns to the list, /quit exits)".dimmed());
    }

    fn message_appended(&self, persona_id: &str, message: &Message) {
        // The append may target a thread the user navigated away from; the
        // persona id keeps the line attributable either way.
        match message.role {
            MessageRole::User => Self::print_message(message),
            MessageRole::Assistant => {
                println!("{} {}", format!("{persona_id}:").bright_green().bold(), message.content);
            }
        }
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            println!("{}", "…".dimmed());
        }
    }

    fn prefill_input(&self, text: &str) {
        *self.prefill.lock().unwrap() = Some(text.to_string());
    }
}
