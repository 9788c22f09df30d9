//! Line-oriented front end over `QuizVm`.
//!
//! Reads commands and answers one line at a time and writes plain text. Holds
//! no quiz logic: every decision goes through the view model.

use std::io;
use std::time::Duration;

use cipher_core::model::Mapping;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::vm::{QuizVm, Screen, SubmitOutcome, map_mapping_rows};

/// How long answer feedback stays up before the next letter.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Debug)]
pub struct TerminalConfig {
    pub feedback_delay: Duration,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Start,
    Restart,
    Mapping,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "start" | ":start" => Some(Self::Start),
            "restart" | ":restart" => Some(Self::Restart),
            "map" | ":map" | "mapping" | ":mapping" => Some(Self::Mapping),
            "quit" | ":quit" | ":q" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub struct TerminalApp<R, W> {
    input: R,
    output: W,
    mapping: Mapping,
    config: TerminalConfig,
}

impl<R, W> TerminalApp<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// `mapping` is only the reference copy shown on request; answers are
    /// always judged by the answer service.
    pub fn new(input: R, output: W, mapping: Mapping, config: TerminalConfig) -> Self {
        Self {
            input,
            output,
            mapping,
            config,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    async fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    async fn show_notices(&mut self, vm: &mut QuizVm) -> io::Result<()> {
        for notice in vm.take_notices() {
            self.write(&format!("! {}\n", notice.message)).await?;
        }
        Ok(())
    }

    async fn show_mapping(&mut self) -> io::Result<()> {
        let mut text = String::from("Al Bhed alphabet:\n");
        for row in map_mapping_rows(&self.mapping) {
            text.push_str(&format!("  {} -> {}", row.left.source, row.left.cipher));
            if let Some(right) = row.right {
                text.push_str(&format!("    {} -> {}", right.source, right.cipher));
            }
            text.push('\n');
        }
        self.write(&text).await
    }

    /// Run until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from reading input or writing output.
    pub async fn run(&mut self, vm: &mut QuizVm) -> io::Result<()> {
        loop {
            match vm.screen() {
                Screen::Welcome => {
                    self.write("Al Bhed quiz. Type `start` to begin, `map` for the alphabet, `quit` to leave.\n")
                        .await?;
                    let Some(line) = self.read_line().await? else {
                        return Ok(());
                    };
                    match Command::parse(&line) {
                        Some(Command::Start | Command::Restart) => {
                            vm.start().await;
                            self.show_notices(vm).await?;
                        }
                        Some(Command::Mapping) => self.show_mapping().await?,
                        Some(Command::Quit) => return Ok(()),
                        None => self.write("Unknown command.\n").await?,
                    }
                }
                Screen::Quiz(question) => {
                    self.write(&format!(
                        "[{}] score {}  {} ",
                        question.progress_label, question.score, question.prompt
                    ))
                    .await?;
                    let Some(line) = self.read_line().await? else {
                        return Ok(());
                    };
                    match Command::parse(&line) {
                        Some(Command::Restart) => {
                            vm.restart();
                            continue;
                        }
                        Some(Command::Mapping) => {
                            self.show_mapping().await?;
                            continue;
                        }
                        Some(Command::Quit) => return Ok(()),
                        Some(Command::Start) => continue,
                        None => {}
                    }
                    match vm.submit(&line).await {
                        SubmitOutcome::Feedback(feedback) => {
                            self.write(&format!("{}\n", feedback.message)).await?;
                            if !self.config.feedback_delay.is_zero() {
                                tokio::time::sleep(self.config.feedback_delay).await;
                            }
                        }
                        SubmitOutcome::Blank => self.write("Please type a letter.\n").await?,
                        SubmitOutcome::Failed => self.show_notices(vm).await?,
                        SubmitOutcome::Ignored => {}
                    }
                }
                Screen::Results(results) => {
                    self.write(&format!(
                        "Quiz complete! You scored {} / {}.\n{}\nType `restart` to play again or `quit` to leave.\n",
                        results.score, results.total, results.message
                    ))
                    .await?;
                    let Some(line) = self.read_line().await? else {
                        return Ok(());
                    };
                    match Command::parse(&line) {
                        Some(Command::Restart | Command::Start) => vm.restart(),
                        Some(Command::Mapping) => self.show_mapping().await?,
                        Some(Command::Quit) => return Ok(()),
                        None => self.write("Unknown command.\n").await?,
                    }
                }
            }
        }
    }
}
