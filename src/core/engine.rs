use crate::core::session::ChatSession;
use crate::domain::ports::Assistant;
use crate::utils::error::{AssistError, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const PROMPT: &str = "> ";
pub const TYPING_INDICATOR: &str = "Assistant is typing...";

const HELP_TEXT: &str = "Describe your symptoms, e.g. 'I have shoulder pain when lifting my arm'.\n\
Commands: /help, /clear (start over), /exit (or /quit). Other lines starting with '/' are read as descriptions.";

#[derive(Debug, PartialEq, Eq)]
enum SessionCommand {
    Help,
    Clear,
    Exit,
}

/// Only exact command words are commands; anything else goes to the assistant.
fn parse_command(line: &str) -> Option<SessionCommand> {
    match line.trim().to_lowercase().as_str() {
        "/help" => Some(SessionCommand::Help),
        "/clear" => Some(SessionCommand::Clear),
        "/exit" | "/quit" => Some(SessionCommand::Exit),
        _ => None,
    }
}

/// Drives a [`ChatSession`] over line-oriented input, one submission at a time.
pub struct ChatEngine<A: Assistant> {
    session: ChatSession<A>,
}

impl<A: Assistant> ChatEngine<A> {
    pub fn new(session: ChatSession<A>) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &ChatSession<A> {
        &self.session
    }

    pub fn into_session(self) -> ChatSession<A> {
        self.session
    }

    /// Runs until EOF or `/exit`. Returns the number of answered submissions.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        tracing::info!("Starting chat session");
        let mut answered = 0;

        write_bot(&mut writer, self.session.greeting()).await?;

        let mut lines = reader.lines();
        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                tracing::debug!("Input closed");
                writer.write_all(b"\n").await?;
                break;
            };

            match parse_command(&line) {
                Some(SessionCommand::Exit) => break,
                Some(SessionCommand::Help) => {
                    write_line(&mut writer, HELP_TEXT).await?;
                    continue;
                }
                Some(SessionCommand::Clear) => {
                    self.session.clear();
                    write_bot(&mut writer, self.session.greeting()).await?;
                    continue;
                }
                None => {}
            }

            if line.trim().is_empty() {
                continue;
            }

            write_line(&mut writer, TYPING_INDICATOR).await?;
            match self.session.submit(&line).await {
                Ok(reply) => {
                    answered += 1;
                    write_bot(&mut writer, &reply.content).await?;
                }
                Err(AssistError::EmptyInput) => continue,
                Err(e) => return Err(e),
            }
        }

        tracing::info!("Chat session finished after {} replies", answered);
        Ok(answered)
    }
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    writer.write_all(text.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

async fn write_bot<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    write_line(writer, &format!("Assistant: {}\n", text)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("/exit"), Some(SessionCommand::Exit));
        assert_eq!(parse_command(" /QUIT "), Some(SessionCommand::Exit));
        assert_eq!(parse_command("/help"), Some(SessionCommand::Help));
        assert_eq!(parse_command("/clear"), Some(SessionCommand::Clear));
        assert_eq!(parse_command("/dance"), None);
        assert_eq!(parse_command("/my back hurts"), None);
        assert_eq!(parse_command("my back hurts"), None);
    }
}
