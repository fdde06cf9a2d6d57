//! Reward choice read from standard input.
use anyhow::Context;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use game_core::{GameState, Skill, SkillId};
use runtime::RewardPolicy;

/// Parsed answer to the reward prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Take(usize),
    Skip,
    Invalid,
}

fn parse_answer(line: &str, offers: usize) -> Answer {
    let line = line.trim();
    if line.is_empty() {
        return Answer::Take(0);
    }
    if line.eq_ignore_ascii_case("s") || line.eq_ignore_ascii_case("skip") {
        return Answer::Skip;
    }
    match line.parse::<usize>() {
        Ok(n) if (1..=offers).contains(&n) => Answer::Take(n - 1),
        _ => Answer::Invalid,
    }
}

/// Asks the player on the terminal. Enter takes the first offer; EOF does
/// the same so piped sessions keep running.
pub struct StdinPolicy {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl StdinPolicy {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

impl Default for StdinPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RewardPolicy for StdinPolicy {
    async fn choose(&self, offers: &[Skill], _state: &GameState) -> runtime::Result<Option<SkillId>> {
        if offers.is_empty() {
            return Ok(None);
        }

        let mut menu = String::from("\nChoose a new skill:\n");
        for (n, skill) in offers.iter().enumerate() {
            menu.push_str(&format!("  {}. {} - {}\n", n + 1, skill.name, skill.description));
        }
        menu.push_str("Number (Enter = 1, s = skip): ");

        let mut lines = self.lines.lock().await;
        loop {
            if let Err(error) = write_prompt(&menu).await {
                tracing::warn!(%error, "reward prompt could not be shown");
            }
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(offers.first().map(|skill| skill.id.clone())),
                Err(error) => {
                    tracing::warn!(%error, "reading reward choice failed, taking the first offer");
                    return Ok(offers.first().map(|skill| skill.id.clone()));
                }
            };
            match parse_answer(&line, offers.len()) {
                Answer::Take(index) => return Ok(Some(offers[index].id.clone())),
                Answer::Skip => return Ok(None),
                Answer::Invalid => menu = format!("Pick 1-{} or s: ", offers.len()),
            }
        }
    }
}

async fn write_prompt(text: &str) -> anyhow::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(text.as_bytes())
        .await
        .context("writing prompt")?;
    stdout.flush().await.context("flushing prompt")?;
    Ok(())
}
