//! The interactive session: reads commands line by line and applies them to
//! one tree.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use dna_radix::{RadixTree, RandomConfig};
use rand::Rng;

use crate::command::{Command, Help};
use crate::render::{self, Summary};

/// Whether the session continues after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R> {
    tree: RadixTree,
    rng: R,
    config: RandomConfig,
    prompt: bool,
}

impl<R: Rng> Shell<R> {
    pub fn new(rng: R, config: RandomConfig) -> Self {
        Self {
            tree: RadixTree::new(),
            rng,
            config,
            prompt: false,
        }
    }

    /// Print a prompt before each command.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn tree(&self) -> &RadixTree {
        &self.tree
    }

    /// Pre-populates the tree with `count` random sequences.
    pub fn fill(&mut self, count: usize) -> usize {
        self.tree.fill_random(&mut self.rng, count, &self.config)
    }

    /// Runs commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush().context("failed to flush prompt")?;
            }
            let Some(line) = lines.next() else {
                log::debug!("end of input");
                break;
            };
            let line = line.context("failed to read command")?;

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    continue;
                }
            };
            log::trace!("command {:?}", command);

            if self.execute(command, &mut out)? == Flow::Quit {
                break;
            }
        }
        out.flush().context("failed to flush output")?;
        Ok(())
    }

    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
        match command {
            Command::Random(count) => {
                let added = self.fill(count);
                writeln!(out, "Inserted {} random sequences ({} new).", count, added)?;
            }
            Command::Insert(sequence) => {
                let before = self.tree.stats();
                match self.tree.insert(&sequence) {
                    Ok(()) => render::before_after(out, "Insert", &before, &self.tree.stats())?,
                    Err(err) => writeln!(out, "Sequence {} rejected: {}", sequence, err)?,
                }
            }
            Command::Find(sequence) => match self.tree.occurrences(&sequence) {
                Ok(0) => writeln!(out, "Sequence {} was NOT found in the tree.", sequence)?,
                Ok(n) => writeln!(
                    out,
                    "Sequence {} was found in the tree ({} occurrences).",
                    sequence, n
                )?,
                Err(err) => writeln!(out, "Sequence {} rejected: {}", sequence, err)?,
            },
            Command::Delete(sequence) => {
                let before = self.tree.stats();
                match self.tree.delete(&sequence) {
                    Ok(true) => render::before_after(out, "Delete", &before, &self.tree.stats())?,
                    Ok(false) => writeln!(out, "Sequence {} was NOT found in the tree.", sequence)?,
                    Err(err) => writeln!(out, "Sequence {} rejected: {}", sequence, err)?,
                }
            }
            Command::List => {
                render::listing(out, &self.tree)?;
                render::summary(out, &self.tree.stats(), Summary::Sequences)?;
            }
            Command::Tree => {
                render::tree_view(out, &self.tree)?;
                render::summary(out, &self.tree.stats(), Summary::Full)?;
            }
            Command::Count => render::summary(out, &self.tree.stats(), Summary::Total)?,
            Command::Nodes => render::summary(out, &self.tree.stats(), Summary::Nodes)?,
            Command::Sorted => {
                render::sorted(out, &self.tree)?;
                render::summary(out, &self.tree.stats(), Summary::Full)?;
            }
            Command::Stats => render::summary(out, &self.tree.stats(), Summary::Full)?,
            Command::Help => write!(out, "{}", Help)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
