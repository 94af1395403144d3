//! Interactive menu over a built tree
//!
//! Reads choices line by line from any `BufRead` and writes to any `Write`,
//! so the same loop drives a terminal session or a scripted test. Query
//! parameters are prompted here and handed to the queries explicitly.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::output::{OutputConfig, TreeFormatter, export_html, format_report};
use crate::search::{Query, TreeIndex};
use crate::tree::Node;

const MAIN_MENU: &str = "
========== MAIN MENU ==========
1. Show the full tree
2. Export tree to HTML
3. Searches
0. Quit
";

const SEARCH_MENU: &str = "
--- SEARCHES ---
1. Largest file(s)
2. Files larger than N bytes
3. Director(y/ies) with the most direct children
4. Files by extension
5. Empty directories
0. Back
";

/// Default file the HTML export writes to.
pub const DEFAULT_HTML_PATH: &str = "tree.html";

/// Whether the session goes on after a submenu returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Menu<'a, R, W> {
    root: Option<&'a Node>,
    index: TreeIndex<'a>,
    config: OutputConfig,
    html_path: PathBuf,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(root: Option<&'a Node>, config: OutputConfig, input: R, output: W) -> Self {
        Self {
            root,
            index: TreeIndex::new(root),
            config: OutputConfig {
                use_color: false,
                ..config
            },
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
            input,
            output,
        }
    }

    pub fn with_html_path(mut self, path: PathBuf) -> Self {
        self.html_path = path;
        self
    }

    /// Run until the user quits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MAIN_MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            debug!(choice = %choice, "main menu");

            match choice.as_str() {
                "1" => self.show_tree()?,
                "2" => self.export()?,
                "3" => {
                    if self.searches()? == Flow::Quit {
                        break;
                    }
                }
                "0" => {
                    writeln!(self.output, "Exiting.")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid option. Try again.")?,
            }
        }
        self.output.flush()
    }

    fn searches(&mut self) -> io::Result<Flow> {
        loop {
            write!(self.output, "{}", SEARCH_MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return Ok(Flow::Quit);
            };
            debug!(choice = %choice, "search menu");

            let query = match choice.as_str() {
                "1" => Query::Largest,
                "2" => {
                    let Some(raw) = self.prompt("Enter N (bytes): ")? else {
                        return Ok(Flow::Quit);
                    };
                    match raw.parse::<u64>() {
                        Ok(threshold) => Query::LargerThan(threshold),
                        Err(_) => {
                            writeln!(self.output, "Invalid number: '{}'", raw)?;
                            continue;
                        }
                    }
                }
                "3" => Query::MostChildren,
                "4" => {
                    let Some(ext) = self.prompt("Enter the extension (e.g. .txt): ")? else {
                        return Ok(Flow::Quit);
                    };
                    Query::Extension(ext)
                }
                "5" => Query::EmptyDirectories,
                "0" => {
                    writeln!(self.output, "Back to the main menu.")?;
                    return Ok(Flow::Continue);
                }
                _ => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    continue;
                }
            };

            let report = query.run(&self.index);
            write!(self.output, "{}", format_report(&report, &self.config))?;
        }
    }

    fn show_tree(&mut self) -> io::Result<()> {
        match self.root {
            Some(root) => {
                let rendered = TreeFormatter::new(self.config.clone()).format(root);
                writeln!(self.output, "\n--- File tree ---")?;
                write!(self.output, "{}", rendered)
            }
            None => writeln!(self.output, "No tree loaded."),
        }
    }

    fn export(&mut self) -> io::Result<()> {
        let Some(root) = self.root else {
            return writeln!(self.output, "No tree loaded.");
        };
        match export_html(root, &self.html_path, &self.config) {
            Ok(()) => writeln!(
                self.output,
                "Wrote HTML report to {}",
                self.html_path.display()
            ),
            Err(e) => writeln!(
                self.output,
                "Could not write {}: {}",
                self.html_path.display(),
                e
            ),
        }
    }

    /// Print `text` and read one trimmed line, decoded lossily. `None` at end
    /// of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }
}
