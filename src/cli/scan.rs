use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::cli::Error;
use crate::config;
use crate::filesystem::physical::PhysicalFS;
use crate::gitignore::IgnoreList;
use crate::parser::MarkerParser;
use crate::render::{self, OutputFormat};
use crate::searcher::Searcher;
use crate::types::{SortSpec, sort_comments};
use crate::walker::ignore_walker::IgnoreWalker;

#[derive(Args, Debug)]
pub(super) struct ScanArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Comma-separated marker types to search for
    #[arg(long, value_delimiter = ',', default_value = "TODO,FIXME")]
    types: Vec<String>,

    /// Comma-separated ignore patterns (gitignore syntax)
    #[arg(long, value_delimiter = ',')]
    ignore: Vec<String>,

    /// Don't read .gitignore from the scan root
    #[arg(long)]
    no_ignore: bool,

    /// Include hidden files and directories
    #[arg(long)]
    hidden: bool,

    /// Sort key: file, line, type, text or author; append :desc to reverse
    #[arg(long, default_value = "file")]
    sort: SortSpec,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl ScanArgs {
    pub(super) fn handle(self) -> Result<(), Error> {
        let mut patterns = self.ignore;
        if !self.no_ignore {
            patterns.extend(config::load_gitignore(&self.dir)?);
        }

        // an explicit `.*` ignore term also turns hidden scanning off
        let (patterns, hidden_disabled) = config::split_hidden_toggle(patterns);
        let search_hidden = self.hidden && !hidden_disabled;

        tracing::debug!(
            "scanning {} with {} patterns (hidden: {search_hidden})",
            self.dir.display(),
            patterns.len()
        );

        let parser = MarkerParser::new(&self.types)?;
        let walker = IgnoreWalker::new(&self.dir, IgnoreList::new(patterns, search_hidden));
        let searcher = Searcher::new(PhysicalFS::new(), parser, walker);

        let mut comments = searcher.search_all()?;
        sort_comments(&mut comments, self.sort);

        let color = self.format == OutputFormat::Table && atty::is(atty::Stream::Stdout);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        render::write(&mut out, &comments, self.format, color)?;

        Ok(())
    }
}
