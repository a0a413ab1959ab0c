mod cli;
mod surface;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use linefind_buffer::{pattern_from_selection, PatternRules, RopeDocument};
use linefind_config::{defaults, Config, ConfigStore, DisplaySettings};
use linefind_core::{Document, MatchProvider, ReportSurface, TextRange};
use linefind_logger::LogLevel;
use linefind_report::{
    summarize, ClickOrigin, ClickOutcome, DocumentId, Header, Navigator, Report, SourceView,
    SummaryOptions, SummaryPanel,
};
use linefind_text_search::{locate_visible, preview_stat, RegexMatcher};
use linefind_watcher::{ConfigWatcher, DEFAULT_DEBOUNCE_MS};

use cli::{Args, SearchToggle};
use surface::TerminalSurface;

/// Identity of the single document a run works on.
const SOURCE: DocumentId = DocumentId(1);

fn main() -> Result<()> {
    let args = Args::parse();
    let result = linefind(&args);

    if result.is_err() {
        // Show what went wrong before the failure
        for entry in linefind_logger::get_entries()
            .iter()
            .filter(|e| e.level >= LogLevel::Warn)
        {
            eprintln!("[{}] {}: {}", entry.timestamp, entry.level.to_str(), entry.message);
        }
    }

    result
}

fn linefind(args: &Args) -> Result<()> {
    // Load config first so the logger picks up its settings
    let mut store = match &args.config {
        Some(path) => ConfigStore::open(path.clone())?,
        None => ConfigStore::open_default()?,
    };
    let config = store.snapshot();
    linefind_logger::init(
        config.log_file_path(),
        defaults::MAX_LOG_ENTRIES,
        config.log_level(),
    );

    if let Some(toggle) = args.toggle {
        let enabled = toggle_option(&mut store, toggle)?;
        println!(
            "{}: {}",
            toggle.option_name(),
            if enabled { "on" } else { "off" }
        );
    }

    // A bare --toggle has nothing to search
    let Some(file) = &args.file else {
        return Ok(());
    };

    linefind_logger::info(format!("Summarizing {}", file.display()));
    let document = RopeDocument::from_file(file)?;
    run(args, &document, &args.apply(&store.snapshot()))?;

    if args.watch {
        let watcher = ConfigWatcher::new(&store, DEFAULT_DEBOUNCE_MS)?;
        eprintln!(
            "Watching {} for changes (Ctrl+C to quit)",
            store.path().display()
        );
        loop {
            if let Some(config) = watcher.wait(&mut store, Duration::from_millis(500)) {
                linefind_logger::set_min_level(config.log_level());
                linefind_logger::info("Config changed, re-rendering");
                if let Err(e) = run(args, &document, &args.apply(&config)) {
                    linefind_logger::error(format!("Re-render failed: {:#}", e));
                    eprintln!("Error: {:#}", e);
                }
            }
        }
    }

    Ok(())
}

/// Flip a search option and persist it; returns the new state.
fn toggle_option(store: &mut ConfigStore, toggle: SearchToggle) -> Result<bool> {
    let mut enabled = false;
    store.update(|config| {
        enabled = config.toggle_search_option(toggle.option_name())?;
        Ok(())
    })?;
    linefind_logger::info(format!("Toggled {} to {}", toggle.option_name(), enabled));
    Ok(enabled)
}

/// Build, publish and print the report, then resolve any clicks.
fn run(args: &Args, document: &RopeDocument, config: &Config) -> Result<()> {
    let summary = build_report(args, document, config)?;

    let mut stdout = io::stdout();
    let mut surface = TerminalSurface::new(stdout.is_terminal());
    summary.report.publish(&mut surface, &config.display.color)?;
    surface.render(&mut stdout)?;

    if let Some(nearest) = summary.nearest {
        let (row, col) = document.row_col_of(nearest.start);
        writeln!(stdout, "Nearest match at {}:{}", row, col)?;
    }

    if !args.clicks.is_empty() {
        let panel = SummaryPanel::new(summary.report, SOURCE);
        for line in resolve_clicks(&panel, &surface, document, &args.clicks, &config.display) {
            writeln!(stdout, "{}", line)?;
        }
    }

    Ok(())
}

/// A built report and the match to reveal around the selection, if any.
struct Summary {
    report: Report,
    nearest: Option<TextRange>,
}

fn build_report(args: &Args, document: &RopeDocument, config: &Config) -> Result<Summary> {
    let options = SummaryOptions::from(&config.display);

    if !args.summarize.is_empty() {
        let header = Header::selections(args.summarize.len());
        return Ok(Summary {
            report: summarize(document, &args.summarize, Some(header), &options),
            nearest: None,
        });
    }

    let (pattern, origin) = match (&args.pattern, args.selection) {
        (Some(pattern), _) => (pattern.clone(), None),
        (None, Some(selection)) => {
            let rules = PatternRules {
                auto_select: config.selection.auto_select,
                word_separators: &config.selection.word_separators,
                max_len: config.display.max_line_length,
            };
            let found = pattern_from_selection(document, selection, &rules)
                .context("The selection does not give a search pattern")?;
            (found.pattern, Some(found.origin))
        }
        (None, None) => bail!("No pattern given: pass PATTERN or --selection"),
    };

    let search = config.search.options();
    let matches = RegexMatcher::new().find_all(document, &pattern, &search)?;
    linefind_logger::info(preview_stat(Some(matches.len())));

    // Reveal a match on the row the search started from
    let nearest = origin.and_then(|origin| {
        let visible = document.line_containing(origin.start).range();
        locate_visible(&matches, visible).map(|i| matches[i])
    });

    let header = Header::for_pattern(matches.len(), &pattern, &search, origin);
    Ok(Summary {
        report: summarize(document, &matches, Some(header), &options),
        nearest,
    })
}

/// Resolve clicks in order, one line of output per click.
///
/// Each jump flashes its target; the delayed clears then run in order and
/// only the latest flash is still current.
fn resolve_clicks(
    panel: &SummaryPanel,
    surface: &dyn ReportSurface,
    document: &dyn Document,
    clicks: &[(usize, usize)],
    settings: &DisplaySettings,
) -> Vec<String> {
    let view = SourceView {
        id: SOURCE,
        visible: TextRange::new(0, document.len_chars()),
    };
    let mut navigator = Navigator::from_settings(settings);
    let mut flashes = Vec::new();
    let mut lines = Vec::new();

    for &(row, col) in clicks {
        let origin = match surface.offset_at(row, col) {
            Some(offset) => ClickOrigin::Summary { panel, offset },
            None => ClickOrigin::Other,
        };

        let line = match navigator.click(origin, Some(view)) {
            ClickOutcome::Jump(nav) => {
                let (to_row, to_col) = document.row_col_of(nav.caret);
                flashes.push(nav);
                format!(
                    "{}:{} -> jump to {}:{} ({}..{})",
                    row, col, to_row, to_col, nav.highlight.start, nav.highlight.end
                )
            }
            ClickOutcome::Miss => format!("{}:{} -> nothing here", row, col),
            ClickOutcome::PassThrough => format!("{}:{} -> outside the report", row, col),
            ClickOutcome::SourceChanged => "The source document has changed".to_string(),
        };
        lines.push(line);
    }

    for nav in flashes {
        if navigator.should_clear(nav.token) {
            lines.push(format!(
                "Flash on {}..{} clears after {}ms",
                nav.highlight.start,
                nav.highlight.end,
                nav.flash_for.as_millis()
            ));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    // "foo" sits at 20..23, 33..36 and 39..42
    const SOURCE_TEXT: &str = "fn main() {\n    let foo = 1;\n    foo + foo\n}\n";

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("linefind").chain(argv.iter().copied())).unwrap()
    }

    fn build(argv: &[&str]) -> Result<Summary> {
        let document = RopeDocument::from_text(SOURCE_TEXT);
        let args = args(argv);
        build_report(&args, &document, &args.apply(&Config::default()))
    }

    #[test]
    fn test_pattern_search() {
        let summary = build(&["f", "foo"]).unwrap();
        assert_eq!(summary.report.header(), "3 matches of 'foo'");
        assert_eq!(summary.report.body().len(), 2);
        assert_eq!(summary.nearest, None);
        assert_eq!(summary.report.resolve(0), None);
    }

    #[test]
    fn test_selection_pattern() {
        // Caret inside the first "foo"
        let summary = build(&["f", "--selection", "21:21"]).unwrap();
        assert_eq!(summary.report.header(), "3 matches of 'foo'");
        assert_eq!(summary.nearest, Some(TextRange::new(20, 23)));

        let jump = summary.report.resolve(0).unwrap();
        assert_eq!(jump.source, TextRange::new(20, 23));
    }

    #[test]
    fn test_selection_across_rows_is_rejected() {
        let err = build(&["f", "--selection", "0:25"]).err().unwrap();
        assert!(err.to_string().contains("selection"));
    }

    #[test]
    fn test_summarize_ranges() {
        let summary = build(&["f", "--summarize", "20:23,39:42"]).unwrap();
        assert_eq!(summary.report.header(), "2 selections");
        assert_eq!(summary.report.body().len(), 2);
        assert_eq!(summary.nearest, None);
    }

    #[test]
    fn test_missing_pattern() {
        let err = build(&["f"]).err().unwrap();
        assert!(err.to_string().contains("No pattern"));
    }

    #[test]
    fn test_toggle_option_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut store = ConfigStore::open(path.clone()).unwrap();

        assert!(toggle_option(&mut store, SearchToggle::WholeWord).unwrap());
        assert!(store.snapshot().search.whole_word);
        assert!(Config::load_from(&path).unwrap().search.whole_word);

        assert!(!toggle_option(&mut store, SearchToggle::WholeWord).unwrap());
        assert!(!Config::load_from(&path).unwrap().search.whole_word);
    }

    #[test]
    fn test_resolve_clicks() {
        let document = RopeDocument::from_text(SOURCE_TEXT);
        let summary = build(&["f", "--selection", "20:23"]).unwrap();
        let mut surface = TerminalSurface::new(false);
        summary.report.publish(&mut surface, "region.purplish").unwrap();
        let panel = SummaryPanel::new(summary.report, SOURCE);

        let lines = resolve_clicks(
            &panel,
            &surface,
            &document,
            &[(1, 0), (9, 0), (0, 0)],
            &DisplaySettings::default(),
        );

        assert_eq!(lines[0], "1:0 -> jump to 2:9 (20..23)");
        assert_eq!(lines[1], "9:0 -> outside the report");
        assert_eq!(lines[2], "0:0 -> jump to 2:9 (20..23)");
        // Only the last flash survives to be cleared
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[3], "Flash on 20..23 clears after 3000ms");
    }
}
