use liftscan::{BlockTrace, HeaderSource, InputFormat, LineTrace, ParseResultVerbose, SummaryField};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    const DIM: &str = "\x1b[2m";
    const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Wraps text in escape codes, or passes it through when color is off.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, code: &str) -> String {
            if self.enabled { format!("{code}{}{RESET}", s.as_ref()) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }

        /// Anything a reviewer should look at: warnings, dropped blocks.
        pub fn warn(&self, s: impl AsRef<str>) -> String {
            self.paint(format!("! {}", s.as_ref()), YELLOW)
        }

        /// `━━━ Title ━━━` rule preceded by a blank line.
        pub fn section(&self, title: &str) -> String {
            format!("\n{}", self.paint(format!("━━━ {title} ━━━"), GRAY))
        }
    }
}

pub fn print_run(input: &str, verbose: &ParseResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &verbose.details;
    let first_line = input.lines().map(str::trim).find(|line| !line.is_empty()).unwrap_or_default();
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{first_line}\" …"), ansi::CYAN)));

    println!("{}", palette.section("Route"));
    let route = match details.format {
        InputFormat::Normalized => palette.paint("normalized text", ansi::GREEN),
        InputFormat::RawOcr => palette.paint("raw OCR", ansi::BLUE),
    };
    println!("  {route}");

    if details.format == InputFormat::RawOcr {
        println!("{}", palette.section("Lines"));
        for line in &details.lines {
            println!("  {}", fmt_line(line, &palette));
        }

        println!("{}", palette.section("Blocks"));
        if details.blocks.is_empty() {
            println!("{}", palette.dim("  No exercise headers found"));
        }
        for block in &details.blocks {
            print_block(block, &palette);
        }
    }

    println!("{}", palette.section("Summary"));
    print_summary(verbose, &palette);

    println!("{}", palette.section("Exercises"));
    if verbose.result.exercises.is_empty() {
        println!("{}", palette.dim("  No exercises produced"));
    }
    for (idx, exercise) in verbose.result.exercises.iter().enumerate() {
        let sets: Vec<String> = exercise
            .sets
            .iter()
            .map(|set| match set.weight_kg {
                Some(weight) => format!("{weight}×{}", set.reps),
                None => format!("bw×{}", set.reps),
            })
            .collect();
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            palette.bold(palette.paint(&exercise.raw_name, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(sets.join("  "), ansi::YELLOW),
        );
    }

    println!("{}", palette.section("Meta"));
    let meta = &verbose.result.meta;
    println!(
        "  confidence: {}  │  needs_review: {}",
        palette.paint(meta.confidence.to_string(), ansi::GREEN),
        if meta.needs_review { palette.paint("yes", ansi::YELLOW) } else { palette.dim("no") },
    );
    for warning in &meta.warnings {
        println!("  {}", palette.warn(warning.to_string()));
    }

    println!("{}", palette.section("Timing"));
    println!(
        "  Total: {}  │  Codec: {}  │  Scan: {}  │  Classify: {}  │  Sets: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.dim(format!("{:?}", details.codec)),
        palette.dim(format!("{:?}", details.scan)),
        palette.dim(format!("{:?}", details.classify)),
        palette.dim(format!("{:?}", details.sets)),
    );
    println!();
}

fn fmt_line(line: &LineTrace, palette: &ansi::Palette) -> String {
    let verdict = match (line.header, line.rejected_by) {
        (Some(HeaderSource::Alias), _) => palette.paint("header (alias)", ansi::GREEN),
        (Some(HeaderSource::Heuristic), _) => palette.paint("header (heuristic)", ansi::CYAN),
        (None, Some(rule)) => palette.dim(rule),
        (None, None) => palette.dim("data"),
    };
    format!("{} {}  {} {}", palette.paint(format!("{:>3}", line.index), ansi::GRAY), line.text, palette.dim("│"), verdict)
}

fn print_block(block: &BlockTrace, palette: &ansi::Palette) {
    let status = if block.kept { palette.paint("✓ kept", ansi::GREEN) } else { palette.warn("dropped") };
    println!(
        "  {} {} {} {}",
        palette.paint(format!("@{}", block.header_index), ansi::GRAY),
        palette.bold(&block.name),
        palette.dim("│"),
        status,
    );
    if block.name != block.header {
        println!("      {} {}", palette.dim("raw:"), block.header);
    }
    println!(
        "      {} {}  {} {}  {} {}",
        palette.dim("mode:"),
        palette.paint(format!("{:?}", block.mode), ansi::BLUE),
        palette.dim("│ lines:"),
        palette.paint(block.lines.to_string(), ansi::YELLOW),
        palette.dim("│ sets:"),
        palette.paint(block.sets.to_string(), ansi::YELLOW),
    );
    if let Some(max) = block.max_weight {
        println!("      {} {}", palette.dim("max weight:"), palette.paint(format!("{max}kg"), ansi::CYAN));
    }
    if let Some(rule) = block.inferred_by {
        println!("      {} {}", palette.dim("inferred by:"), palette.paint(rule, ansi::CYAN));
    }
}

fn print_summary(verbose: &ParseResultVerbose, palette: &ansi::Palette) {
    let summary = &verbose.result.summary;
    for field in SummaryField::ALL {
        let value = match field {
            SummaryField::Date => summary.date.map(|date| date.to_string()),
            other => summary.metric(other).map(|value| value.to_string()),
        };
        let source = if verbose.details.label_row_fields.contains(&field) { palette.dim(" (label row)") } else { String::new() };
        match value {
            Some(value) => println!("  {:<22} {}{source}", field.as_str(), palette.paint(value, ansi::GREEN)),
            None => println!("  {:<22} {}", field.as_str(), palette.dim("—")),
        }
    }
}
