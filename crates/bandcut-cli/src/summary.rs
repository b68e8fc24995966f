use std::path::Path;

use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub struct TrimSummary<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub format: &'a str,
    pub start_y: f64,
    pub end_y: f64,
    pub width: u32,
    pub height_before: u32,
    pub height_after: u32,
}

pub fn print_trim_summary(summary: &TrimSummary<'_>) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Band removed"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(12)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(summary.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(summary.output.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Format"),
        s.value.apply_to(summary.format)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Band"),
        s.value
            .apply_to(format!("rows {:.1} .. {:.1}", summary.start_y, summary.end_y))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!(
            "{w}x{} -> {w}x{}",
            summary.height_before,
            summary.height_after,
            w = summary.width
        ))
    );
    println!();
}
