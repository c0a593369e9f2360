use std::iter::FromIterator;

use ansi_term::{Colour, Style};

const LOGO: [&str; 6] = [
    r" _____           _ _",
    r"|  __ \         | | |",
    r"| |__) |__ _  __| | |__   ___",
    r"|  _  // _` |/ _` | '_ \ / _ \",
    r"| | \ \ (_| | (_| | | | |  __/",
    r"|_|  \_\__,_|\__,_|_| |_|\___| •••",
];

pub const TITLE: &str = "🚀 DEVELOPER INFO";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub platform: &'static str,
    pub handle: &'static str
}

pub const CONTACTS: [Contact; 4] = [
    Contact { platform: "GITHUB", handle: "Akhil-Biswas" },
    Contact { platform: "GITLAB", handle: "Akhil-Biswas" },
    Contact { platform: "LINKEDIN", handle: "akhilbiswas-radhe" },
    Contact { platform: "WEBSITE", handle: "akhil-biswas.netlify.app" },
];

#[derive(Debug, Clone, Copy)]
enum Justify {
    Left,
    Center
}

struct Column {
    header: &'static str,
    justify: Justify,
    style: Style
}

fn columns() -> [Column; 2] {
    [
        Column { header: "PLATFORM", justify: Justify::Center, style: Colour::Cyan.normal() },
        Column { header: "USERNAME / URL", justify: Justify::Left, style: Colour::Purple.normal() },
    ]
}

// terminal columns; pictographs such as the title rocket take two
fn width_of(text: &str) -> usize {
    text.chars()
        .map(|c| if ('\u{1F300}'..='\u{1FAFF}').contains(&c) { 2 } else { 1 })
        .sum()
}

fn spaces(n: usize) -> String {
    String::from_iter(vec![' '; n])
}

fn rule(left: char, fill: char, join: char, right: char, widths: &[usize]) -> String {
    let cells: Vec<String> = widths.iter()
        .map(|w| String::from_iter(vec![fill; w + 2]))
        .collect();

    format!("{}{}{}", left, cells.join(join.to_string().as_str()), right)
}

fn row(cells: &[&str], widths: &[usize], columns: &[Column], bar: char, color: bool, bold: bool) -> String {
    let rendered: Vec<String> = cells.iter().zip(widths).zip(columns)
        .map(|((text, width), column)| {
            let gap = width - width_of(text);
            let (before, after) = match column.justify {
                Justify::Left => (0, gap),
                Justify::Center => (gap / 2, gap - gap / 2)
            };
            let text = if color {
                let style = if bold { column.style.bold() } else { column.style };
                style.paint(*text).to_string()
            } else {
                text.to_string()
            };

            format!(" {}{}{} ", spaces(before), text, spaces(after))
        })
        .collect();

    format!("{0}{1}{0}", bar, rendered.join(bar.to_string().as_str()))
}

/// The contact table, one string per terminal line, title first.
///
/// Every line below the title has the same visible width.
pub fn render_table(color: bool) -> Vec<String> {
    let columns = columns();
    let widths: Vec<usize> = columns.iter().enumerate()
        .map(|(i, column)| {
            CONTACTS.iter()
                .map(|c| width_of(if i == 0 { c.platform } else { c.handle }))
                .chain(Some(width_of(column.header)))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let table_width = widths.iter().map(|w| w + 3).sum::<usize>() + 1;

    let mut lines = Vec::new();

    let pad = table_width.saturating_sub(width_of(TITLE)) / 2;
    let title = if color {
        Colour::Yellow.on(Colour::Black).bold().underline().paint(TITLE).to_string()
    } else {
        TITLE.to_string()
    };
    lines.push(format!("{}{}", spaces(pad), title));

    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    lines.push(rule('┏', '━', '┳', '┓', &widths));
    lines.push(row(&headers, &widths, &columns, '┃', color, true));
    lines.push(rule('┡', '━', '╇', '┩', &widths));

    for (i, contact) in CONTACTS.iter().enumerate() {
        if i > 0 {
            lines.push(rule('├', '─', '┼', '┤', &widths));
        }
        lines.push(row(&[contact.platform, contact.handle], &widths, &columns, '│', color, false));
    }

    lines.push(rule('└', '─', '┴', '┘', &widths));

    lines
}

pub fn logo() -> String {
    LOGO.join("\n")
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.trim().parse().ok())
        .unwrap_or(80)
}

fn centered(lines: &[String], block_width: usize, width: usize) -> String {
    let indent = spaces(width.saturating_sub(block_width) / 2);

    lines.iter()
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Prints the logo and the developer contact table, centred on the terminal.
pub fn print_banner() {
    let width = terminal_width();

    let logo_style = Colour::Purple.bold();
    let logo_lines: Vec<String> = LOGO.iter().map(|l| logo_style.paint(*l).to_string()).collect();
    let logo_width = LOGO.iter().map(|l| width_of(l)).max().unwrap_or(0);

    println!("{}\n", centered(&logo_lines, logo_width, width));

    let table = render_table(true);
    let table_width = render_table(false).last().map(|l| width_of(l)).unwrap_or(0);

    println!("{}", centered(&table, table_width, width));
}
