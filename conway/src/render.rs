// render.rs - Text rendering of a grid

use crate::grid::Grid;
use crate::loader::Symbols;
use serde::Deserialize;

/// How cells look on the console.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub live      : String,
    pub dead      : String,
    pub separator : String,   // between cells, never after the last one
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            live      : "▓".to_string(),
            dead      : "░".to_string(),
            separator : " ".to_string(),
        }
    }
}

impl RenderStyle {
    /// The parse symbols with no separator; output loads back as the same grid.
    pub fn plain(symbols: &Symbols) -> Self {
        Self {
            live      : symbols.live.to_string(),
            dead      : symbols.dead.to_string(),
            separator : String::new(),
        }
    }
}

/// One line per row.
pub fn render_lines(grid: &Grid, style: &RenderStyle) -> Vec<String> {
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&alive| if alive { style.live.as_str() } else { style.dead.as_str() })
                .collect::<Vec<_>>()
                .join(&style.separator)
        })
        .collect()
}

pub fn render(grid: &Grid, style: &RenderStyle) -> String {
    render_lines(grid, style).join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::EdgePolicy;
    use crate::loader::parse;

    #[test]
    fn test_default_style() {
        let grid = parse("x-\n-x", &Symbols::default(), EdgePolicy::Wrap).unwrap();
        assert_eq!(render_lines(&grid, &RenderStyle::default()), vec!["▓ ░", "░ ▓"]);
    }

    #[test]
    fn test_custom_separator() {
        let grid = parse("xx-", &Symbols::default(), EdgePolicy::Wrap).unwrap();
        let style = RenderStyle {
            live      : "O".into(),
            dead      : ".".into(),
            separator : "|".into(),
        };
        assert_eq!(render(&grid, &style), "O|O|.");
    }

    #[test]
    fn test_single_column_has_no_separator() {
        let grid = parse("x\n-", &Symbols::default(), EdgePolicy::Wrap).unwrap();
        assert_eq!(render(&grid, &RenderStyle::default()), "▓\n░");
    }

    #[test]
    fn test_plain_round_trip() {
        let symbols = Symbols { live: 'o', dead: '.' };
        let text = ".o..\noo.o\n...o";
        let grid = parse(text, &symbols, EdgePolicy::Clip).unwrap();
        let rendered = render(&grid, &RenderStyle::plain(&symbols));
        assert_eq!(rendered, text);
        assert_eq!(parse(&rendered, &symbols, EdgePolicy::Clip).unwrap(), grid);
    }
}
